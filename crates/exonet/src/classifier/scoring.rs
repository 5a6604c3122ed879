use super::features::{FeatureKey, FeatureSet};
use serde::Serialize;

pub(crate) const NEUTRAL_PRIOR: f64 = 0.5;
pub(crate) const FLAG_PENALTY: f64 = 0.15;

/// Scoring rule that produced an adjustment, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    SignalToNoise,
    FalsePositiveFlags,
    PlanetRadius,
    TransitDepth,
    OrbitalPeriod,
    ImpactParameter,
}

impl ScoringRule {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SignalToNoise => "Signal-to-noise ratio",
            Self::FalsePositiveFlags => "False-positive flags",
            Self::PlanetRadius => "Planet radius",
            Self::TransitDepth => "Transit depth",
            Self::OrbitalPeriod => "Orbital period",
            Self::ImpactParameter => "Impact parameter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreAdjustment {
    pub rule: ScoringRule,
    pub delta: f64,
}

/// Running tally of rule adjustments applied to the neutral prior.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSheet {
    pub adjustments: Vec<ScoreAdjustment>,
    pub raw: f64,
}

impl ScoreSheet {
    fn new() -> Self {
        Self {
            adjustments: Vec::with_capacity(6),
            raw: NEUTRAL_PRIOR,
        }
    }

    fn apply(&mut self, rule: ScoringRule, delta: f64) {
        self.raw += delta;
        self.adjustments.push(ScoreAdjustment { rule, delta });
    }

    /// Planet-likelihood after clamping into `[0, 1]`.
    pub fn clamped(&self) -> f64 {
        self.raw.clamp(0.0, 1.0)
    }
}

pub(crate) fn radius_plausible(radius: f64) -> bool {
    (0.5..=15.0).contains(&radius)
}

pub(crate) fn depth_plausible(depth: f64) -> bool {
    depth > 50.0 && depth < 5000.0
}

pub(crate) fn period_plausible(period: f64) -> bool {
    (0.5..=500.0).contains(&period)
}

pub(crate) fn flag_sum(features: &FeatureSet) -> f64 {
    FeatureKey::FALSE_POSITIVE_FLAGS
        .iter()
        .map(|flag| features.get(*flag))
        .sum()
}

fn snr_adjustment(snr: f64) -> f64 {
    if snr > 60.0 {
        0.25
    } else if snr > 40.0 {
        0.15
    } else if snr > 20.0 {
        0.05
    } else {
        -0.15
    }
}

pub(crate) fn score_features(features: &FeatureSet) -> ScoreSheet {
    let mut sheet = ScoreSheet::new();

    sheet.apply(
        ScoringRule::SignalToNoise,
        snr_adjustment(features.get(FeatureKey::KoiModelSnr)),
    );

    // Flags are not checked for 0/1; whatever was supplied scales the penalty.
    sheet.apply(
        ScoringRule::FalsePositiveFlags,
        -(flag_sum(features) * FLAG_PENALTY),
    );

    let radius = if radius_plausible(features.get(FeatureKey::KoiPrad)) {
        0.1
    } else {
        -0.1
    };
    sheet.apply(ScoringRule::PlanetRadius, radius);

    let depth = if depth_plausible(features.get(FeatureKey::KoiDepth)) {
        0.08
    } else {
        -0.05
    };
    sheet.apply(ScoringRule::TransitDepth, depth);

    let period = if period_plausible(features.get(FeatureKey::KoiPeriod)) {
        0.05
    } else {
        -0.05
    };
    sheet.apply(ScoringRule::OrbitalPeriod, period);

    // Bonus only: out-of-range impact parameters are not penalised.
    let impact = features.get(FeatureKey::KoiImpact);
    if (0.0..=1.0).contains(&impact) {
        sheet.apply(ScoringRule::ImpactParameter, 0.03);
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn snr_branches_use_strict_thresholds() {
        assert_eq!(snr_adjustment(60.0), 0.15);
        assert_eq!(snr_adjustment(60.01), 0.25);
        assert_eq!(snr_adjustment(40.0), 0.05);
        assert_eq!(snr_adjustment(20.0), -0.15);
        assert_eq!(snr_adjustment(-3.0), -0.15);
    }

    #[test]
    fn plausibility_bounds_match_rule_edges() {
        assert!(radius_plausible(0.5));
        assert!(radius_plausible(15.0));
        assert!(!radius_plausible(15.01));
        assert!(!depth_plausible(50.0));
        assert!(!depth_plausible(5000.0));
        assert!(depth_plausible(50.5));
        assert!(period_plausible(0.5));
        assert!(period_plausible(500.0));
        assert!(!period_plausible(0.49));
    }

    #[test]
    fn impact_outside_unit_range_adds_nothing() {
        let inside = score_features(&FeatureSet::new().with("koi_impact", 1.0));
        let outside = score_features(&FeatureSet::new().with("koi_impact", 1.4));

        assert!(inside
            .adjustments
            .iter()
            .any(|adjustment| adjustment.rule == ScoringRule::ImpactParameter));
        assert!(outside
            .adjustments
            .iter()
            .all(|adjustment| adjustment.rule != ScoringRule::ImpactParameter));
        assert!(approx(inside.raw - outside.raw, 0.03));
    }

    #[test]
    fn flag_penalty_scales_with_raw_flag_values() {
        let features = FeatureSet::new()
            .with("koi_fpflag_nt", 2.0)
            .with("koi_fpflag_ec", 0.5);
        assert!(approx(flag_sum(&features), 2.5));

        let sheet = score_features(&features);
        let penalty = sheet
            .adjustments
            .iter()
            .find(|adjustment| adjustment.rule == ScoringRule::FalsePositiveFlags)
            .expect("flag adjustment recorded");
        assert!(approx(penalty.delta, -0.375));
    }

    #[test]
    fn depth_penalty_is_smaller_than_reward() {
        let good = score_features(&FeatureSet::new().with("koi_depth", 890.0));
        let bad = score_features(&FeatureSet::new().with("koi_depth", 9000.0));
        assert!(approx(good.raw - bad.raw, 0.13));
    }
}
