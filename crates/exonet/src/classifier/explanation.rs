use super::features::{FeatureKey, FeatureSet};
use super::narrative::narrative_for;
use super::scoring::{depth_plausible, flag_sum, period_plausible, radius_plausible};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    fn from_sign(sign: f64) -> Self {
        if sign > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// One feature's pull toward (or away from) a planet label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub feature: FeatureKey,
    pub direction: Direction,
    pub magnitude: f64,
    pub value: f64,
    pub narrative: &'static str,
}

impl Contribution {
    fn new(feature: FeatureKey, direction: Direction, magnitude: f64, value: f64) -> Self {
        Self {
            feature,
            direction,
            magnitude,
            value,
            narrative: narrative_for(feature).select(direction),
        }
    }
}

const FLAG_MAGNITUDE_SCALE: f64 = 2.0;
const CLEAN_FLAGS_MAGNITUDE: f64 = 1.5;

/// `log10(x + 1)`, defined as zero where the argument leaves the logarithm's domain.
fn log_term(value: f64) -> f64 {
    let argument = value + 1.0;
    if argument > 0.0 {
        argument.log10()
    } else {
        0.0
    }
}

fn range_sign(plausible: bool) -> f64 {
    if plausible {
        1.0
    } else {
        -1.0
    }
}

fn snr_contribution(features: &FeatureSet) -> Contribution {
    let snr = features.get(FeatureKey::KoiModelSnr);
    let delta = if snr > 40.0 {
        (snr - 40.0) / 100.0
    } else {
        -(40.0 - snr) / 100.0
    };
    Contribution::new(
        FeatureKey::KoiModelSnr,
        Direction::from_sign(delta),
        (delta * 10.0).abs(),
        snr,
    )
}

fn flag_contribution(features: &FeatureSet) -> Contribution {
    let sum = flag_sum(features);
    // Magnitude follows all four flags but only the not-transit-like value is reported.
    if sum > 0.0 {
        Contribution::new(
            FeatureKey::KoiFpflagNt,
            Direction::Negative,
            sum * FLAG_MAGNITUDE_SCALE,
            features.get(FeatureKey::KoiFpflagNt),
        )
    } else {
        Contribution::new(
            FeatureKey::KoiFpflagNt,
            Direction::Positive,
            CLEAN_FLAGS_MAGNITUDE,
            0.0,
        )
    }
}

fn radius_contribution(features: &FeatureSet) -> Contribution {
    let radius = features.get(FeatureKey::KoiPrad);
    let sign = range_sign(radius_plausible(radius));
    Contribution::new(
        FeatureKey::KoiPrad,
        Direction::from_sign(sign),
        (sign * (radius / 5.0)).abs(),
        radius,
    )
}

fn depth_contribution(features: &FeatureSet) -> Contribution {
    let depth = features.get(FeatureKey::KoiDepth);
    let sign = range_sign(depth_plausible(depth));
    Contribution::new(
        FeatureKey::KoiDepth,
        Direction::from_sign(sign),
        (sign * log_term(depth) / 2.0).abs(),
        depth,
    )
}

fn period_contribution(features: &FeatureSet) -> Contribution {
    let period = features.get(FeatureKey::KoiPeriod);
    let sign = range_sign(period_plausible(period));
    Contribution::new(
        FeatureKey::KoiPeriod,
        Direction::from_sign(sign),
        (sign * log_term(period) / 3.0).abs(),
        period,
    )
}

pub(crate) fn candidate_contributions(features: &FeatureSet) -> Vec<Contribution> {
    vec![
        snr_contribution(features),
        flag_contribution(features),
        radius_contribution(features),
        depth_contribution(features),
        period_contribution(features),
    ]
}

/// Orders contributions by descending magnitude and keeps the first `limit`.
///
/// The sort is stable, so equal magnitudes keep their generation order.
pub fn top_k(mut contributions: Vec<Contribution>, limit: usize) -> Vec<Contribution> {
    contributions.sort_by(|left, right| right.magnitude.total_cmp(&left.magnitude));
    contributions.truncate(limit);
    contributions
}
