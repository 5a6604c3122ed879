use super::explanation::Direction;
use super::features::FeatureKey;

/// Paired descriptions shown when a feature pushes toward or away from a planet label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Narrative {
    pub positive: &'static str,
    pub negative: &'static str,
}

impl Narrative {
    pub const fn select(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::Positive => self.positive,
            Direction::Negative => self.negative,
        }
    }
}

const SNR: Narrative = Narrative {
    positive: "Strong signal-to-noise ratio indicates a clear, consistent transit signature",
    negative: "Weak signal-to-noise ratio suggests potential noise or artifacts in the data",
};

const NOT_TRANSIT_LIKE: Narrative = Narrative {
    positive: "No flags for non-transit-like behavior - transit signature appears genuine",
    negative: "Flagged for non-transit-like behavior - may be caused by stellar activity or systematic effects",
};

const DEPTH: Narrative = Narrative {
    positive: "Transit depth is consistent with planetary size and validates the signal",
    negative: "Unusual transit depth may indicate contamination or blended sources",
};

const RADIUS: Narrative = Narrative {
    positive: "Planet radius falls within expected range for confirmed exoplanets",
    negative: "Planet radius is outside typical range, suggesting possible false positive",
};

const DURATION: Narrative = Narrative {
    positive: "Transit duration matches expectations for orbital configuration",
    negative: "Transit duration inconsistent with expected planetary geometry",
};

const PERIOD: Narrative = Narrative {
    positive: "Orbital period shows stable, repeating transits characteristic of planets",
    negative: "Orbital period inconsistencies suggest potential binary star or other phenomena",
};

const IMPACT: Narrative = Narrative {
    positive: "Impact parameter indicates favorable geometry for reliable detection",
    negative: "High impact parameter suggests grazing transit, increasing uncertainty",
};

const STELLAR_ECLIPSE: Narrative = Narrative {
    positive: "No stellar eclipse signature detected - consistent with planetary transit",
    negative: "Possible stellar eclipse detected - may be binary star system",
};

const CENTROID_OFFSET: Narrative = Narrative {
    positive: "Centroid analysis shows transit occurs on target star",
    negative: "Centroid offset detected - signal may originate from background source",
};

const EQUILIBRIUM_TEMPERATURE: Narrative = Narrative {
    positive: "Equilibrium temperature consistent with planetary properties",
    negative: "Unusual equilibrium temperature for this system configuration",
};

const INSOLATION: Narrative = Narrative {
    positive: "Insolation flux supports planetary interpretation",
    negative: "Extreme insolation flux raises questions about system stability",
};

const EPHEMERIS_MATCH: Narrative = Narrative {
    positive: "No ephemeris inconsistencies - transits occur on regular schedule",
    negative: "Ephemeris mismatch detected - timing variations suggest complications",
};

/// Looks up the narrative pair for a feature. Every [`FeatureKey`] has one.
pub const fn narrative_for(key: FeatureKey) -> &'static Narrative {
    match key {
        FeatureKey::KoiModelSnr => &SNR,
        FeatureKey::KoiFpflagNt => &NOT_TRANSIT_LIKE,
        FeatureKey::KoiDepth => &DEPTH,
        FeatureKey::KoiPrad => &RADIUS,
        FeatureKey::KoiDuration => &DURATION,
        FeatureKey::KoiPeriod => &PERIOD,
        FeatureKey::KoiImpact => &IMPACT,
        FeatureKey::KoiFpflagSs => &STELLAR_ECLIPSE,
        FeatureKey::KoiFpflagCo => &CENTROID_OFFSET,
        FeatureKey::KoiTeq => &EQUILIBRIUM_TEMPERATURE,
        FeatureKey::KoiInsol => &INSOLATION,
        FeatureKey::KoiFpflagEc => &EPHEMERIS_MATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_feature_has_distinct_paired_narratives() {
        let mut seen = HashSet::new();
        for key in FeatureKey::ALL {
            let narrative = narrative_for(key);
            assert!(!narrative.positive.is_empty(), "{key} positive narrative");
            assert!(!narrative.negative.is_empty(), "{key} negative narrative");
            assert_ne!(narrative.positive, narrative.negative);
            assert!(seen.insert(narrative.positive), "{key} reuses a narrative");
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn select_follows_direction() {
        let narrative = narrative_for(FeatureKey::KoiFpflagCo);
        assert!(narrative
            .select(Direction::Negative)
            .contains("Centroid offset detected"));
        assert!(narrative
            .select(Direction::Positive)
            .contains("occurs on target star"));
    }
}
