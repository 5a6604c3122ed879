use serde::Serialize;

/// Qualitative weight shown next to each input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Importance {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl Importance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub typical_range: &'static str,
    pub importance: Importance,
    /// Relative weight of the feature in explanations; only scored features carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

const fn define(
    name: &'static str,
    description: &'static str,
    unit: &'static str,
    typical_range: &'static str,
    importance: Importance,
    weight: Option<f64>,
) -> FeatureDefinition {
    FeatureDefinition {
        name,
        description,
        unit,
        typical_range,
        importance,
        weight,
    }
}

pub(super) static FEATURE_DEFINITIONS: [FeatureDefinition; 20] = [
    define(
        "koi_period",
        "Orbital Period (days)",
        "days",
        "0.5 - 500",
        Importance::High,
        Some(0.08),
    ),
    define(
        "koi_time0bk",
        "Transit Epoch (BKJD)",
        "BKJD",
        "100 - 2000",
        Importance::Medium,
        None,
    ),
    define(
        "koi_impact",
        "Impact Parameter",
        "dimensionless",
        "0 - 1",
        Importance::High,
        Some(0.07),
    ),
    define(
        "koi_duration",
        "Transit Duration (hours)",
        "hours",
        "1 - 20",
        Importance::Medium,
        Some(0.09),
    ),
    define(
        "koi_depth",
        "Transit Depth (ppm)",
        "ppm",
        "100 - 100000",
        Importance::High,
        Some(0.12),
    ),
    define(
        "koi_prad",
        "Planet Radius (Earth radii)",
        "R⊕",
        "0.5 - 30",
        Importance::High,
        Some(0.11),
    ),
    define(
        "koi_teq",
        "Equilibrium Temperature (K)",
        "K",
        "100 - 3000",
        Importance::High,
        Some(0.04),
    ),
    define(
        "koi_insol",
        "Insolation Flux (Earth flux)",
        "F⊕",
        "0.1 - 1000",
        Importance::Medium,
        Some(0.03),
    ),
    define(
        "koi_model_snr",
        "Transit Signal-to-Noise Ratio",
        "dimensionless",
        "5 - 200",
        Importance::VeryHigh,
        Some(0.18),
    ),
    define(
        "koi_tce_plnt_num",
        "TCE Planet Number",
        "count",
        "1 - 7",
        Importance::Low,
        None,
    ),
    define(
        "koi_steff",
        "Stellar Effective Temperature (K)",
        "K",
        "3000 - 8000",
        Importance::High,
        None,
    ),
    define(
        "koi_slogg",
        "Stellar Surface Gravity (log10(cm/s²))",
        "log10(cm/s²)",
        "3.5 - 5.0",
        Importance::Medium,
        None,
    ),
    define(
        "koi_srad",
        "Stellar Radius (Solar radii)",
        "R☉",
        "0.5 - 3.0",
        Importance::Medium,
        None,
    ),
    define(
        "ra",
        "Right Ascension (degrees)",
        "degrees",
        "0 - 360",
        Importance::Low,
        None,
    ),
    define(
        "dec",
        "Declination (degrees)",
        "degrees",
        "-90 - 90",
        Importance::Low,
        None,
    ),
    define(
        "koi_kepmag",
        "Kepler Magnitude",
        "mag",
        "10 - 18",
        Importance::Medium,
        None,
    ),
    define(
        "koi_fpflag_nt",
        "Not Transit-Like Flag",
        "binary",
        "0 - 1",
        Importance::VeryHigh,
        Some(0.15),
    ),
    define(
        "koi_fpflag_ss",
        "Stellar Eclipse Flag",
        "binary",
        "0 - 1",
        Importance::VeryHigh,
        Some(0.06),
    ),
    define(
        "koi_fpflag_co",
        "Centroid Offset Flag",
        "binary",
        "0 - 1",
        Importance::VeryHigh,
        Some(0.05),
    ),
    define(
        "koi_fpflag_ec",
        "Ephemeris Match Eclipsing Binary Flag",
        "binary",
        "0 - 1",
        Importance::VeryHigh,
        Some(0.02),
    ),
];
