use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Transit measurements the scoring rules and narrative catalog know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    KoiPeriod,
    KoiImpact,
    KoiDuration,
    KoiDepth,
    KoiPrad,
    KoiTeq,
    KoiInsol,
    KoiModelSnr,
    KoiFpflagNt,
    KoiFpflagSs,
    KoiFpflagCo,
    KoiFpflagEc,
}

impl FeatureKey {
    pub const ALL: [FeatureKey; 12] = [
        FeatureKey::KoiPeriod,
        FeatureKey::KoiImpact,
        FeatureKey::KoiDuration,
        FeatureKey::KoiDepth,
        FeatureKey::KoiPrad,
        FeatureKey::KoiTeq,
        FeatureKey::KoiInsol,
        FeatureKey::KoiModelSnr,
        FeatureKey::KoiFpflagNt,
        FeatureKey::KoiFpflagSs,
        FeatureKey::KoiFpflagCo,
        FeatureKey::KoiFpflagEc,
    ];

    /// The four false-positive indicator flags, summed by the flag rule.
    pub const FALSE_POSITIVE_FLAGS: [FeatureKey; 4] = [
        FeatureKey::KoiFpflagNt,
        FeatureKey::KoiFpflagSs,
        FeatureKey::KoiFpflagCo,
        FeatureKey::KoiFpflagEc,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KoiPeriod => "koi_period",
            Self::KoiImpact => "koi_impact",
            Self::KoiDuration => "koi_duration",
            Self::KoiDepth => "koi_depth",
            Self::KoiPrad => "koi_prad",
            Self::KoiTeq => "koi_teq",
            Self::KoiInsol => "koi_insol",
            Self::KoiModelSnr => "koi_model_snr",
            Self::KoiFpflagNt => "koi_fpflag_nt",
            Self::KoiFpflagSs => "koi_fpflag_ss",
            Self::KoiFpflagCo => "koi_fpflag_co",
            Self::KoiFpflagEc => "koi_fpflag_ec",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named numeric measurements for one transit candidate.
///
/// Any name is accepted; the engine only reads the keys in [`FeatureKey`]. Reads go
/// through [`FeatureSet::get`], which treats absent and non-finite values as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet {
    values: BTreeMap<String, f64>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Default-zero read used by every scoring and explanation rule.
    pub fn get(&self, key: FeatureKey) -> f64 {
        self.values
            .get(key.as_str())
            .copied()
            .filter(|value| value.is_finite())
            .unwrap_or(0.0)
    }

    /// Raw lookup by name, without the default-zero policy.
    pub fn raw(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FeatureSetVisitor)
    }
}

struct FeatureSetVisitor;

impl<'de> Visitor<'de> for FeatureSetVisitor {
    type Value = FeatureSet;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON object mapping feature names to numbers")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut set = FeatureSet::new();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            // Non-numeric members degrade to "missing" rather than failing the request.
            if let Some(number) = value.as_f64() {
                set.insert(name, number);
            }
        }
        Ok(set)
    }
}
