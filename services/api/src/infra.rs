use exonet::catalog::sample_at;
use exonet::classifier::FeatureSet;
use exonet::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_feature_assignment(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("feature name missing in '{raw}'"));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{}' as a number ({err})", value.trim()))?;

    Ok((name.to_string(), value))
}

pub(crate) fn load_feature_file(path: &Path) -> Result<FeatureSet, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|err| AppError::Input(format!("{} is not a feature object ({err})", path.display())))
}

/// Layers sample row, JSON file and explicit assignments, later sources winning.
pub(crate) fn assemble_features(
    sample: Option<usize>,
    json: Option<&Path>,
    assignments: Vec<(String, f64)>,
) -> Result<FeatureSet, AppError> {
    let mut features = match sample {
        Some(index) => sample_at(index)
            .map(|draw| draw.row.to_feature_set())
            .ok_or_else(|| AppError::Input(format!("no sample row at index {index}")))?,
        None => FeatureSet::new(),
    };

    if let Some(path) = json {
        let overrides = load_feature_file(path)?;
        for (name, value) in overrides.iter() {
            features.insert(name, value);
        }
    }

    for (name, value) in assignments {
        features.insert(name, value);
    }

    Ok(features)
}
