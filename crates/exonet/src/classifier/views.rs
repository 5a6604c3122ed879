use super::{ClassificationResult, Contribution, Direction, FeatureKey, Label};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationEntry {
    pub feature: FeatureKey,
    pub impact: Direction,
    pub magnitude: f64,
    pub value: f64,
    pub description: String,
}

impl From<&Contribution> for ExplanationEntry {
    fn from(contribution: &Contribution) -> Self {
        Self {
            feature: contribution.feature,
            impact: contribution.direction,
            magnitude: contribution.magnitude,
            value: contribution.value,
            description: contribution.narrative.to_string(),
        }
    }
}

/// Wire shape returned by the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionView {
    pub prediction: Label,
    pub confidence: f64,
    pub confidence_percent: String,
    pub explanation: Vec<ExplanationEntry>,
}

impl From<&ClassificationResult> for PredictionView {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            prediction: result.label,
            confidence: result.confidence,
            confidence_percent: result.confidence_percent(),
            explanation: result
                .explanations
                .iter()
                .map(ExplanationEntry::from)
                .collect(),
        }
    }
}
