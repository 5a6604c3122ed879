mod explanation;
mod features;
mod narrative;
mod scoring;
pub mod views;

pub use explanation::{top_k, Contribution, Direction};
pub use features::{FeatureKey, FeatureSet};
pub use narrative::{narrative_for, Narrative};
pub use scoring::{ScoreAdjustment, ScoreSheet, ScoringRule};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_EXPLANATION_LIMIT: usize = 5;
pub const DECISION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "PLANET")]
    Planet,
    #[serde(rename = "FALSE POSITIVE")]
    FalsePositive,
}

impl Label {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planet => "PLANET",
            Self::FalsePositive => "FALSE POSITIVE",
        }
    }
}

/// Outcome of one classification: label, certainty, and the ranked reasons behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: Label,
    /// Planet-likelihood in `[0, 1]` after clamping.
    pub score: f64,
    /// Certainty in `label`, always in `[0.5, 1]`.
    pub confidence: f64,
    pub explanations: Vec<Contribution>,
}

impl ClassificationResult {
    /// Confidence as a percentage with one decimal place, e.g. `"82.0"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}", self.confidence * 100.0)
    }

    pub fn is_planet(&self) -> bool {
        self.label == Label::Planet
    }
}

/// Stateless scorer; the only knob is how many explanations survive ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationEngine {
    explanation_limit: usize,
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLANATION_LIMIT)
    }
}

impl ClassificationEngine {
    pub fn new(explanation_limit: usize) -> Self {
        Self { explanation_limit }
    }

    pub fn explanation_limit(&self) -> usize {
        self.explanation_limit
    }

    /// Per-rule adjustments behind a score, before clamping.
    pub fn score_sheet(&self, features: &FeatureSet) -> ScoreSheet {
        scoring::score_features(features)
    }

    pub fn classify(&self, features: &FeatureSet) -> ClassificationResult {
        let score = self.score_sheet(features).clamped();

        let (label, confidence) = decide(score);
        let explanations = top_k(
            explanation::candidate_contributions(features),
            self.explanation_limit,
        );

        debug!(label = label.label(), score, "classified transit candidate");

        ClassificationResult {
            label,
            score,
            confidence,
            explanations,
        }
    }
}

/// Label and confidence for a clamped score; exactly 0.5 is not a planet.
fn decide(score: f64) -> (Label, f64) {
    if score > DECISION_THRESHOLD {
        (Label::Planet, score)
    } else {
        (Label::FalsePositive, 1.0 - score)
    }
}

/// Classifies with the default engine (top five explanations).
pub fn classify(features: &FeatureSet) -> ClassificationResult {
    ClassificationEngine::default().classify(features)
}
