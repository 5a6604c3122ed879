//! Heuristic exoplanet transit classification with ranked, human-readable explanations.

pub mod batch;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod router;
pub mod telemetry;

pub use classifier::{
    classify, ClassificationEngine, ClassificationResult, Contribution, Direction, FeatureKey,
    FeatureSet, Label,
};
