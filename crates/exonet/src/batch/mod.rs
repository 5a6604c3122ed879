//! Bulk classification of candidate rows exported as CSV.

mod parser;

pub use parser::CandidateRow;

use crate::classifier::{ClassificationEngine, ClassificationResult};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read candidate export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate CSV data: {0}")]
    Csv(#[from] csv::Error),
}

pub struct BatchImporter;

impl BatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateRow>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CandidateRow>, BatchImportError> {
        Ok(parser::parse_rows(reader)?)
    }
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub row: CandidateRow,
    pub result: ClassificationResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub planets: usize,
    pub false_positives: usize,
    pub mean_confidence: Option<f64>,
}

impl BatchSummary {
    fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let total = outcomes.len();
        let planets = outcomes
            .iter()
            .filter(|outcome| outcome.result.is_planet())
            .count();
        let mean_confidence = if total == 0 {
            None
        } else {
            let sum: f64 = outcomes
                .iter()
                .map(|outcome| outcome.result.confidence)
                .sum();
            Some(sum / total as f64)
        };

        Self {
            total,
            planets,
            false_positives: total - planets,
            mean_confidence,
        }
    }
}

pub fn classify_rows(
    engine: &ClassificationEngine,
    rows: Vec<CandidateRow>,
) -> (Vec<BatchOutcome>, BatchSummary) {
    let outcomes: Vec<BatchOutcome> = rows
        .into_iter()
        .map(|row| {
            let result = engine.classify(&row.features);
            BatchOutcome { row, result }
        })
        .collect();
    let summary = BatchSummary::from_outcomes(&outcomes);

    info!(
        total = summary.total,
        planets = summary.planets,
        false_positives = summary.false_positives,
        "classified candidate batch"
    );

    (outcomes, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Label;
    use std::io::Cursor;

    #[test]
    fn classifies_each_row_and_tallies_labels() {
        let csv = "kepoi_name,koi_model_snr,koi_prad,koi_depth,koi_period,koi_impact,koi_fpflag_nt\n\
                   K00001.01,78.5,2.65,890,3.689,0.12,0\n\
                   K00002.01,5,50,10,1000,0.5,1\n\
                   K00003.01,,,,,,\n";
        let rows = BatchImporter::from_reader(Cursor::new(csv)).expect("rows parse");
        let (outcomes, summary) = classify_rows(&ClassificationEngine::default(), rows);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.planets, 1);
        assert_eq!(summary.false_positives, 2);
        assert_eq!(outcomes[0].result.label, Label::Planet);
        assert_eq!(outcomes[0].row.label.as_deref(), Some("K00001.01"));
        assert_eq!(outcomes[2].result.label, Label::FalsePositive);
        assert!(summary.mean_confidence.is_some());
    }

    #[test]
    fn empty_export_has_no_mean_confidence() {
        let rows = BatchImporter::from_reader(Cursor::new("koi_model_snr\n")).expect("parses");
        let (outcomes, summary) = classify_rows(&ClassificationEngine::default(), rows);
        assert!(outcomes.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.mean_confidence, None);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = BatchImporter::from_path("/nonexistent/candidates.csv")
            .expect_err("missing file fails");
        assert!(matches!(err, BatchImportError::Io(_)));
        assert!(err.to_string().starts_with("failed to read candidate export"));
    }
}
