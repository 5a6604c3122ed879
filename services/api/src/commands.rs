use crate::infra::{assemble_features, parse_feature_assignment};
use clap::{Args, ValueEnum};
use exonet::batch::{classify_rows, BatchImporter, BatchOutcome, BatchSummary};
use exonet::catalog::{feature_catalog, random_sample, sample_at, SampleDraw};
use exonet::classifier::views::PredictionView;
use exonet::classifier::{ClassificationEngine, ClassificationResult, FeatureSet, ScoreSheet};
use exonet::config::AppConfig;
use exonet::error::AppError;
use exonet::router::DemoDataView;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ClassifyArgs {
    /// Feature value as NAME=VALUE; repeat for each feature
    #[arg(long = "feature", short = 'f', value_name = "NAME=VALUE", value_parser = parse_feature_assignment)]
    pub(crate) features: Vec<(String, f64)>,
    /// JSON file holding a feature object
    #[arg(long)]
    pub(crate) json: Option<PathBuf>,
    /// Start from the sample pool row at this index
    #[arg(long)]
    pub(crate) sample: Option<usize>,
    /// Number of explanations to keep (defaults to APP_EXPLANATION_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Candidate CSV export with one feature per column
    pub(crate) csv: PathBuf,
    /// Number of explanations to keep per row
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SampleArgs {
    /// Pool index to print; a random row is drawn when omitted
    #[arg(long)]
    pub(crate) index: Option<usize>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let ClassifyArgs {
        features,
        json,
        sample,
        limit,
        format,
    } = args;

    let engine = resolve_engine(limit)?;
    let features = assemble_features(sample, json.as_deref(), features)?;
    let result = engine.classify(&features);

    match format {
        OutputFormat::Json => print_json(&PredictionView::from(&result))?,
        OutputFormat::Text => {
            render_classification(&features, &result, &engine.score_sheet(&features))
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct BatchRowView {
    line: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate: Option<String>,
    #[serde(flatten)]
    prediction: PredictionView,
}

#[derive(Debug, Serialize)]
struct BatchReportView {
    rows: Vec<BatchRowView>,
    summary: BatchSummary,
}

impl BatchReportView {
    fn new(outcomes: &[BatchOutcome], summary: BatchSummary) -> Self {
        let rows = outcomes
            .iter()
            .map(|outcome| BatchRowView {
                line: outcome.row.line,
                candidate: outcome.row.label.clone(),
                prediction: PredictionView::from(&outcome.result),
            })
            .collect();
        Self { rows, summary }
    }
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { csv, limit, format } = args;

    let engine = resolve_engine(limit)?;
    let rows = BatchImporter::from_path(&csv)?;
    let (outcomes, summary) = classify_rows(&engine, rows);

    match format {
        OutputFormat::Json => print_json(&BatchReportView::new(&outcomes, summary))?,
        OutputFormat::Text => render_batch(&csv, &outcomes, &summary),
    }

    Ok(())
}

pub(crate) fn run_features() -> Result<(), AppError> {
    let catalog = feature_catalog();
    println!("Input features ({})", catalog.len());
    for definition in catalog {
        let weight = definition
            .weight
            .map(|weight| format!(" | weight {:.2}", weight))
            .unwrap_or_default();
        println!(
            "- {:<18} {} [{}] range {} ({}){}",
            definition.name,
            definition.description,
            definition.importance.label(),
            definition.typical_range,
            definition.unit,
            weight
        );
    }
    Ok(())
}

pub(crate) fn run_sample(args: SampleArgs) -> Result<(), AppError> {
    let draw = draw_sample(args.index)?;
    print_json(&DemoDataView::from(draw))
}

fn draw_sample(index: Option<usize>) -> Result<SampleDraw, AppError> {
    match index {
        Some(index) => sample_at(index)
            .ok_or_else(|| AppError::Input(format!("no sample row at index {index}"))),
        None => Ok(random_sample(&mut rand::thread_rng())),
    }
}

fn resolve_engine(limit: Option<usize>) -> Result<ClassificationEngine, AppError> {
    match limit {
        Some(0) => Err(AppError::Input(
            "explanation limit must be at least 1".to_string(),
        )),
        Some(limit) => Ok(ClassificationEngine::new(limit)),
        None => Ok(AppConfig::load()?.engine.build()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

fn render_classification(features: &FeatureSet, result: &ClassificationResult, sheet: &ScoreSheet) {
    println!(
        "Classification: {} ({}% confidence)",
        result.label.label(),
        result.confidence_percent()
    );
    println!(
        "Planet score {:.3} (raw {:.3} from {} supplied features)",
        result.score,
        sheet.raw,
        features.len()
    );

    println!("\nScore adjustments");
    for adjustment in &sheet.adjustments {
        println!("- {}: {:+.2}", adjustment.rule.label(), adjustment.delta);
    }

    println!("\nTop contributing features");
    for (rank, contribution) in result.explanations.iter().enumerate() {
        println!(
            "{}. {} = {} | {} | magnitude {:.2}",
            rank + 1,
            contribution.feature,
            contribution.value,
            contribution.direction.label(),
            contribution.magnitude
        );
        println!("   {}", contribution.narrative);
    }
}

fn render_batch(source: &std::path::Path, outcomes: &[BatchOutcome], summary: &BatchSummary) {
    println!("Batch classification of {}", source.display());
    for outcome in outcomes {
        let candidate = outcome.row.label.as_deref().unwrap_or("unnamed candidate");
        let lead = outcome
            .result
            .explanations
            .first()
            .map(|contribution| {
                format!(
                    " | led by {} ({})",
                    contribution.feature,
                    contribution.direction.label()
                )
            })
            .unwrap_or_default();
        println!(
            "- line {} {}: {} ({}%){}",
            outcome.row.line,
            candidate,
            outcome.result.label.label(),
            outcome.result.confidence_percent(),
            lead
        );
    }

    println!(
        "\n{} candidates | {} planets | {} false positives",
        summary.total, summary.planets, summary.false_positives
    );
    if let Some(mean) = summary.mean_confidence {
        println!("Mean confidence {:.1}%", mean * 100.0);
    }
}
