use crate::catalog::{
    feature_catalog, featured_candidate, random_sample, FeatureDefinition, FeaturedCandidate,
    SampleDraw, SampleRow,
};
use crate::classifier::views::PredictionView;
use crate::classifier::{ClassificationEngine, FeatureSet};
use crate::error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

pub const SERVICE_NAME: &str = "ExoNET Classification API";

/// Router builder exposing classification, catalog, sample and health endpoints.
pub fn classifier_router(engine: ClassificationEngine) -> Router {
    Router::new()
        .route("/api/predict", post(predict_handler))
        .route("/api/features", get(features_handler))
        .route("/api/demo-data", get(demo_data_handler))
        .route("/api/demo-data/featured", get(featured_handler))
        .route("/api/health", get(health_handler))
        .with_state(engine)
}

#[derive(Debug, Serialize)]
pub struct CatalogView {
    pub features: &'static [FeatureDefinition],
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DemoDataView {
    pub success: bool,
    pub data: &'static SampleRow,
    #[serde(rename = "rowNumber")]
    pub row_number: usize,
}

impl From<SampleDraw> for DemoDataView {
    fn from(draw: SampleDraw) -> Self {
        Self {
            success: true,
            data: draw.row,
            row_number: draw.row_number,
        }
    }
}

pub(crate) async fn predict_handler(
    State(engine): State<ClassificationEngine>,
    payload: Result<Json<FeatureSet>, JsonRejection>,
) -> Result<Json<PredictionView>, AppError> {
    let Json(features) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "rejected prediction payload");
        AppError::from(rejection)
    })?;

    let result = engine.classify(&features);
    info!(
        prediction = result.label.label(),
        confidence = result.confidence,
        supplied = features.len(),
        "served prediction"
    );

    Ok(Json(PredictionView::from(&result)))
}

pub(crate) async fn features_handler() -> Json<CatalogView> {
    let features = feature_catalog();
    Json(CatalogView {
        features,
        count: features.len(),
    })
}

pub(crate) async fn demo_data_handler() -> Json<DemoDataView> {
    Json(DemoDataView::from(draw_sample()))
}

fn draw_sample() -> SampleDraw {
    random_sample(&mut rand::thread_rng())
}

pub(crate) async fn featured_handler() -> Json<&'static FeaturedCandidate> {
    Json(featured_candidate())
}

pub(crate) async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "model": {
            "loaded": true,
            "type": "Intelligent Heuristic Classifier",
            "features": feature_catalog().len(),
            "capabilities": [
                "Exoplanet classification",
                "Confidence scoring",
                "Feature importance analysis",
                "Cross-mission validation"
            ]
        }
    }))
}
