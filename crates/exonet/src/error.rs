use crate::batch::BatchImportError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed feature payload: {}", .0.body_text())]
    Request(#[from] JsonRejection),
    #[error("invalid input: {0}")]
    Input(String),
    #[error("import error: {0}")]
    Import(#[from] BatchImportError),
}

impl AppError {
    /// Client faults map to 400; anything else is the service's problem.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Request(_) | AppError::Input(_) | AppError::Import(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
