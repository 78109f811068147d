//! Application error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::analysis::models::PLANNED_EXPORT_CONTENTS;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("report generation is not implemented")]
    ExportUnavailable,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned: Option<&'static [&'static str]>,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ExportUnavailable => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Template(e) => {
                tracing::error!("Failed to render template: {}", e);
                ErrorResponse {
                    error_type: "template_error",
                    message: self.to_string(),
                    planned: None,
                }
            }
            Self::ExportUnavailable => {
                tracing::info!("Export requested but not implemented");
                ErrorResponse {
                    error_type: "export_unavailable",
                    message: self.to_string(),
                    planned: Some(PLANNED_EXPORT_CONTENTS),
                }
            }
        };

        (self.status(), Json(body)).into_response()
    }
}
