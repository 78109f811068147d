//! HTTP route handlers for the emission analysis API.

use std::collections::BTreeMap;

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::value::RawValue;

use crate::error::AppError;
use crate::AppState;

use super::analyzer;
use super::models::{AnalysisReport, OperatingParameters, ParameterKey, ParameterSpec};

/// Create the analysis router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/parameters", get(parameters))
        .route("/analyze", post(analyze))
        .route("/export", post(export))
}

/// Health check for the analysis engine.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "emission-analyzer",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Describe the accepted parameters with their advisory ranges.
async fn parameters() -> Json<Vec<ParameterSpec>> {
    Json(ParameterKey::ALL.into_iter().map(ParameterSpec::from).collect())
}

/// Analyze a facility. Malformed field values count as zero.
///
/// Field values are kept raw so a number serde_json cannot represent only
/// zeroes that field instead of rejecting the body.
async fn analyze(Json(fields): Json<BTreeMap<String, Box<RawValue>>>) -> Json<AnalysisReport> {
    let params = OperatingParameters::from_json_fields(&fields);
    Json(analyzer::analyze(params))
}

/// Report export is not available yet.
async fn export() -> AppError {
    AppError::ExportUnavailable
}
