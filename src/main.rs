//! Factory Emissions - Rust/Axum analyzer
//!
//! Estimates pollutant output and air-quality risk for an industrial facility
//! from its operating parameters and suggests mitigation strategies.
//! Serves an HTML analyzer form and a JSON API over the same calculations.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod analysis;
mod config;
mod error;
mod routes;

use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.bind_addr.clone();
    let app = build_router(AppState::new(config));

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router with all pages, APIs and middleware.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health_check))
        // Analyzer pages
        .route("/", get(routes::analyzer::index))
        .route("/analyze", post(routes::analyzer::analyze))
        .route("/export", get(routes::analyzer::export))
        // Analysis API
        .nest("/api/analysis", analysis::router())
        // Static files
        .nest_service("/static", ServeDir::new(static_dir))
        // State and middleware
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = Utc::now() - state.started_at;
    Json(serde_json::json!({
        "status": "healthy",
        "service": "factory-emissions-web",
        "started_at": state.started_at,
        "uptime_seconds": uptime.num_seconds(),
    }))
}
