//! Emission analysis module.
//!
//! Estimates pollutant concentrations from facility operating parameters,
//! aggregates them into an AQI with a risk tier and selects mitigation
//! strategies. Exposed both as a JSON API and to the HTML analyzer page.

pub mod analyzer;
pub mod estimator;
pub mod models;
pub mod recommendations;
mod routes;

pub use routes::router;
