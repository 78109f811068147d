//! Full analysis run: estimation, classification and recommendations.

use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::estimator::{calculate_aqi, classify_risk, estimate_pollution};
use super::models::{AnalysisReport, OperatingParameters, RiskLevel};
use super::recommendations::{render_lines, select_recommendations};

pub const STATUS_READY: &str = "System Ready | Enter operational parameters above";
pub const STATUS_CLEARED: &str = "All fields cleared | Ready for new analysis";

/// Compute SHA256 hash of input string.
fn sha256_hex(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let digest = hasher.finalize();
    format!("sha256:{}", hex::encode(digest))
}

/// Fingerprint of the parsed parameters, stable across runs.
pub fn input_hash(params: &OperatingParameters) -> String {
    let canonical = serde_json::to_string(params).unwrap_or_default();
    sha256_hex(&canonical)
}

pub fn completion_status(aqi: u16, risk: RiskLevel) -> String {
    format!("Analysis Complete | AQI: {} | Risk: {}", aqi, risk)
}

/// Run the complete analysis for one set of parameters.
pub fn analyze(params: OperatingParameters) -> AnalysisReport {
    let pollution = estimate_pollution(&params);
    let aqi = calculate_aqi(&pollution);
    let risk = classify_risk(aqi);

    let recommendations = select_recommendations(&params, &pollution, aqi);
    let lines = render_lines(&recommendations);

    tracing::debug!(aqi, risk = %risk, sections = recommendations.len(), "analysis complete");

    AnalysisReport {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        input_hash: input_hash(&params),
        parameters: params,
        pollution,
        aqi,
        risk: risk.into(),
        recommendations,
        lines,
        status: completion_status(aqi, risk),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> OperatingParameters {
        OperatingParameters {
            production: 1000.0,
            temperature: 1200.0,
            fuel: 1000.0,
            quality: 80.0,
            efficiency: 85.0,
            maintenance: 1.0,
            experience: 5.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_analyze_reference_facility() {
        let report = analyze(reference_params());

        assert_eq!(report.aqi, 135);
        assert_eq!(report.risk.level, RiskLevel::Unhealthy);
        assert_eq!(report.risk.color, "#e67e22");
        assert_eq!(report.status, "Analysis Complete | AQI: 135 | Risk: UNHEALTHY");
        assert!(report
            .recommendations
            .iter()
            .any(|s| s.title == "♻️ CARBON MANAGEMENT SOLUTIONS:"));
        assert!(!report
            .recommendations
            .iter()
            .any(|s| s.title == "⚡ ENERGY TRANSFORMATION PATH:"));
        assert_eq!(report.lines[1], "GENERATIVE ENHANCEMENT STRATEGIES");
    }

    #[test]
    fn test_input_hash() {
        let report = analyze(reference_params());

        assert!(report.input_hash.starts_with("sha256:"));
        assert_eq!(report.input_hash.len(), 7 + 64); // "sha256:" + 64 hex chars
    }

    #[test]
    fn test_input_hash_is_stable() {
        let first = analyze(reference_params());
        let second = analyze(reference_params());

        assert_eq!(first.input_hash, second.input_hash);
        assert_ne!(first.analysis_id, second.analysis_id);

        let other = analyze(OperatingParameters::default());
        assert_ne!(first.input_hash, other.input_hash);
    }

    #[test]
    fn test_report_serializes() {
        let report = analyze(OperatingParameters::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["aqi"], 123);
        assert_eq!(json["risk"]["level"], "UNHEALTHY");
        assert_eq!(json["risk"]["label"], "UNHEALTHY");
        assert_eq!(json["parameters"]["fuel"], 0.0);
        assert!(json["recommendations"].as_array().unwrap().len() >= 10);
    }
}
