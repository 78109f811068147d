//! Analyzer page route handlers

use std::collections::HashMap;

use askama::Template;
use axum::{
    extract::{Form, Query},
    response::Html,
};
use serde::Deserialize;

use crate::analysis::analyzer::{self, STATUS_CLEARED, STATUS_READY};
use crate::analysis::models::{
    AnalysisReport, LineKind, OperatingParameters, ParameterKey, PLANNED_EXPORT_CONTENTS,
};
use crate::error::Result;

/// Form field with the text the user submitted
struct FieldView {
    name: &'static str,
    label: &'static str,
    hint: String,
    value: String,
}

/// One row of the results panel
struct ResultView {
    name: &'static str,
    value: String,
}

/// Recommendation line with its display class
struct LineView {
    text: String,
    class: &'static str,
}

/// Analyzer page template
#[derive(Template)]
#[template(path = "analysis/analyzer.html")]
struct AnalyzerTemplate {
    fields: Vec<FieldView>,
    results: Vec<ResultView>,
    risk_label: String,
    risk_color: String,
    lines: Vec<LineView>,
    status: String,
}

/// Export information page template
#[derive(Template)]
#[template(path = "analysis/export.html")]
struct ExportTemplate {
    planned: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    cleared: Option<String>,
}

fn field_views(submitted: &HashMap<String, String>) -> Vec<FieldView> {
    ParameterKey::ALL
        .into_iter()
        .map(|key| {
            let (min, max) = key.advisory_range();
            FieldView {
                name: key.name(),
                label: key.label(),
                hint: format!("{min}–{max}"),
                value: submitted.get(key.name()).cloned().unwrap_or_default(),
            }
        })
        .collect()
}

/// Results rows before any analysis ran. Placeholders keep their units
/// until the form is cleared.
fn placeholder_results(with_units: bool) -> Vec<ResultView> {
    let rows = [
        ("PM2.5 Concentration", "-- μg/m³"),
        ("SO₂ Emissions", "-- ppm"),
        ("NOx Levels", "-- ppm"),
        ("CO Output", "-- ppm"),
        ("Overall Air Quality", "-- AQI"),
    ];
    rows.into_iter()
        .map(|(name, value)| ResultView {
            name,
            value: if with_units { value.to_string() } else { "--".to_string() },
        })
        .collect()
}

fn report_results(report: &AnalysisReport) -> Vec<ResultView> {
    vec![
        ResultView {
            name: "PM2.5 Concentration",
            value: report.pollution.pm25_display(),
        },
        ResultView {
            name: "SO₂ Emissions",
            value: report.pollution.so2_display(),
        },
        ResultView {
            name: "NOx Levels",
            value: report.pollution.nox_display(),
        },
        ResultView {
            name: "CO Output",
            value: report.pollution.co_display(),
        },
        ResultView {
            name: "Overall Air Quality",
            value: format!("{} AQI", report.aqi),
        },
    ]
}

/// Empty analyzer form. `?cleared=1` is the Clear All action.
pub async fn index(Query(query): Query<IndexQuery>) -> Result<Html<String>> {
    let cleared = query.cleared.is_some();

    let template = AnalyzerTemplate {
        fields: field_views(&HashMap::new()),
        results: placeholder_results(!cleared),
        risk_label: "--".to_string(),
        risk_color: "inherit".to_string(),
        lines: Vec::new(),
        status: if cleared { STATUS_CLEARED } else { STATUS_READY }.to_string(),
    };

    Ok(Html(template.render()?))
}

/// Run an analysis from the submitted form and redisplay it with results.
pub async fn analyze(Form(fields): Form<HashMap<String, String>>) -> Result<Html<String>> {
    let params = OperatingParameters::from_text_fields(&fields);
    let report = analyzer::analyze(params);

    tracing::info!(
        aqi = report.aqi,
        risk = %report.risk.label,
        "Analysis requested from form"
    );

    let lines = report
        .lines
        .iter()
        .map(|line| LineView {
            text: line.clone(),
            class: LineKind::classify(line).css_class(),
        })
        .collect();

    let template = AnalyzerTemplate {
        fields: field_views(&fields),
        results: report_results(&report),
        risk_label: report.risk.label.to_string(),
        risk_color: report.risk.color.to_string(),
        lines,
        status: report.status,
    };

    Ok(Html(template.render()?))
}

/// Export page explaining that report generation is not available yet.
pub async fn export() -> Result<Html<String>> {
    let template = ExportTemplate {
        planned: PLANNED_EXPORT_CONTENTS,
    };
    Ok(Html(template.render()?))
}
