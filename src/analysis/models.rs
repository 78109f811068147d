//! Data types for emission analysis.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use uuid::Uuid;

/// Operational parameter names, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKey {
    Production,
    Temperature,
    Fuel,
    Quality,
    Efficiency,
    Hours,
    Age,
    Experience,
    Maintenance,
    Humidity,
}

impl ParameterKey {
    pub const ALL: [ParameterKey; 10] = [
        ParameterKey::Production,
        ParameterKey::Temperature,
        ParameterKey::Fuel,
        ParameterKey::Quality,
        ParameterKey::Efficiency,
        ParameterKey::Hours,
        ParameterKey::Age,
        ParameterKey::Experience,
        ParameterKey::Maintenance,
        ParameterKey::Humidity,
    ];

    /// Field name used by forms and JSON bodies.
    pub fn name(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Temperature => "temperature",
            Self::Fuel => "fuel",
            Self::Quality => "quality",
            Self::Efficiency => "efficiency",
            Self::Hours => "hours",
            Self::Age => "age",
            Self::Experience => "experience",
            Self::Maintenance => "maintenance",
            Self::Humidity => "humidity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Production => "Production Volume (tons/day)",
            Self::Temperature => "Furnace Temperature (°C)",
            Self::Fuel => "Fuel Consumption (liters)",
            Self::Quality => "Material Quality Index",
            Self::Efficiency => "Process Efficiency (%)",
            Self::Hours => "Operating Hours",
            Self::Age => "Equipment Age (years)",
            Self::Experience => "Staff Experience Level",
            Self::Maintenance => "Maintenance Status",
            Self::Humidity => "Ambient Humidity (%)",
        }
    }

    /// Advisory (min, max) shown next to the field. Never enforced.
    pub fn advisory_range(self) -> (f64, f64) {
        match self {
            Self::Production => (0.0, 10000.0),
            Self::Temperature => (0.0, 2000.0),
            Self::Fuel => (0.0, 5000.0),
            Self::Quality => (0.0, 100.0),
            Self::Efficiency => (0.0, 100.0),
            Self::Hours => (0.0, 24.0),
            Self::Age => (0.0, 50.0),
            Self::Experience => (1.0, 10.0),
            Self::Maintenance => (0.0, 1.0),
            Self::Humidity => (0.0, 100.0),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// Parameter descriptor returned by the parameters endpoint.
#[derive(Debug, Serialize)]
pub struct ParameterSpec {
    pub key: ParameterKey,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl From<ParameterKey> for ParameterSpec {
    fn from(key: ParameterKey) -> Self {
        let (min, max) = key.advisory_range();
        Self {
            key,
            label: key.label(),
            min,
            max,
        }
    }
}

/// Convert submitted text to a parameter value.
///
/// Blank, unparseable and non-finite text yields 0; negatives are clamped to 0.
/// Digit-group underscores (`1_000`) and Arabic-Indic or Persian digits are
/// accepted.
pub fn parse_numeric(text: &str) -> f64 {
    normalize_numeric(text.trim())
        .and_then(|ascii| ascii.parse::<f64>().ok())
        .map(clamp_value)
        .unwrap_or(0.0)
}

/// Rewrite numeric text into the ASCII form `f64::from_str` expects.
///
/// Returns `None` when an underscore is not surrounded by digits.
fn normalize_numeric(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().map(ascii_digit).collect();
    let mut out = String::with_capacity(chars.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            let between_digits = matches!(before, Some(b) if b.is_ascii_digit())
                && matches!(after, Some(a) if a.is_ascii_digit());
            if !between_digits {
                return None;
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

fn ascii_digit(c: char) -> char {
    let offset = match c {
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        _ => return c,
    };
    char::from_digit(offset, 10).unwrap_or(c)
}

fn clamp_value(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// A single field of a JSON analysis request.
///
/// Clients may send numbers or numeric text; anything else counts as 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawField {
    /// Value of one field as sent. Numbers serde_json cannot hold in an f64
    /// (`1e400`) fail to parse and count as 0 like any other malformed value.
    pub fn json_value(raw: &RawValue) -> f64 {
        serde_json::from_str::<RawField>(raw.get())
            .map(|field| field.value())
            .unwrap_or(0.0)
    }

    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) => clamp_value(*n),
            Self::Text(s) => parse_numeric(s),
            Self::Other(_) => 0.0,
        }
    }
}

/// Operational parameters of the facility, all non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OperatingParameters {
    pub production: f64,
    pub temperature: f64,
    pub fuel: f64,
    pub quality: f64,
    pub efficiency: f64,
    pub hours: f64,
    pub age: f64,
    pub experience: f64,
    pub maintenance: f64,
    pub humidity: f64,
}

impl OperatingParameters {
    /// Set a field, clamping it the same way parsed input is clamped.
    pub fn set(&mut self, key: ParameterKey, value: f64) {
        let value = clamp_value(value);
        let slot = match key {
            ParameterKey::Production => &mut self.production,
            ParameterKey::Temperature => &mut self.temperature,
            ParameterKey::Fuel => &mut self.fuel,
            ParameterKey::Quality => &mut self.quality,
            ParameterKey::Efficiency => &mut self.efficiency,
            ParameterKey::Hours => &mut self.hours,
            ParameterKey::Age => &mut self.age,
            ParameterKey::Experience => &mut self.experience,
            ParameterKey::Maintenance => &mut self.maintenance,
            ParameterKey::Humidity => &mut self.humidity,
        };
        *slot = value;
    }

    /// Build parameters from submitted form text. Unknown names are ignored,
    /// missing names read as 0.
    pub fn from_text_fields(fields: &HashMap<String, String>) -> Self {
        let mut params = Self::default();
        for key in ParameterKey::ALL {
            if let Some(text) = fields.get(key.name()) {
                params.set(key, parse_numeric(text));
            }
        }
        params
    }

    /// Build parameters from a JSON object whose values are still unparsed.
    pub fn from_json_fields(fields: &BTreeMap<String, Box<RawValue>>) -> Self {
        let mut params = Self::default();
        for (name, raw) in fields {
            if let Some(key) = ParameterKey::from_name(name) {
                params.set(key, RawField::json_value(raw));
            }
        }
        params
    }
}

/// Estimated pollutant concentrations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutionEstimate {
    /// PM2.5 in μg/m³
    pub pm25: f64,
    /// SO₂ in ppm
    pub so2: f64,
    /// NOx in ppm
    pub nox: f64,
    /// CO in ppm
    pub co: f64,
}

impl PollutionEstimate {
    pub fn pm25_display(&self) -> String {
        format!("{:.1} μg/m³", self.pm25)
    }

    pub fn so2_display(&self) -> String {
        format!("{:.2} ppm", self.so2)
    }

    pub fn nox_display(&self) -> String {
        format!("{:.2} ppm", self.nox)
    }

    pub fn co_display(&self) -> String {
        format!("{:.2} ppm", self.co)
    }
}

/// Risk tier derived from the AQI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::Unhealthy => "UNHEALTHY",
            Self::VeryUnhealthy => "VERY UNHEALTHY",
            Self::Hazardous => "HAZARDOUS",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#27ae60",
            Self::Moderate => "#f39c12",
            Self::Unhealthy => "#e67e22",
            Self::VeryUnhealthy => "#e74c3c",
            Self::Hazardous => "#8b0000",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A titled block of mitigation suggestions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSection {
    pub title: &'static str,
    pub lines: Vec<&'static str>,
}

/// Display class of a recommendation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Header,
    Subheader,
    Body,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        if line.contains('=') {
            Self::Header
        } else if line.trim().ends_with(':') {
            Self::Subheader
        } else {
            Self::Body
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Header => "rec-header",
            Self::Subheader => "rec-subheader",
            Self::Body => "rec-body",
        }
    }
}

/// Risk tier with its display color.
#[derive(Debug, Serialize)]
pub struct RiskSummary {
    pub level: RiskLevel,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<RiskLevel> for RiskSummary {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            label: level.label(),
            color: level.color(),
        }
    }
}

/// Full result of one analysis run.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Unique identifier of this run
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    /// SHA256 of the parsed parameters
    pub input_hash: String,

    pub parameters: OperatingParameters,
    pub pollution: PollutionEstimate,
    pub aqi: u16,
    pub risk: RiskSummary,

    pub recommendations: Vec<RecommendationSection>,
    /// Recommendations flattened to display lines
    pub lines: Vec<String>,

    pub status: String,
}

/// Contents the export feature would produce once implemented.
pub const PLANNED_EXPORT_CONTENTS: &[&str] = &[
    "PDF generation",
    "Data visualization",
    "Executive summary",
    "Technical specifications",
    "Implementation roadmap",
];
