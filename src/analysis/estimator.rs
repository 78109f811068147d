//! Pollution estimation, AQI aggregation and risk classification.
//!
//! Everything here is a pure function of the operating parameters.

use super::models::{OperatingParameters, PollutionEstimate, RiskLevel};

const PM25_BASE: f64 = 15.0;
const SO2_BASE: f64 = 8.0;
const NOX_BASE: f64 = 12.0;
const CO_BASE: f64 = 6.0;

/// Furnace temperature above which the temperature factor grows.
const TEMPERATURE_THRESHOLD_C: f64 = 1200.0;

/// Upper bound of the AQI scale.
pub const AQI_MAX: f64 = 500.0;

/// Multipliers shared by the pollutant formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Factors {
    production: f64,
    temperature: f64,
    fuel: f64,
    efficiency_benefit: f64,
    maintenance_impact: f64,
    experience_benefit: f64,
}

impl Factors {
    fn new(params: &OperatingParameters) -> Self {
        Self {
            production: params.production / 1000.0,
            temperature: 1.0 + (params.temperature - TEMPERATURE_THRESHOLD_C).max(0.0) * 0.001,
            fuel: params.fuel * 0.0005,
            efficiency_benefit: (100.0 - params.efficiency) * 0.01,
            // Well-maintained equipment cuts particulate, SO₂ and CO output by 30%
            maintenance_impact: if params.maintenance > 0.5 { 0.7 } else { 1.0 },
            experience_benefit: (1.0 - params.experience * 0.03).max(0.7),
        }
    }
}

/// Estimate pollutant concentrations. Every value is floored at zero.
pub fn estimate_pollution(params: &OperatingParameters) -> PollutionEstimate {
    let f = Factors::new(params);

    let pm25 = (PM25_BASE + f.production * 10.0 + f.temperature * 5.0 + f.fuel * 3.0)
        * f.efficiency_benefit
        * f.maintenance_impact
        * f.experience_benefit;

    let so2 = (SO2_BASE + f.fuel * 8.0 + f.production * 4.0) * f.maintenance_impact;

    let nox = (NOX_BASE + f.temperature * 6.0 + f.production * 5.0) * f.experience_benefit;

    let co = (CO_BASE + f.fuel * 6.0 - params.quality * 0.05) * f.maintenance_impact;

    PollutionEstimate {
        pm25: pm25.max(0.0),
        so2: so2.max(0.0),
        nox: nox.max(0.0),
        co: co.max(0.0),
    }
}

/// Weighted AQI in [0, 500], truncated toward zero.
pub fn calculate_aqi(pollution: &PollutionEstimate) -> u16 {
    let aqi = pollution.pm25 * 0.35
        + pollution.so2 * 20.0 * 0.25
        + pollution.nox * 15.0 * 0.25
        + pollution.co * 10.0 * 0.15;

    // NaN casts to 0
    aqi.clamp(0.0, AQI_MAX) as u16
}

/// Map an AQI to its risk tier using half-open breakpoints.
pub fn classify_risk(aqi: u16) -> RiskLevel {
    match aqi {
        0..=49 => RiskLevel::Low,
        50..=99 => RiskLevel::Moderate,
        100..=149 => RiskLevel::Unhealthy,
        150..=199 => RiskLevel::VeryUnhealthy,
        _ => RiskLevel::Hazardous,
    }
}
