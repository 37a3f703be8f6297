//! Stage-based crop water requirement (FAO crop-coefficient model)
//!
//! For each growth stage in seasonal order:
//!
//! ```text
//! ETc   = Kc(stage) * ETo                       [mm/day]
//! net   = max(0, ETc - rain_weekly / 7) * days   [mm]
//! gross = net / efficiency                       [mm]
//! ```
//!
//! The stage gross depths are summed and scaled by area; 1 mm over 1 m² is 1 liter.

use serde::Serialize;

use super::crop::GrowthStage;
use super::inputs::CalculationInputs;
use crate::error::{HydroError, HydroResult};

/// Seasonal water demand for one request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub total_water_liters: f64,
    pub total_gross_irrigation_mm: f64,
}

impl CalculationResult {
    pub fn total_water_cubic_meters(&self) -> f64 {
        self.total_water_liters / 1000.0
    }
}

/// One row of the per-stage breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageEstimate {
    pub stage: GrowthStage,
    pub days: u32,
    /// Representative crop coefficient for the stage
    pub kc: f64,
    /// Crop evapotranspiration [mm/day]
    pub etc_daily_mm: f64,
    pub net_irrigation_mm: f64,
    pub gross_irrigation_mm: f64,
}

/// Per-stage rows plus the season total they sum to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageBreakdown {
    pub stages: Vec<StageEstimate>,
    pub result: CalculationResult,
}

/// Estimate total seasonal irrigation demand.
///
/// Fails with `UnsupportedCrop` when the crop has no stage data, and with
/// `InvalidInput` when a numeric input is outside its domain.
pub fn estimate(inputs: &CalculationInputs) -> HydroResult<CalculationResult> {
    estimate_by_stage(inputs).map(|b| b.result)
}

/// Same as [`estimate`], keeping the intermediate values of every stage.
pub fn estimate_by_stage(inputs: &CalculationInputs) -> HydroResult<StageBreakdown> {
    let (durations, coefficients) = inputs.crop.stage_data()?;
    inputs.validate()?;

    let rain_daily_mm = inputs.effective_rain_daily_mm();
    let efficiency = inputs.efficiency_fraction();

    let stages: Vec<StageEstimate> = GrowthStage::ALL
        .iter()
        .map(|&stage| {
            let days = durations.days(stage);
            let kc = coefficients.representative(stage);
            let etc_daily_mm = kc * inputs.avg_daily_eto_mm;
            let net_irrigation_mm = net_irrigation(etc_daily_mm, rain_daily_mm, days);
            StageEstimate {
                stage,
                days,
                kc,
                etc_daily_mm,
                net_irrigation_mm,
                gross_irrigation_mm: gross_irrigation(net_irrigation_mm, efficiency),
            }
        })
        .collect();

    let total_gross_irrigation_mm: f64 = stages.iter().map(|s| s.gross_irrigation_mm).sum();
    let result = CalculationResult {
        total_water_liters: total_gross_irrigation_mm * inputs.area_square_meters(),
        total_gross_irrigation_mm,
    };
    ensure_finite(inputs, &stages, &result)?;

    Ok(StageBreakdown { stages, result })
}

/// Finite inputs can still overflow `f64` once multiplied out; report the input that did it.
fn ensure_finite(
    inputs: &CalculationInputs,
    stages: &[StageEstimate],
    result: &CalculationResult,
) -> HydroResult<()> {
    const TOO_LARGE: &str = "is too large to estimate";

    if !result.total_gross_irrigation_mm.is_finite() {
        let net_total_mm: f64 = stages.iter().map(|s| s.net_irrigation_mm).sum();
        return Err(if net_total_mm.is_finite() {
            HydroError::invalid(
                "irrigation_efficiency_percent",
                inputs.irrigation_efficiency_percent,
                "is too small to estimate",
            )
        } else {
            HydroError::invalid("avg_daily_eto_mm", inputs.avg_daily_eto_mm, TOO_LARGE)
        });
    }
    if !result.total_water_liters.is_finite() {
        return Err(HydroError::invalid("area_acres", inputs.area_acres, TOO_LARGE));
    }
    Ok(())
}

/// Stage demand not covered by rain. Surplus rain is not carried to other stages.
fn net_irrigation(etc_daily_mm: f64, rain_daily_mm: f64, days: u32) -> f64 {
    (etc_daily_mm - rain_daily_mm).max(0.0) * f64::from(days)
}

/// Zero efficiency falls back to gross = net.
fn gross_irrigation(net_mm: f64, efficiency: f64) -> f64 {
    if efficiency > 0.0 {
        net_mm / efficiency
    } else {
        net_mm
    }
}
