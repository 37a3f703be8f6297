//! Calculation request value object

use serde::Serialize;

use super::crop::{Crop, CropProfile};
use crate::error::{HydroError, HydroResult};

/// Square meters in one acre
pub const ACRE_TO_SQUARE_METERS: f64 = 4046.86;

/// Days used to spread weekly effective rainfall into a daily rate
pub const DAYS_PER_WEEK: f64 = 7.0;

/// One estimation request, gathered by the caller from user input or a stored plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationInputs {
    /// Land area [acres]
    pub area_acres: f64,
    /// Reference evapotranspiration [mm/day]
    pub avg_daily_eto_mm: f64,
    /// Effective rainfall [mm/week]
    pub effective_rain_weekly_mm: f64,
    /// Application efficiency of the irrigation method [%]
    pub irrigation_efficiency_percent: f64,
    pub crop: CropProfile,
}

impl CalculationInputs {
    /// Inputs for a table crop with no effective rainfall.
    pub fn new(crop: Crop, area_acres: f64, avg_daily_eto_mm: f64, efficiency_percent: f64) -> Self {
        Self {
            area_acres,
            avg_daily_eto_mm,
            effective_rain_weekly_mm: 0.0,
            irrigation_efficiency_percent: efficiency_percent,
            crop: *crop.profile(),
        }
    }

    pub fn with_effective_rain(mut self, weekly_mm: f64) -> Self {
        self.effective_rain_weekly_mm = weekly_mm;
        self
    }

    /// Check every numeric field against its domain.
    ///
    /// Efficiency of exactly zero is accepted; the estimator then treats
    /// gross irrigation as equal to net irrigation.
    pub fn validate(&self) -> HydroResult<()> {
        let finite = [
            ("area_acres", self.area_acres),
            ("avg_daily_eto_mm", self.avg_daily_eto_mm),
            ("effective_rain_weekly_mm", self.effective_rain_weekly_mm),
            ("irrigation_efficiency_percent", self.irrigation_efficiency_percent),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(HydroError::invalid(field, value, "must be a finite number"));
            }
        }

        if self.area_acres <= 0.0 {
            return Err(HydroError::invalid(
                "area_acres",
                self.area_acres,
                "must be greater than zero",
            ));
        }
        if self.avg_daily_eto_mm < 0.0 {
            return Err(HydroError::invalid(
                "avg_daily_eto_mm",
                self.avg_daily_eto_mm,
                "must not be negative",
            ));
        }
        if self.effective_rain_weekly_mm < 0.0 {
            return Err(HydroError::invalid(
                "effective_rain_weekly_mm",
                self.effective_rain_weekly_mm,
                "must not be negative",
            ));
        }
        if !(0.0..=100.0).contains(&self.irrigation_efficiency_percent) {
            return Err(HydroError::invalid(
                "irrigation_efficiency_percent",
                self.irrigation_efficiency_percent,
                "must be between 0 and 100",
            ));
        }
        Ok(())
    }

    pub fn area_square_meters(&self) -> f64 {
        self.area_acres * ACRE_TO_SQUARE_METERS
    }

    pub fn effective_rain_daily_mm(&self) -> f64 {
        self.effective_rain_weekly_mm / DAYS_PER_WEEK
    }

    /// Efficiency as a fraction in [0, 1]
    pub fn efficiency_fraction(&self) -> f64 {
        self.irrigation_efficiency_percent / 100.0
    }
}
