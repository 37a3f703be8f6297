//! Irrigation supply planning - how long the pump must run to deliver a season's water

use serde::Serialize;

use crate::error::{HydroError, HydroResult};

/// Days a cycle is spread over when the caller does not say
pub const DEFAULT_CYCLE_DAYS: u32 = 7;

/// Pump schedule for delivering a fixed volume of water
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupplyPlan {
    pub total_water_liters: f64,
    /// Source or pump capacity [L/h]
    pub pump_capacity_lph: f64,
    pub days: u32,
    pub total_pump_hours: f64,
    pub hours_per_day: f64,
}

impl SupplyPlan {
    pub fn new(total_water_liters: f64, pump_capacity_lph: f64, days: u32) -> HydroResult<Self> {
        if !total_water_liters.is_finite() || total_water_liters < 0.0 {
            return Err(HydroError::invalid(
                "total_water_liters",
                total_water_liters,
                "must be a finite, non-negative volume",
            ));
        }
        if !pump_capacity_lph.is_finite() || pump_capacity_lph <= 0.0 {
            return Err(HydroError::invalid(
                "pump_capacity_lph",
                pump_capacity_lph,
                "must be greater than zero",
            ));
        }
        if days == 0 {
            return Err(HydroError::invalid("days", 0.0, "must be at least one day"));
        }

        let total_pump_hours = total_water_liters / pump_capacity_lph;
        Ok(Self {
            total_water_liters,
            pump_capacity_lph,
            days,
            total_pump_hours,
            hours_per_day: total_pump_hours / f64::from(days),
        })
    }

    /// True when the daily run time exceeds a 24-hour day
    pub fn exceeds_day(&self) -> bool {
        self.hours_per_day > 24.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_plan() {
        let plan = SupplyPlan::new(70_000.0, 1000.0, 7).unwrap();
        assert_eq!(plan.total_pump_hours, 70.0);
        assert_eq!(plan.hours_per_day, 10.0);
        assert!(!plan.exceeds_day());
    }

    #[test]
    fn maize_season_overflows_a_week() {
        let plan = SupplyPlan::new(2_806_244.48, 1000.0, DEFAULT_CYCLE_DAYS).unwrap();
        assert!(plan.exceeds_day());
    }

    #[test]
    fn zero_water_needs_no_pumping() {
        let plan = SupplyPlan::new(0.0, 500.0, 3).unwrap();
        assert_eq!(plan.hours_per_day, 0.0);
    }

    #[test]
    fn rejects_bad_capacity_and_days() {
        assert!(SupplyPlan::new(100.0, 0.0, 7).is_err());
        assert!(SupplyPlan::new(100.0, -10.0, 7).is_err());
        assert!(SupplyPlan::new(100.0, 1000.0, 0).is_err());
        assert!(SupplyPlan::new(-1.0, 1000.0, 7).is_err());
        assert!(SupplyPlan::new(f64::NAN, 1000.0, 7).is_err());
    }
}
