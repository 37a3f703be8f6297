//! HydroScope - stage-based crop irrigation water estimator
//!
//! Given a crop's growth-stage schedule and crop coefficients plus site and
//! climate inputs, HydroScope computes the seasonal irrigation water demand
//! as a depth (mm) and a volume (liters), following the FAO crop-coefficient
//! model.
//!
//! ```
//! use hydroscope::{estimate, CalculationInputs, Crop};
//!
//! let inputs = CalculationInputs::new(Crop::Maize, 1.0, 5.0, 80.0);
//! let result = estimate(&inputs).unwrap();
//! assert!((result.total_gross_irrigation_mm - 693.4375).abs() < 1e-9);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, Verbosity};
pub use domain::{
    estimate, estimate_by_stage, CalculationInputs, CalculationResult, Crop, CropProfile,
    GrowthStage, StageBreakdown, SupplyPlan, WeatherObservation, WeatherSummary,
};
pub use error::{HydroError, HydroResult};
