//! Domain Layer
//!
//! The core of HydroScope - pure agronomic calculations without I/O
//! (the weather log loader being the one file reader).
//!
//! ## Structure
//!
//! - `crop` - Static crop reference table (stage durations, Kc values)
//! - `inputs` - Calculation request and its validation
//! - `estimator` - Stage-based seasonal water requirement
//! - `supply` - Pump run-time planning for a water volume
//! - `weather` - Weather log aggregation (mean ETo, rainfall)

pub mod crop;
pub mod estimator;
pub mod inputs;
pub mod supply;
pub mod weather;

pub use crop::{Crop, CropProfile, GrowthStage, StageCoefficients, StageDurations};
pub use estimator::{estimate, estimate_by_stage, CalculationResult, StageBreakdown, StageEstimate};
pub use inputs::{CalculationInputs, ACRE_TO_SQUARE_METERS};
pub use supply::{SupplyPlan, DEFAULT_CYCLE_DAYS};
pub use weather::{load_weather_log, WeatherObservation, WeatherSummary};
