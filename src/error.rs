//! Error types for HydroScope
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for HydroScope operations
pub type HydroResult<T> = Result<T, HydroError>;

/// Main error type for HydroScope operations
#[derive(Error, Debug)]
pub enum HydroError {
    /// Crop has no stage durations or coefficients
    #[error("crop '{crop}' has no stage data - stage-based estimation is not supported")]
    UnsupportedCrop { crop: String },

    /// An input is outside its domain
    #[error("invalid {field} = {value}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Weather log has no observations to summarize
    #[error("weather log is empty - log at least one observation")]
    EmptyWeatherLog,

    /// Weather log could not be parsed
    #[error("invalid weather log {file}: {message}")]
    WeatherLog { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HydroError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        HydroError::InvalidInput {
            field,
            value,
            reason,
        }
    }

    /// Stable machine-readable code used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            HydroError::UnsupportedCrop { .. } => "unsupported_crop",
            HydroError::InvalidInput { .. } => "invalid_input",
            HydroError::EmptyWeatherLog => "empty_weather_log",
            HydroError::WeatherLog { .. } => "invalid_weather_log",
            HydroError::InvalidConfig { .. } => "invalid_config",
            HydroError::Io(_) => "io",
        }
    }

    /// Whether the caller can fix this by correcting the input and retrying.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HydroError::UnsupportedCrop { .. } | HydroError::InvalidInput { .. }
        )
    }
}
