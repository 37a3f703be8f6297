//! Weather log summary
//!
//! A log is a JSON array of daily observations:
//!
//! ```json
//! [{ "date": "2024-03-01", "temperature_c": 25.0, "rainfall_mm": 0.0, "eto_mm_per_day": 5.1 }]
//! ```
//!
//! The mean ETo of a log is the usual seed for an estimate's `avg_daily_eto_mm`.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HydroError, HydroResult};

/// One day of observed weather
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub eto_mm_per_day: f64,
}

/// Aggregates over a weather log
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherSummary {
    pub observations: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub avg_temperature_c: f64,
    pub total_rainfall_mm: f64,
    pub avg_eto_mm_per_day: f64,
}

impl WeatherSummary {
    pub fn from_observations(observations: &[WeatherObservation]) -> HydroResult<Self> {
        let first = observations.first().ok_or(HydroError::EmptyWeatherLog)?;
        let n = observations.len() as f64;

        let mut first_date = first.date;
        let mut last_date = first.date;
        let mut temperature_sum = 0.0;
        let mut rainfall_sum = 0.0;
        let mut eto_sum = 0.0;
        for obs in observations {
            first_date = first_date.min(obs.date);
            last_date = last_date.max(obs.date);
            temperature_sum += obs.temperature_c;
            rainfall_sum += obs.rainfall_mm;
            eto_sum += obs.eto_mm_per_day;
        }

        Ok(Self {
            observations: observations.len(),
            first_date,
            last_date,
            avg_temperature_c: temperature_sum / n,
            total_rainfall_mm: rainfall_sum,
            avg_eto_mm_per_day: eto_sum / n,
        })
    }

    /// Rainfall spread over the logged span, as a weekly rate
    pub fn weekly_rainfall_mm(&self) -> f64 {
        let span_days = (self.last_date - self.first_date).num_days() + 1;
        self.total_rainfall_mm * 7.0 / span_days as f64
    }
}

/// Read a JSON weather log from disk, oldest observation first.
pub fn load_weather_log(path: &Path) -> HydroResult<Vec<WeatherObservation>> {
    let content = fs::read_to_string(path)?;
    parse_weather_log(&content).map_err(|message| HydroError::WeatherLog {
        file: path.to_path_buf(),
        message,
    })
}

fn parse_weather_log(content: &str) -> Result<Vec<WeatherObservation>, String> {
    let mut observations: Vec<WeatherObservation> =
        serde_json::from_str(content).map_err(|e| e.to_string())?;

    for obs in &observations {
        if [obs.temperature_c, obs.rainfall_mm, obs.eto_mm_per_day]
            .iter()
            .any(|v| !v.is_finite())
        {
            return Err(format!("non-finite value on {}", obs.date));
        }
        if obs.rainfall_mm < 0.0 || obs.eto_mm_per_day < 0.0 {
            return Err(format!("negative rainfall or ETo on {}", obs.date));
        }
    }

    observations.sort_by_key(|o| o.date);
    Ok(observations)
}
