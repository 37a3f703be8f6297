use std::path::Path;

use anyhow::{Context, Result};

use hydroscope::domain::load_weather_log;
use hydroscope::WeatherSummary;

use super::Session;

pub fn run(session: &Session, file: &Path) -> Result<()> {
    let log = load_weather_log(file)
        .with_context(|| format!("failed to read weather log {}", file.display()))?;
    session.info(format!("{} observations read from {}", log.len(), file.display()));

    let summary = WeatherSummary::from_observations(&log)?;

    if session.json {
        return session.emit_result(serde_json::json!({
            "summary": summary,
            "weekly_rainfall_mm": summary.weekly_rainfall_mm(),
        }));
    }

    print!("{}", session.renderer.weather(&summary));
    Ok(())
}
