use anyhow::Result;
use serde::Serialize;

use hydroscope::domain::{StageCoefficients, StageDurations};
use hydroscope::presentation::render_crop_table;
use hydroscope::Crop;

use super::Session;

#[derive(Serialize)]
struct CropEntry {
    id: &'static str,
    name: &'static str,
    supported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    season_days: Option<u32>,
    stage_durations: Option<StageDurations>,
    stage_coefficients: Option<StageCoefficients>,
}

pub fn run(session: &Session) -> Result<()> {
    if session.json {
        let crops: Vec<CropEntry> = Crop::ALL
            .iter()
            .map(|crop| {
                let profile = crop.profile();
                CropEntry {
                    id: crop.id(),
                    name: profile.name,
                    supported: profile.is_supported(),
                    season_days: profile.stage_durations.map(|d| d.total_days()),
                    stage_durations: profile.stage_durations,
                    stage_coefficients: profile.stage_coefficients,
                }
            })
            .collect();
        return session.emit_result(serde_json::json!({ "crops": crops }));
    }

    print!("{}", render_crop_table(&Crop::ALL));
    Ok(())
}
