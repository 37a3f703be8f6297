use anyhow::Result;
use serde::Serialize;

use hydroscope::domain::{load_weather_log, CalculationResult, StageEstimate};
use hydroscope::presentation::EstimateArgs;
use hydroscope::{estimate_by_stage, CalculationInputs, Crop, SupplyPlan, WeatherSummary};

use super::{supply, Session};

#[derive(Serialize)]
struct EstimatePayload<'a> {
    crop: Crop,
    inputs: &'a CalculationInputs,
    #[serde(flatten)]
    result: CalculationResult,
    total_water_cubic_meters: f64,
    stages: &'a [StageEstimate],
    #[serde(skip_serializing_if = "Option::is_none")]
    supply: Option<SupplyPlan>,
}

pub fn run(session: &Session, args: EstimateArgs) -> Result<()> {
    let defaults = &session.config.defaults;
    let crop = args.crop.unwrap_or(defaults.crop);

    let eto = match (args.eto, &args.eto_from_log) {
        (Some(eto), _) => eto,
        (None, Some(path)) => {
            let summary = WeatherSummary::from_observations(&load_weather_log(path)?)?;
            session.info(format!(
                "ETo {:.2} mm/day: mean of {} observations in {}",
                summary.avg_eto_mm_per_day,
                summary.observations,
                path.display()
            ));
            summary.avg_eto_mm_per_day
        }
        (None, None) => defaults.avg_daily_eto_mm,
    };

    let inputs = CalculationInputs::new(
        crop,
        args.acres.unwrap_or(defaults.area_acres),
        eto,
        args.efficiency.unwrap_or(defaults.irrigation_efficiency_percent),
    )
    .with_effective_rain(args.rain.unwrap_or(defaults.effective_rain_weekly_mm));
    session.debug(format!("{:?}", inputs));

    let breakdown = estimate_by_stage(&inputs)?;

    let plan = if args.plan || args.pump.is_set() {
        Some(supply::plan(session, breakdown.result.total_water_liters, args.pump)?)
    } else {
        None
    };

    if session.json {
        return session.emit_result(EstimatePayload {
            crop,
            inputs: &inputs,
            result: breakdown.result,
            total_water_cubic_meters: breakdown.result.total_water_cubic_meters(),
            stages: &breakdown.stages,
            supply: plan,
        });
    }

    print!("{}", session.renderer.estimate(&inputs, &breakdown));
    if let Some(plan) = plan {
        println!();
        print!("{}", session.renderer.supply(&plan));
    }
    Ok(())
}
