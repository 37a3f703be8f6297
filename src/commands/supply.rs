use anyhow::Result;

use hydroscope::presentation::PumpArgs;
use hydroscope::SupplyPlan;

use super::Session;

/// Plan with flags taking precedence over the `[supply]` config
pub fn plan(session: &Session, liters: f64, pump: PumpArgs) -> Result<SupplyPlan> {
    let defaults = &session.config.supply;
    let plan = SupplyPlan::new(
        liters,
        pump.pump_lph.unwrap_or(defaults.pump_capacity_lph),
        pump.days.unwrap_or(defaults.days),
    )?;
    session.debug(format!("{:?}", plan));
    Ok(plan)
}

pub fn run(session: &Session, liters: f64, pump: PumpArgs) -> Result<()> {
    let plan = plan(session, liters, pump)?;

    if session.json {
        return session.emit_result(plan);
    }

    print!("{}", session.renderer.supply(&plan));
    Ok(())
}
