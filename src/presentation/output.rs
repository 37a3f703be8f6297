//! Output Rendering
//!
//! Text renderers build whole strings so commands decide where they go
//! (stdout for results, stderr for diagnostics).

use crate::domain::{
    CalculationInputs, Crop, StageBreakdown, SupplyPlan, WeatherSummary,
};
use crate::ui::primitives::text::ColoredText;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
    drop: &'static str,
    arrow: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
            drop: "💧",
            arrow: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[!]",
            drop: "*",
            arrow: "->",
        }
    }
}

/// Text renderer for command results
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
    /// Show intermediate values (per-stage rows)
    pub detailed: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
            detailed: false,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn bold(&self, s: &str) -> String {
        ColoredText::plain(s).bold().render(self.color)
    }

    pub fn estimate(&self, inputs: &CalculationInputs, breakdown: &StageBreakdown) -> String {
        let icons = self.icons();
        let result = &breakdown.result;
        let mut out = String::new();

        out.push_str(&format!(
            "{} Water required for {} over the full cycle\n\n",
            icons.drop,
            self.bold(inputs.crop.name)
        ));
        out.push_str(&format!(
            "  {} L ({:.1} m³)\n",
            ColoredText::success(group_thousands(result.total_water_liters)).render(self.color),
            result.total_water_cubic_meters()
        ));
        out.push_str(&format!(
            "  Gross irrigation requirement: {:.1} mm\n",
            result.total_gross_irrigation_mm
        ));
        out.push_str(&format!(
            "  {} acres, ETo {} mm/day, rain {} mm/week, efficiency {}%\n",
            inputs.area_acres,
            inputs.avg_daily_eto_mm,
            inputs.effective_rain_weekly_mm,
            inputs.irrigation_efficiency_percent
        ));

        if self.detailed {
            out.push('\n');
            out.push_str(&format!(
                "  {:<12} {:>4} {:>5} {:>8} {:>9} {:>9}\n",
                "Stage", "Days", "Kc", "ETc mm/d", "Net mm", "Gross mm"
            ));
            for row in &breakdown.stages {
                out.push_str(&format!(
                    "  {:<12} {:>4} {:>5.2} {:>8.2} {:>9.2} {:>9.2}\n",
                    row.stage.display_name(),
                    row.days,
                    row.kc,
                    row.etc_daily_mm,
                    row.net_irrigation_mm,
                    row.gross_irrigation_mm
                ));
            }
        }

        out
    }

    pub fn supply(&self, plan: &SupplyPlan) -> String {
        let icons = self.icons();
        let mut out = String::new();

        out.push_str(&format!(
            "{} Run the pump about {} per day over {} days\n",
            icons.check,
            self.bold(&format!("{:.1} hours", plan.hours_per_day)),
            plan.days
        ));
        out.push_str(&format!(
            "  {} L at {} L/h {} {:.1} pump hours total\n",
            group_thousands(plan.total_water_liters),
            group_thousands(plan.pump_capacity_lph),
            icons.arrow,
            plan.total_pump_hours
        ));
        if plan.exceeds_day() {
            out.push_str(&format!(
                "  {} {}\n",
                icons.warn,
                ColoredText::warning(
                    "daily run time exceeds 24 hours - add capacity or lengthen the cycle"
                )
                .render(self.color)
            ));
        }

        out
    }

    pub fn weather(&self, summary: &WeatherSummary) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{} observations, {} to {}\n\n",
            summary.observations, summary.first_date, summary.last_date
        ));
        out.push_str(&format!(
            "  Avg temperature:  {:.1} °C\n",
            summary.avg_temperature_c
        ));
        out.push_str(&format!(
            "  Total rainfall:   {:.1} mm ({:.1} mm/week)\n",
            summary.total_rainfall_mm,
            summary.weekly_rainfall_mm()
        ));
        out.push_str(&format!(
            "  Avg ETo:          {:.1} mm/day\n",
            summary.avg_eto_mm_per_day
        ));

        out
    }

    /// One-line error for stderr
    pub fn error(&self, message: &str) -> String {
        format!(
            "{} {}",
            self.icons().cross,
            ColoredText::error(message).bold().render(self.color)
        )
    }

    pub fn warning(&self, message: &str) -> String {
        format!("{} {}", self.icons().warn, message)
    }
}

/// Fixed-width crop reference table
pub fn render_crop_table(crops: &[Crop]) -> String {
    let mut lines = vec![format!(
        "{:<20} {:>4} {:>4} {:>4} {:>4} {:>6} {:>5} {:>5} {:>5}",
        "Crop", "Init", "Dev", "Mid", "Late", "Season", "Kc-i", "Kc-m", "Kc-e"
    )];

    for crop in crops {
        let profile = crop.profile();
        let line = match (profile.stage_durations, profile.stage_coefficients) {
            (Some(d), Some(kc)) => format!(
                "{:<20} {:>4} {:>4} {:>4} {:>4} {:>6} {:>5.2} {:>5.2} {:>5.2}",
                profile.name,
                d.initial,
                d.development,
                d.mid,
                d.late,
                d.total_days(),
                kc.initial,
                kc.mid,
                kc.end
            ),
            _ => format!("{:<20} (no stage data)", profile.name),
        };
        lines.push(line.trim_end().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Round to whole units and group thousands with commas: 2806244.48 -> "2,806,244"
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}
