//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Numeric flags left unset fall back to config, then to built-in defaults

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ColorMode;
use crate::domain::Crop;

/// HydroScope - stage-based crop irrigation water estimator
#[derive(Parser, Debug)]
#[command(name = "hydroscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./hydroscope.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate seasonal irrigation water for a crop
    Estimate(EstimateArgs),

    /// List the crop reference table
    Crops,

    /// Plan pump run time for a volume of water
    Supply {
        /// Total water to deliver [L]
        #[arg(long)]
        liters: f64,

        #[command(flatten)]
        pump: PumpArgs,
    },

    /// Summarize a JSON weather log (mean ETo, total rainfall)
    Weather {
        /// Path to the weather log
        file: PathBuf,
    },
}

impl Commands {
    /// Name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Estimate(_) => "estimate",
            Commands::Crops => "crops",
            Commands::Supply { .. } => "supply",
            Commands::Weather { .. } => "weather",
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct EstimateArgs {
    /// Crop to estimate for
    #[arg(short, long, value_enum)]
    pub crop: Option<Crop>,

    /// Land area [acres]
    #[arg(short, long)]
    pub acres: Option<f64>,

    /// Average daily reference evapotranspiration [mm/day]
    #[arg(long, conflicts_with = "eto_from_log")]
    pub eto: Option<f64>,

    /// Use the mean ETo of a JSON weather log
    #[arg(long, value_name = "FILE")]
    pub eto_from_log: Option<PathBuf>,

    /// Average effective rainfall [mm/week]
    #[arg(long)]
    pub rain: Option<f64>,

    /// Irrigation efficiency [%]
    #[arg(short, long)]
    pub efficiency: Option<f64>,

    /// Also plan pump run time for the estimated volume
    #[arg(long)]
    pub plan: bool,

    #[command(flatten)]
    pub pump: PumpArgs,
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct PumpArgs {
    /// Water source / pump capacity [L/h]
    #[arg(long)]
    pub pump_lph: Option<f64>,

    /// Days to spread the delivery over
    #[arg(long)]
    pub days: Option<u32>,
}

impl PumpArgs {
    pub fn is_set(&self) -> bool {
        self.pump_lph.is_some() || self.days.is_some()
    }
}
