//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text; JSON goes through `ui::json`)

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands, EstimateArgs, PumpArgs};
pub use output::{group_thousands, render_crop_table, TextRenderer};
