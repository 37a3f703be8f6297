//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{CalculationInputs, Crop, DEFAULT_CYCLE_DAYS};
use crate::error::HydroResult;

use super::loader;

/// Default estimation inputs used when a flag is not given
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub crop: Crop,

    #[serde(default = "default_area_acres")]
    pub area_acres: f64,

    #[serde(default = "default_eto")]
    pub avg_daily_eto_mm: f64,

    #[serde(default)]
    pub effective_rain_weekly_mm: f64,

    #[serde(default = "default_efficiency")]
    pub irrigation_efficiency_percent: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            crop: Crop::default(),
            area_acres: default_area_acres(),
            avg_daily_eto_mm: default_eto(),
            effective_rain_weekly_mm: 0.0,
            irrigation_efficiency_percent: default_efficiency(),
        }
    }
}

impl DefaultsConfig {
    /// Inputs built purely from the configured defaults
    pub fn to_inputs(&self) -> CalculationInputs {
        CalculationInputs::new(
            self.crop,
            self.area_acres,
            self.avg_daily_eto_mm,
            self.irrigation_efficiency_percent,
        )
        .with_effective_rain(self.effective_rain_weekly_mm)
    }
}

fn default_area_acres() -> f64 {
    1.0
}

fn default_eto() -> f64 {
    5.0
}

fn default_efficiency() -> f64 {
    80.0
}

/// Supply planner defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplyConfig {
    #[serde(default = "default_pump_capacity")]
    pub pump_capacity_lph: f64,

    #[serde(default = "default_days")]
    pub days: u32,
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            pump_capacity_lph: default_pump_capacity(),
            days: default_days(),
        }
    }
}

fn default_pump_capacity() -> f64 {
    1000.0
}

fn default_days() -> u32 {
    DEFAULT_CYCLE_DAYS
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the configured level by the number of `-v` flags
    pub fn bumped(self, count: u8) -> Self {
        match (self, count) {
            (level, 0) => level,
            (Verbosity::Quiet | Verbosity::Normal, 1) => Verbosity::Verbose,
            (Verbosity::Verbose, 1) => Verbosity::Debug,
            _ => Verbosity::Debug,
        }
    }

    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub supply: SupplyConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the active configuration was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config <FILE>`
    Explicit(PathBuf),
    /// `hydroscope.toml` in the working directory
    Project(PathBuf),
    /// `<config_dir>/hydroscope/config.toml`
    User(PathBuf),
    BuiltIn,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::User(p) => {
                Some(p)
            }
            ConfigSource::BuiltIn => None,
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "{} (--config)", p.display()),
            ConfigSource::Project(p) => write!(f, "{} (project)", p.display()),
            ConfigSource::User(p) => write!(f, "{} (user)", p.display()),
            ConfigSource::BuiltIn => write!(f, "built-in defaults"),
        }
    }
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A resolved configuration together with how it was found
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HydroResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> HydroResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the explicit, project or user config (first found wins),
    /// then apply `HYDROSCOPE_*` environment overrides.
    pub fn resolve(explicit: Option<&Path>, working_dir: &Path) -> HydroResult<LoadedConfig> {
        loader::resolve(explicit, working_dir)
    }

    /// Apply environment variable overrides (HYDROSCOPE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
