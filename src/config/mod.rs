//! Configuration module for HydroScope
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HYDROSCOPE_*)
//! 3. Explicit `--config` file, else project `hydroscope.toml`
//! 4. User config (`<config_dir>/hydroscope/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, ConfigSource, ConfigWarning, DefaultsConfig, LoadedConfig, OutputConfig,
    SupplyConfig, Verbosity,
};
