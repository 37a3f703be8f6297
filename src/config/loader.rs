//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Crop;
use crate::error::{HydroError, HydroResult};

use super::types::{Config, ConfigSource, ConfigWarning, LoadedConfig, Verbosity};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "hydroscope.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HydroResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HydroError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

pub fn resolve(explicit: Option<&Path>, working_dir: &Path) -> HydroResult<LoadedConfig> {
    let source = if let Some(path) = explicit {
        ConfigSource::Explicit(path.to_path_buf())
    } else {
        let project = working_dir.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            ConfigSource::Project(project)
        } else {
            match user_config_path() {
                Some(user) if user.is_file() => ConfigSource::User(user),
                _ => ConfigSource::BuiltIn,
            }
        }
    };

    let (config, warnings) = match source.path() {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: config.with_env_overrides(),
        source,
        warnings,
    })
}

/// Apply `HYDROSCOPE_*` overrides read through `lookup`. Unparsable values are ignored.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(crop) = lookup("HYDROSCOPE_CROP").and_then(|v| v.parse::<Crop>().ok()) {
        config.defaults.crop = crop;
    }

    if let Some(eto) = lookup("HYDROSCOPE_ETO").and_then(|v| v.trim().parse::<f64>().ok()) {
        config.defaults.avg_daily_eto_mm = eto;
    }

    if let Some(eff) = lookup("HYDROSCOPE_EFFICIENCY").and_then(|v| v.trim().parse::<f64>().ok())
    {
        config.defaults.irrigation_efficiency_percent = eff;
    }

    if let Some(verbosity) =
        lookup("HYDROSCOPE_VERBOSITY").and_then(|v| Verbosity::parse_lenient(&v))
    {
        config.output.verbosity = verbosity;
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hydroscope").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "defaults",
        "crop",
        "area_acres",
        "avg_daily_eto_mm",
        "effective_rain_weekly_mm",
        "irrigation_efficiency_percent",
        "supply",
        "pump_capacity_lph",
        "days",
        "output",
        "verbosity",
        "color",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut curr = Vec::with_capacity(b.len() + 1);
        curr.push(i + 1);
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != *bc);
            curr.push((prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost));
        }
        prev = curr;
    }

    prev[b.len()]
}
