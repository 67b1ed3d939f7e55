use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_wind_speed() -> f64 {
    40.0
}

fn default_hours_to_landfall() -> f64 {
    48.0
}

fn default_family_size() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub form: FormDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values the front end uses for any input the user leaves out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormDefaults {
    #[serde(default = "default_wind_speed")]
    pub wind_speed: f64,
    #[serde(default = "default_hours_to_landfall")]
    pub hours_to_landfall: f64,
    #[serde(default = "default_family_size")]
    pub family_size: u32,
    #[serde(default = "default_true")]
    pub has_car: bool,
    #[serde(default)]
    pub has_elderly_or_disabled: bool,
    #[serde(default)]
    pub has_pets: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            wind_speed: default_wind_speed(),
            hours_to_landfall: default_hours_to_landfall(),
            family_size: default_family_size(),
            has_car: true,
            has_elderly_or_disabled: false,
            has_pets: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".config/stormsense/config.toml"))
}

pub fn resolve_config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

/// Missing file means built-in defaults; a file that exists must parse.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}
