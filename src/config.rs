//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgchart/orgchart.toml`
//! 3. Explicit config file (`--config <path>`)
//! 4. Environment variables: `ORGCHART_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

pub const DEFAULT_LOWER_PCT: u32 = 20;
pub const DEFAULT_UPPER_PCT: u32 = 50;
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Allowed window for a manager's salary, in percent of the subordinates' average.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SalaryBandConfig {
    pub lower_pct: u32,
    pub upper_pct: u32,
}

impl Default for SalaryBandConfig {
    fn default() -> Self {
        Self {
            lower_pct: DEFAULT_LOWER_PCT,
            upper_pct: DEFAULT_UPPER_PCT,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportingLineConfig {
    /// Maximum number of managers allowed above an employee
    pub max_depth: usize,
}

impl Default for ReportingLineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Raw salary band section; `None` means "not specified, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSalaryBandConfig {
    pub lower_pct: Option<u32>,
    pub upper_pct: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawReportingLineConfig {
    pub max_depth: Option<usize>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub salary_band: RawSalaryBandConfig,
    pub reporting_line: RawReportingLineConfig,
}

/// Unified configuration for orgchart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub salary_band: SalaryBandConfig,
    pub reporting_line: ReportingLineConfig,
}

/// Get the XDG config directory for orgchart.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgchart").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgchart.toml"))
}

/// Expand `~` and `$VAR` in a user supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Look up one env-provided key. Unset is `None`; a value that is not a
/// plain integer is an error, so `12.5` or `-5` never get rounded or clamped.
fn env_value<T>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = match config.get_string(key) {
        Ok(raw) => raw,
        Err(ConfigError::NotFound(_)) => return Ok(None),
        Err(e) => return Err(config_err(e)),
    };
    let val = raw.trim().parse::<T>().map_err(|e| ApplicationError::Config {
        message: format!("environment override {key}='{raw}': {e}"),
    })?;
    debug!(key, "applying environment override");
    Ok(Some(val))
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            salary_band: SalaryBandConfig {
                lower_pct: overlay
                    .salary_band
                    .lower_pct
                    .unwrap_or(self.salary_band.lower_pct),
                upper_pct: overlay
                    .salary_band
                    .upper_pct
                    .unwrap_or(self.salary_band.upper_pct),
            },
            reporting_line: ReportingLineConfig {
                max_depth: overlay
                    .reporting_line
                    .max_depth
                    .unwrap_or(self.reporting_line.max_depth),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            let path = expand_path(path);
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!(path = %path.display(), "loading config file");
            current = current.merge_with(&load_raw_settings(&path)?);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.validate()?;
        Ok(current)
    }

    /// Apply ORGCHART_* environment variables as explicit overrides.
    ///
    /// e.g. `ORGCHART_SALARY_BAND__LOWER_PCT=10`
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ORGCHART")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<u32>(&config, "salary_band.lower_pct")? {
            settings.salary_band.lower_pct = val;
        }
        if let Some(val) = env_value::<u32>(&config, "salary_band.upper_pct")? {
            settings.salary_band.upper_pct = val;
        }
        if let Some(val) = env_value::<usize>(&config, "reporting_line.max_depth")? {
            settings.reporting_line.max_depth = val;
        }

        Ok(settings)
    }

    /// Reject settings no analysis can run with.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.salary_band.lower_pct > self.salary_band.upper_pct {
            return Err(ApplicationError::Config {
                message: format!(
                    "salary band lower_pct ({}) exceeds upper_pct ({})",
                    self.salary_band.lower_pct, self.salary_band.upper_pct
                ),
            });
        }
        Ok(())
    }

    /// Render as TOML for `config show`.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
