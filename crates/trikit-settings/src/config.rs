//! Configuration for the trikit engine and command-line driver
//!
//! Configuration is organized into sections:
//! - Geometry (tolerances)
//! - Output (number formatting of driver results)
//! - Logging (filter level, output format)
//!
//! Files are JSON or TOML, picked by extension. Missing keys fall back to
//! their defaults, so a file only needs the values it changes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trikit_core::constants::ZERO_TOLERANCE;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Largest number of decimals that still changes an `f64`.
const MAX_PRECISION: usize = 17;

/// Geometry tolerances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    /// Frames with a width or height at or below this count as degenerate
    pub zero_tolerance: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            zero_tolerance: ZERO_TOLERANCE,
        }
    }
}

/// Driver output formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Decimals kept in printed coordinates
    pub precision: usize,
    /// Indent printed JSON
    pub pretty: bool,
    /// Print end points only instead of full path segments
    pub plain_points: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            precision: 6,
            pretty: true,
            plain_points: false,
        }
    }
}

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, e.g. `info` or `trikit_geometry=trace`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string())),
            None => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub geometry: GeometrySettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the per-user config file.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("trikit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else the per-user file if it exists, else
    /// defaults. An explicit path that cannot be read is an error.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.is_file() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content).map_err(|e| SettingsError::SaveError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let tolerance = self.geometry.zero_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "geometry.zero_tolerance".to_string(),
                value: tolerance.to_string(),
            }
            .into());
        }

        if self.output.precision > MAX_PRECISION {
            return Err(SettingsError::InvalidSetting {
                key: "output.precision".to_string(),
                reason: format!("must be at most {}", MAX_PRECISION),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "logging.level".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
