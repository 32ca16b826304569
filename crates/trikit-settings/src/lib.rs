//! trikit Settings Crate
//!
//! Handles engine and command-line configuration: tolerances, output
//! formatting and logging, loaded from JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{Config, GeometrySettings, LoggingSettings, OutputSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
