//! Application configuration.
//!
//! The config lives at `~/.config/smile/config.toml`. Every key is optional;
//! a missing or broken file means defaults. The same directory holds the
//! history file.

mod service;
mod types;
mod validation;

use std::path::PathBuf;

use crate::error::ConfigError;

pub use service::{config, init_config, read_config_file, set_config};
pub use types::{AppConfig, DEFAULT_TYPING_COMMAND};
pub use validation::{ValidationWarning, validate_config};

/// Application name used for the config directory.
pub const APP_NAME: &str = "smile";

/// Get the config directory path (`~/.config/smile`).
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or(ConfigError::NoDirFound)
}
