//! Configuration service for managing application config.

use std::path::Path;
use std::sync::RwLock;

use crate::error::ConfigError;

use super::config_dir;
use super::types::AppConfig;

/// Global config instance (mutable via RwLock).
static CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default_const());

/// Read and parse a config file.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn read_config_file(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    let config = toml::from_str::<AppConfig>(&content).map_err(ConfigError::ParseFailed)?;
    Ok(Some(config))
}

/// Load application config from `~/.config/smile/config.toml`.
///
/// Returns `None` if the config file doesn't exist or can't be used.
/// Logs a warning when the file exists but fails to load.
fn load_app_config() -> Option<AppConfig> {
    let config_path = match config_dir() {
        Ok(dir) => dir.join("config.toml"),
        Err(e) => {
            tracing::warn!("{}, using defaults", e);
            return None;
        }
    };

    match read_config_file(&config_path) {
        Ok(Some(config)) => {
            tracing::info!("Loaded app config from {:?}", config_path);
            Some(config)
        }
        Ok(None) => {
            tracing::debug!("Config file not found at {:?}, using defaults", config_path);
            None
        }
        Err(e) => {
            tracing::warn!("{} ({:?}), using defaults", e, config_path);
            None
        }
    }
}

/// Initialize config from file (call once at startup).
///
/// Loads the configuration and validates it, logging any warnings for
/// invalid or unusual values.
pub fn init_config() {
    let loaded = load_app_config().unwrap_or_default();

    let warnings = super::validation::validate_config(&loaded);
    for warning in warnings {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }

    set_config(loaded);
}

/// Replace the in-memory config.
pub fn set_config(new_config: AppConfig) {
    let mut config = CONFIG.write().unwrap_or_else(|e| e.into_inner());
    *config = new_config;
}

/// Get a clone of the current config.
pub fn config() -> AppConfig {
    CONFIG.read().unwrap_or_else(|e| e.into_inner()).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_config_file(&dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_read_valid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_history = 5\nhide_delay_ms = 50\n").unwrap();

        let config = read_config_file(&path).unwrap().unwrap();
        assert_eq!(config.max_history, 5);
        assert_eq!(config.hide_delay_ms, 50);
        assert_eq!(config.columns, 10);
    }

    #[test]
    fn test_read_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_history = \"lots\"").unwrap();

        let result = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }
}
