//! Test utilities and mock factories.
//!
//! This module provides common testing utilities including mock config and
//! history helpers. Only compiled in test builds.

use crate::config::AppConfig;
use crate::history::{DEFAULT_MAX_HISTORY, HistoryStore};
use tempfile::TempDir;

/// Create a mock AppConfig with default values.
pub fn mock_config() -> AppConfig {
    AppConfig::default()
}

/// Create a mock AppConfig with a specific typing command.
pub fn mock_config_with_command(command: &[&str]) -> AppConfig {
    AppConfig {
        typing_command: command.iter().map(|s| s.to_string()).collect(),
        ..mock_config()
    }
}

/// Build an owned history list.
pub fn history_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Open a history store in a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the store is used.
pub fn temp_history() -> (TempDir, HistoryStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = HistoryStore::open(dir.path(), DEFAULT_MAX_HISTORY);
    (dir, store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_config() {
        assert_eq!(mock_config(), AppConfig::default());
    }

    #[test]
    fn test_mock_config_with_command() {
        let config = mock_config_with_command(&["wtype"]);
        assert_eq!(config.typing_command, vec!["wtype"]);
    }

    #[test]
    fn test_temp_history_starts_empty() {
        let (dir, store) = temp_history();
        assert!(store.is_empty());
        assert!(store.path().unwrap().starts_with(dir.path()));
    }
}
