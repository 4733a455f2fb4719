//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use crate::catalog;
use crate::history::DEFAULT_MAX_HISTORY;

use super::types::AppConfig;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

impl ValidationWarning {
    fn new(field: impl Into<String>, message: String) -> Self {
        Self {
            field: field.into(),
            message,
        }
    }
}

/// Validate the entire config, returning warnings for non-fatal issues.
///
/// This function checks for:
/// - Window dimensions outside recommended ranges
/// - Zero columns or history size, or a history larger than 10
/// - An empty typing command
/// - Timings that make the picker feel stuck
/// - Keywords for categories or emoticons that aren't in the catalog
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if config.window_width < 300.0 {
        warnings.push(ValidationWarning::new(
            "window_width",
            format!(
                "Width {} is below minimum (300). Consider increasing for usability.",
                config.window_width
            ),
        ));
    } else if config.window_width > 2000.0 {
        warnings.push(ValidationWarning::new(
            "window_width",
            format!(
                "Width {} exceeds maximum (2000). This may cause display issues.",
                config.window_width
            ),
        ));
    }

    if config.window_height < 200.0 {
        warnings.push(ValidationWarning::new(
            "window_height",
            format!(
                "Height {} is below minimum (200). Consider increasing for usability.",
                config.window_height
            ),
        ));
    } else if config.window_height > 1500.0 {
        warnings.push(ValidationWarning::new(
            "window_height",
            format!(
                "Height {} exceeds maximum (1500). This may cause display issues.",
                config.window_height
            ),
        ));
    }

    if config.columns == 0 {
        warnings.push(ValidationWarning::new(
            "columns",
            "Columns must be at least 1. Using a single column.".to_string(),
        ));
    }

    if config.max_history == 0 {
        warnings.push(ValidationWarning::new(
            "max_history",
            "max_history is 0. Recently used emoticons will not be kept.".to_string(),
        ));
    } else if config.max_history > DEFAULT_MAX_HISTORY {
        warnings.push(ValidationWarning::new(
            "max_history",
            format!(
                "max_history {} exceeds maximum ({}). Keeping {} entries.",
                config.max_history, DEFAULT_MAX_HISTORY, DEFAULT_MAX_HISTORY
            ),
        ));
    }

    if config.typing_command.iter().all(|part| part.trim().is_empty()) {
        warnings.push(ValidationWarning::new(
            "typing_command",
            "Typing command is empty. Falling back to xdotool.".to_string(),
        ));
    }

    if config.type_timeout_ms > 5000 {
        warnings.push(ValidationWarning::new(
            "type_timeout_ms",
            format!(
                "Timeout {}ms is long. The window is unresponsive while typing.",
                config.type_timeout_ms
            ),
        ));
    }

    for (field, value) in [
        ("hide_delay_ms", config.hide_delay_ms),
        ("reopen_delay_ms", config.reopen_delay_ms),
    ] {
        if value > 2000 {
            warnings.push(ValidationWarning::new(
                field,
                format!("Delay {}ms exceeds maximum (2000).", value),
            ));
        }
    }

    for name in config.keywords.keys() {
        let known = catalog::categories()
            .iter()
            .any(|category| category.name.to_lowercase() == name.to_lowercase());
        if !known {
            warnings.push(ValidationWarning::new(
                format!("keywords.{}", name),
                format!("Category '{}' doesn't exist. Its keywords are ignored.", name),
            ));
        }
    }

    for emoticon in config.emoticon_keywords.keys() {
        if !catalog::contains(emoticon) {
            warnings.push(ValidationWarning::new(
                format!("emoticon_keywords.{}", emoticon),
                format!("Emoticon '{}' isn't in the catalog. Its keywords are ignored.", emoticon),
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        let config = AppConfig::default();
        let warnings = validate_config(&config);
        assert!(warnings.is_empty(), "Warnings: {:?}", warnings);
    }

    #[test]
    fn test_validate_window_width_too_small() {
        let config = AppConfig {
            window_width: 100.0,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "window_width"));
    }

    #[test]
    fn test_validate_window_height_too_large() {
        let config = AppConfig {
            window_height: 3000.0,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "window_height"));
    }

    #[test]
    fn test_validate_max_history_above_cap() {
        let config = AppConfig {
            max_history: 11,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "max_history");
        assert!(warnings[0].message.contains("Keeping 10"));

        let config = AppConfig {
            max_history: 10,
            ..AppConfig::default()
        };
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_validate_zero_columns() {
        let config = AppConfig {
            columns: 0,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "columns"));
    }

    #[test]
    fn test_validate_empty_typing_command() {
        let config = AppConfig {
            typing_command: vec![],
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(
            warnings
                .iter()
                .any(|w| w.field == "typing_command" && w.message.contains("xdotool"))
        );
    }

    #[test]
    fn test_validate_long_delays() {
        let config = AppConfig {
            reopen_delay_ms: 10_000,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "reopen_delay_ms"));
    }

    #[test]
    fn test_validate_unknown_keyword_category() {
        let mut config = AppConfig::default();
        config
            .keywords
            .insert("Robots".to_string(), vec!["beep".to_string()]);
        config
            .keywords
            .insert("HAPPY".to_string(), vec!["joy".to_string()]);

        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "keywords.Robots");
    }

    #[test]
    fn test_validate_unknown_keyword_emoticon() {
        let mut config = AppConfig::default();
        config
            .emoticon_keywords
            .insert("<3".to_string(), vec!["heart".to_string()]);
        config
            .emoticon_keywords
            .insert("8-)".to_string(), vec!["glasses".to_string()]);

        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "emoticon_keywords.8-)");
    }
}
