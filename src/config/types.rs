//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::history::DEFAULT_MAX_HISTORY;
use crate::injection::InjectionTimings;

/// Typing command used when the config does not provide one.
pub const DEFAULT_TYPING_COMMAND: [&str; 3] = ["xdotool", "type", "--clearmodifiers"];

/// Search terms shipped for each category, keyed by lowercase category name.
pub const DEFAULT_KEYWORDS: &[(&str, &[&str])] = &[
    ("happy", &["happy", "joy", "smile", "grin", "cheerful", "glad", "pleased"]),
    ("sad", &["sad", "cry", "unhappy", "depressed", "down", "tear", "weep"]),
    ("angry", &["angry", "mad", "furious", "rage", "annoyed", "irritated"]),
    ("surprised", &["surprised", "shocked", "amazed", "astonished", "wow"]),
    ("love", &["love", "heart", "romance", "affection", "adore", "crush"]),
    (
        "gestures",
        &["hand", "gesture", "thumbs", "clap", "wave", "point", "fist", "ok", "peace"],
    ),
    ("faces", &["face", "expression", "neutral", "tired", "sleepy", "bored"]),
    ("cool", &["cool", "awesome", "sunglasses", "cat", "kitty", "nerd", "smart"]),
    (
        "symbols",
        &["star", "fire", "sparkle", "lightning", "check", "cross", "rainbow"],
    ),
    (
        "objects",
        &["party", "celebration", "gift", "trophy", "medal", "award", "balloon"],
    ),
    (
        "animals",
        &["animal", "pet", "dog", "cat", "mouse", "bear", "fox", "lion", "monkey"],
    ),
    (
        "food",
        &["food", "eat", "pizza", "burger", "coffee", "cake", "dessert", "snack"],
    ),
    (
        "classic",
        &["classic", "text", "ascii", "emoticon", "smiley", "shrug", "tableflip"],
    ),
];

fn default_keywords() -> BTreeMap<String, Vec<String>> {
    DEFAULT_KEYWORDS
        .iter()
        .map(|(category, terms)| {
            let terms = terms.iter().map(|t| t.to_string()).collect();
            (category.to_string(), terms)
        })
        .collect()
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window width in pixels.
    pub window_width: f32,
    /// Window height in pixels.
    pub window_height: f32,
    /// Number of cells per grid row.
    pub columns: usize,
    /// Maximum number of recently used emoticons to keep, at most 10.
    pub max_history: usize,
    /// Typing program plus leading arguments; the emoticon is appended.
    pub typing_command: Vec<String>,
    /// How long the typing tool may run before it is killed.
    pub type_timeout_ms: u64,
    /// Delay between hiding the window and typing.
    pub hide_delay_ms: u64,
    /// Delay between typing and reopening the window.
    pub reopen_delay_ms: u64,
    /// Also match emoji names and shortcodes when filtering.
    pub search_emoji_names: bool,
    /// Extra search terms per category name (case-insensitive).
    pub keywords: BTreeMap<String, Vec<String>>,
    /// Extra search terms per emoticon, keyed by the exact emoticon text.
    pub emoticon_keywords: BTreeMap<String, Vec<String>>,
}

impl AppConfig {
    /// Const default for static initialization.
    ///
    /// `typing_command` is left empty here; [`AppConfig::typing_command`]
    /// falls back to [`DEFAULT_TYPING_COMMAND`]. The keyword tables are
    /// empty too; [`AppConfig::default`] fills in [`DEFAULT_KEYWORDS`].
    pub const fn default_const() -> Self {
        Self {
            window_width: 600.0,
            window_height: 500.0,
            columns: 10,
            max_history: DEFAULT_MAX_HISTORY,
            typing_command: Vec::new(),
            type_timeout_ms: 1000,
            hide_delay_ms: 100,
            reopen_delay_ms: 200,
            search_emoji_names: false,
            keywords: BTreeMap::new(),
            emoticon_keywords: BTreeMap::new(),
        }
    }

    /// The effective typing command (program first).
    pub fn typing_command(&self) -> Vec<String> {
        if self.typing_command.iter().all(|part| part.trim().is_empty()) {
            DEFAULT_TYPING_COMMAND.iter().map(|s| s.to_string()).collect()
        } else {
            self.typing_command.clone()
        }
    }

    /// History size, capped at [`DEFAULT_MAX_HISTORY`].
    pub fn max_history(&self) -> usize {
        self.max_history.min(DEFAULT_MAX_HISTORY)
    }

    /// Column count, never zero.
    pub fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// Delays and timeout for the injection pipeline.
    pub fn injection_timings(&self) -> InjectionTimings {
        InjectionTimings {
            hide_delay: Duration::from_millis(self.hide_delay_ms),
            type_timeout: Duration::from_millis(self.type_timeout_ms),
            reopen_delay: Duration::from_millis(self.reopen_delay_ms),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            typing_command: DEFAULT_TYPING_COMMAND.iter().map(|s| s.to_string()).collect(),
            keywords: default_keywords(),
            ..Self::default_const()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.window_width, 600.0);
        assert_eq!(config.window_height, 500.0);
        assert_eq!(config.columns, 10);
        assert_eq!(config.max_history, 10);
        assert_eq!(
            config.typing_command,
            vec!["xdotool", "type", "--clearmodifiers"]
        );
        assert!(!config.search_emoji_names);
        assert_eq!(config.keywords.len(), DEFAULT_KEYWORDS.len());
        assert!(config.keywords["classic"].contains(&"shrug".to_string()));
        assert!(config.emoticon_keywords.is_empty());
    }

    #[test]
    fn test_default_keywords_cover_every_category() {
        let config = AppConfig::default();
        for category in crate::catalog::categories() {
            assert!(
                config.keywords.contains_key(&category.name.to_lowercase()),
                "No default keywords for '{}'",
                category.name
            );
        }
    }

    #[test]
    fn test_max_history_is_capped() {
        let config = AppConfig {
            max_history: 50,
            ..AppConfig::default()
        };
        assert_eq!(config.max_history(), 10);

        let config = AppConfig {
            max_history: 3,
            ..AppConfig::default()
        };
        assert_eq!(config.max_history(), 3);
    }

    #[test]
    fn test_app_config_const_default() {
        let config = AppConfig::default_const();
        // Const default can't allocate the command
        assert!(config.typing_command.is_empty());
        assert_eq!(config.typing_command(), AppConfig::default().typing_command);
    }

    #[test]
    fn test_blank_typing_command_falls_back() {
        let config = AppConfig {
            typing_command: vec!["  ".to_string()],
            ..AppConfig::default()
        };
        assert_eq!(config.typing_command()[0], "xdotool");
    }

    #[test]
    fn test_columns_never_zero() {
        let config = AppConfig {
            columns: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.columns(), 1);
    }

    #[test]
    fn test_injection_timings() {
        let timings = AppConfig::default().injection_timings();
        assert_eq!(timings.hide_delay, Duration::from_millis(100));
        assert_eq!(timings.type_timeout, Duration::from_secs(1));
        assert_eq!(timings.reopen_delay, Duration::from_millis(200));
    }

    #[test]
    fn test_config_deserialization_partial() {
        let toml_str = r#"
            columns = 8
            typing_command = ["wtype"]
            search_emoji_names = true

            [keywords]
            Happy = ["joy", "smile"]

            [emoticon_keywords]
            "¯\\_(ツ)_/¯" = ["shrug"]
        "#;

        let config: AppConfig = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(config.columns, 8);
        assert_eq!(config.typing_command, vec!["wtype"]);
        assert!(config.search_emoji_names);
        // A keywords table replaces the shipped one
        assert_eq!(config.keywords.len(), 1);
        assert_eq!(config.keywords["Happy"], vec!["joy", "smile"]);
        assert_eq!(config.emoticon_keywords[r"¯\_(ツ)_/¯"], vec!["shrug"]);
        // Untouched keys keep their defaults
        assert_eq!(config.max_history, 10);
        assert_eq!(config.hide_delay_ms, 100);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            window_width: 800.0,
            ..AppConfig::default()
        };

        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        assert!(toml_str.contains("window_width = 800.0"));
        assert!(toml_str.contains("xdotool"));
    }
}
