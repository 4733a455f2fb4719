//! Domain-specific error types for smile.
//!
//! None of these errors reach the user interface. Callers log them and carry
//! on with a degraded result (empty history, emoticon not typed, default
//! config).

use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// History persistence errors.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// The history directory could not be created.
    #[error("Failed to create history directory: {0}")]
    CreateDirFailed(#[source] std::io::Error),

    /// Failed to read the history file.
    #[error("Failed to read history file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// The history file is not a JSON array of strings.
    #[error("Failed to parse history file: {0}")]
    ParseFailed(#[source] serde_json::Error),

    /// Failed to serialize the history list.
    #[error("Failed to serialize history: {0}")]
    SerializeFailed(#[source] serde_json::Error),

    /// Failed to write the history file.
    #[error("Failed to write history file: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Keystroke injection errors.
#[derive(Error, Debug)]
pub enum InjectionError {
    /// The configured typing command has no program.
    #[error("Empty typing command")]
    EmptyCommand,

    /// The typing tool could not be started (usually not on PATH).
    #[error("Failed to spawn typing tool '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The typing tool exited with a failure status.
    #[error("Typing tool '{program}' exited with {status}")]
    NonZeroExit { program: String, status: ExitStatus },

    /// The typing tool did not finish in time and was killed.
    #[error("Typing tool '{program}' timed out after {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    /// Waiting on the typing tool failed.
    #[error("Failed to wait for typing tool: {0}")]
    WaitFailed(#[source] std::io::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),
}
