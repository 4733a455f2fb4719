//! Startup helpers.
//!
//! Handles setting up logging and building the typing command from config.

use tracing::warn;

use crate::config::{AppConfig, DEFAULT_TYPING_COMMAND};
use crate::process::TypingCommand;

/// Initialize the tracing subscriber for logging.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // By default, only log from the smile crate at info level
    // Users can override with RUST_LOG environment variable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("smile=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Build the typing command described by the config.
///
/// A command whose program is blank falls back to xdotool.
pub fn typing_command(config: &AppConfig) -> TypingCommand {
    let timeout = config.injection_timings().type_timeout;

    match TypingCommand::from_parts(&config.typing_command()) {
        Ok(command) => command.timeout(timeout),
        Err(e) => {
            warn!(%e, "Invalid typing command, using xdotool");
            TypingCommand::new(DEFAULT_TYPING_COMMAND[0])
                .args(DEFAULT_TYPING_COMMAND[1..].iter().copied())
                .timeout(timeout)
        }
    }
}
