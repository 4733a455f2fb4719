//! Keystroke synthesis through an external typing tool.
//!
//! The picker never types on its own. It runs a tool such as
//! `xdotool type --clearmodifiers <text>` and waits for it, bounded by a
//! timeout. The call blocks the caller; keep the timeout short.

use crate::error::InjectionError;
use std::ffi::OsString;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Poll interval while waiting for the typing tool.
const WAIT_POLL: Duration = Duration::from_millis(10);

/// Anything that can type text into the focused application.
pub trait Typist {
    /// Type `text`, returning once the keystrokes have been sent.
    fn type_text(&self, text: &str) -> Result<(), InjectionError>;
}

/// Builder for the typing tool invocation.
///
/// # Example
/// ```ignore
/// use smile::process::{TypingCommand, Typist};
///
/// TypingCommand::new("xdotool")
///     .args(["type", "--clearmodifiers"])
///     .timeout(Duration::from_secs(1))
///     .type_text(":-)")?;
/// ```
#[derive(Debug, Clone)]
pub struct TypingCommand {
    program: OsString,
    args: Vec<OsString>,
    timeout: Duration,
}

impl TypingCommand {
    /// Create a typing command for the given program.
    pub fn new<S: Into<OsString>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: Duration::from_secs(1),
        }
    }

    /// Build from a configured command line (program first).
    pub fn from_parts(parts: &[String]) -> Result<Self, InjectionError> {
        let (program, args) = parts.split_first().ok_or(InjectionError::EmptyCommand)?;
        if program.trim().is_empty() {
            return Err(InjectionError::EmptyCommand);
        }
        Ok(Self::new(program).args(args))
    }

    /// Add leading arguments; the text is always appended last.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set how long the tool may run before it is killed.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    fn spawn(&self, text: &str) -> Result<Child, InjectionError> {
        Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| InjectionError::SpawnFailed {
                program: self.program_name(),
                source,
            })
    }

    /// Wait for the child, killing it once the timeout passes.
    fn wait(&self, child: &mut Child) -> Result<ExitStatus, InjectionError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait().map_err(InjectionError::WaitFailed)? {
                return Ok(status);
            }

            if Instant::now() >= deadline {
                if let Err(e) = child.kill() {
                    tracing::debug!(%e, "Failed to kill typing tool");
                }
                // Reap so the child doesn't linger as a zombie
                let _ = child.wait();
                return Err(InjectionError::Timeout {
                    program: self.program_name(),
                    timeout: self.timeout,
                });
            }

            thread::sleep(WAIT_POLL);
        }
    }
}

impl Typist for TypingCommand {
    fn type_text(&self, text: &str) -> Result<(), InjectionError> {
        let mut child = self.spawn(text)?;
        let status = self.wait(&mut child)?;

        if status.success() {
            tracing::debug!(program = %self.program_name(), "Typed emoticon");
            Ok(())
        } else {
            Err(InjectionError::NonZeroExit {
                program: self.program_name(),
                status,
            })
        }
    }
}
