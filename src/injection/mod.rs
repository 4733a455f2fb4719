//! Injection pipeline phases.
//!
//! Selecting an emoticon walks the picker through
//! `Idle → Hiding → Typing → Reopening → Idle`. The window must be gone
//! before typing starts so the keystrokes land in the previously focused
//! application; the delays give the window manager time to move focus.

use std::time::Duration;

/// Phase of the hide/type/reopen sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InjectionPhase {
    /// Window visible, waiting for a selection.
    #[default]
    Idle,
    /// History recorded, window being closed.
    Hiding,
    /// Typing tool running.
    Typing,
    /// Window being opened again.
    Reopening,
}

impl InjectionPhase {
    /// The phase that follows this one.
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::Hiding,
            Self::Hiding => Self::Typing,
            Self::Typing => Self::Reopening,
            Self::Reopening => Self::Idle,
        }
    }
}

/// Delays and timeout used by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InjectionTimings {
    /// Wait after hiding, before typing.
    pub hide_delay: Duration,
    /// Maximum time the typing tool may run.
    pub type_timeout: Duration,
    /// Wait after typing, before reopening.
    pub reopen_delay: Duration,
}

impl Default for InjectionTimings {
    fn default() -> Self {
        Self {
            hide_delay: Duration::from_millis(100),
            type_timeout: Duration::from_secs(1),
            reopen_delay: Duration::from_millis(200),
        }
    }
}

impl InjectionTimings {
    /// Delay to wait before entering `phase`, if any.
    pub fn delay_before(&self, phase: InjectionPhase) -> Option<Duration> {
        match phase {
            InjectionPhase::Typing => Some(self.hide_delay),
            InjectionPhase::Reopening => Some(self.reopen_delay),
            InjectionPhase::Idle | InjectionPhase::Hiding => None,
        }
    }
}

/// What happens after the emoticon has been typed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AfterTyping {
    /// Show the picker again (mouse click, Enter).
    #[default]
    Reopen,
    /// Quit the application (Shift+Enter).
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_returns_to_idle() {
        let mut phase = InjectionPhase::default();
        let mut seen = vec![phase];
        for _ in 0..4 {
            phase = phase.next();
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                InjectionPhase::Idle,
                InjectionPhase::Hiding,
                InjectionPhase::Typing,
                InjectionPhase::Reopening,
                InjectionPhase::Idle,
            ]
        );
    }

    #[test]
    fn test_delays_before_phases() {
        let timings = InjectionTimings::default();
        assert_eq!(timings.delay_before(InjectionPhase::Hiding), None);
        assert_eq!(
            timings.delay_before(InjectionPhase::Typing),
            Some(Duration::from_millis(100))
        );
        assert_eq!(
            timings.delay_before(InjectionPhase::Reopening),
            Some(Duration::from_millis(200))
        );
        assert_eq!(timings.delay_before(InjectionPhase::Idle), None);
    }

    #[test]
    fn test_default_after_typing_reopens() {
        assert_eq!(AfterTyping::default(), AfterTyping::Reopen);
    }
}
