//! The hide/type/reopen sequence for one selection.
//!
//! [`SelectionPipeline`] walks the injection phases one step at a time and
//! tells the caller how long to wait before the next step. Windows are
//! reached through [`PickerSurface`], so the pipeline itself has no GPUI
//! dependency.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::history::HistoryStore;
use crate::injection::{AfterTyping, InjectionPhase, InjectionTimings};
use crate::process::Typist;

/// Window operations needed by the sequence.
pub trait PickerSurface {
    /// Close the picker window if it is open.
    fn hide(&mut self);

    /// Open the picker showing `history`, with `filter` in the search input.
    fn show(&mut self, history: &[String], filter: String) -> anyhow::Result<()>;
}

/// An emoticon chosen in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub emoticon: String,
    /// Filter text restored when the picker reopens.
    pub filter: String,
    pub after: AfterTyping,
}

/// What the caller does after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Wait out the delay, if any, then step again.
    Continue(Option<Duration>),
    /// The sequence is over. `true` keeps the picker running.
    Done(bool),
}

/// Runs selections through `Idle → Hiding → Typing → Reopening → Idle`.
pub struct SelectionPipeline {
    phase: InjectionPhase,
    history: HistoryStore,
    typist: Box<dyn Typist>,
    timings: InjectionTimings,
}

impl SelectionPipeline {
    pub fn new(history: HistoryStore, typist: Box<dyn Typist>, timings: InjectionTimings) -> Self {
        Self {
            phase: InjectionPhase::Idle,
            history,
            typist,
            timings,
        }
    }

    /// Recently used emoticons, most recent first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Enter the next phase and do its work.
    ///
    /// History is recorded before the window hides, so it is saved even
    /// when typing fails. A typing failure is logged and the picker still
    /// reopens, unless the selection asked to quit.
    pub fn step(&mut self, selection: &Selection, surface: &mut impl PickerSurface) -> Step {
        let next = self.phase.next();
        debug!(from = ?self.phase, to = ?next, "Injection phase");
        self.phase = next;

        match next {
            InjectionPhase::Hiding => {
                self.history.record(&selection.emoticon);
                surface.hide();
            }
            InjectionPhase::Typing => {
                let emoticon = selection.emoticon.as_str();
                match self.typist.type_text(emoticon) {
                    Ok(()) => info!(emoticon, "Typed emoticon"),
                    Err(e) => warn!(%e, emoticon, "Failed to type emoticon"),
                }

                if selection.after == AfterTyping::Quit {
                    self.phase = InjectionPhase::Idle;
                    return Step::Done(false);
                }
            }
            InjectionPhase::Reopening => {
                let reopened = surface.show(self.history.entries(), selection.filter.clone());
                if let Err(e) = reopened {
                    error!(%e, "Failed to reopen window");
                    self.phase = InjectionPhase::Idle;
                    return Step::Done(false);
                }
            }
            InjectionPhase::Idle => return Step::Done(true),
        }

        Step::Continue(self.timings.delay_before(self.phase.next()))
    }
}
