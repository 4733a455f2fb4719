//! Event types for the picker event loop.

use crate::injection::AfterTyping;

/// Events the picker window sends to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// An emoticon was chosen.
    Select {
        emoticon: String,
        /// Filter text at the time of the selection, restored on reopen.
        filter: String,
        after: AfterTyping,
    },

    /// Quit the application.
    Quit,
}

/// Async sender for app events.
pub type AppEventSender = flume::Sender<AppEvent>;

/// Async receiver for app events.
pub type AppEventReceiver = flume::Receiver<AppEvent>;

/// Create an unbounded async channel for app events.
pub fn create_event_channel() -> (AppEventSender, AppEventReceiver) {
    flume::unbounded()
}
