//! Action handlers for PickerView.
//!
//! Handles confirm, confirm-and-quit, quit, and cell clicks.

use gpui::{Context, Window};
use tracing::debug;

use crate::injection::AfterTyping;
use crate::ui::panels::emoticon_at;

use super::{Confirm, ConfirmAndQuit, PickerView, Quit};

impl PickerView {
    /// Type the selected emoticon and show the picker again.
    pub fn confirm(&mut self, _: &Confirm, _window: &mut Window, _cx: &mut Context<Self>) {
        if let Some(index) = self.selected {
            self.activate(index, AfterTyping::Reopen);
        }
    }

    /// Type the selected emoticon and quit.
    pub fn confirm_and_quit(
        &mut self,
        _: &ConfirmAndQuit,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        if let Some(index) = self.selected {
            self.activate(index, AfterTyping::Quit);
        }
    }

    /// Quit the application.
    pub fn quit(&mut self, _: &Quit, _window: &mut Window, _cx: &mut Context<Self>) {
        (self.on_quit)();
    }

    /// Hand the emoticon at `index` to the app, along with the filter text
    /// so the reopened picker can restore it.
    pub(crate) fn activate(&mut self, index: usize, after: AfterTyping) {
        let Some(emoticon) = emoticon_at(&self.panels, index) else {
            debug!(index, "No emoticon at selection");
            return;
        };

        (self.on_select)(emoticon.to_string(), self.query.clone(), after);
    }
}
