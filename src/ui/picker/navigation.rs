//! Selection movement for PickerView.

use gpui::{Context, Window};

use crate::ui::grid::GridNavigator;
use crate::ui::panels::panel_lengths;

use super::{PickerView, SelectDown, SelectNext, SelectPrev, SelectUp};

impl PickerView {
    /// Move the selection to the next cell.
    pub fn select_next(&mut self, _: &SelectNext, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_selection(|nav, index| nav.next(index), cx);
    }

    /// Move the selection to the previous cell.
    pub fn select_prev(&mut self, _: &SelectPrev, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_selection(|nav, index| nav.prev(index), cx);
    }

    /// Move the selection one row up.
    pub fn select_up(&mut self, _: &SelectUp, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_selection(|nav, index| nav.up(index), cx);
    }

    /// Move the selection one row down.
    pub fn select_down(&mut self, _: &SelectDown, _window: &mut Window, cx: &mut Context<Self>) {
        self.move_selection(|nav, index| nav.down(index), cx);
    }

    fn move_selection(
        &mut self,
        step: impl Fn(&GridNavigator, usize) -> Option<usize>,
        cx: &mut Context<Self>,
    ) {
        let lengths = panel_lengths(&self.panels);
        let navigator = GridNavigator::new(&lengths, self.columns);

        let Some(target) = step(&navigator, self.selected.unwrap_or(0)) else {
            return;
        };

        self.selected = Some(target);
        if let Some(child) = navigator.child_index(target) {
            self.scroll_handle.scroll_to_item(child);
        }
        cx.notify();
    }
}
