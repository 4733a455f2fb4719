//! Rendering implementation for PickerView.

use gpui::{AnyElement, ClickEvent, Context, Window, div, prelude::*};
use gpui_component::input::Input;
use gpui_component::{ActiveTheme, Icon, IconName};

use crate::injection::AfterTyping;
use crate::search::show_history;
use crate::ui::components::SectionHeader;
use crate::ui::panels::EMPTY_STATE_TEXT;
use crate::ui::theme::theme;
use crate::ui::views::{render_emoticon_cell, render_empty_state, render_grid_row};

use super::PickerView;

impl gpui::Render for PickerView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = theme();

        let content = if self.panels.is_empty() {
            render_empty_state(EMPTY_STATE_TEXT).into_any_element()
        } else {
            self.render_grids(cx)
        };

        div()
            .track_focus(&self.focus_handle)
            .key_context("PickerView")
            .on_action(cx.listener(Self::select_next))
            .on_action(cx.listener(Self::select_prev))
            .on_action(cx.listener(Self::select_up))
            .on_action(cx.listener(Self::select_down))
            .on_action(cx.listener(Self::confirm))
            .on_action(cx.listener(Self::confirm_and_quit))
            .on_action(cx.listener(Self::quit))
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.window_background)
            // Input section
            .child(
                div()
                    .w_full()
                    .px_2()
                    .py_3()
                    .border_b_1()
                    .border_color(cx.theme().border)
                    .child(
                        Input::new(&self.input_state)
                            .appearance(false)
                            .cleanable(true)
                            .prefix(
                                Icon::new(IconName::Search)
                                    .text_color(cx.theme().muted_foreground)
                                    .mr_2(),
                            ),
                    ),
            )
            .child(content)
    }
}

impl PickerView {
    /// Render all panels as one flat list of headers and rows, so a row can
    /// be scrolled into view by its child index.
    fn render_grids(&self, cx: &mut Context<Self>) -> AnyElement {
        let theme = theme();
        let columns = self.columns;
        let filtering = !show_history(&self.query);

        let mut grid = div()
            .id("emoticon-grid")
            .flex_1()
            .w_full()
            .px(theme.window_padding)
            .pb(theme.window_padding)
            .overflow_y_scroll()
            .track_scroll(&self.scroll_handle);

        let mut index = 0;
        for panel in &self.panels {
            let header = if filtering {
                SectionHeader::new(panel.title).with_count(panel.len())
            } else {
                SectionHeader::new(panel.title)
            };
            grid = grid.child(header.render());

            for chunk in panel.emoticons.chunks(columns) {
                let cells = chunk
                    .iter()
                    .map(|emoticon| {
                        let cell_index = index;
                        index += 1;
                        render_emoticon_cell(emoticon, self.selected == Some(cell_index), cell_index)
                            .on_click(cx.listener(
                                move |this, _: &ClickEvent, _window, _cx| {
                                    this.activate(cell_index, AfterTyping::Reopen);
                                },
                            ))
                    })
                    .collect();
                grid = grid.child(render_grid_row(cells, columns));
            }
        }

        grid.into_any_element()
    }
}
