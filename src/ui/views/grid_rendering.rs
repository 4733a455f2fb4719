//! Rendering functions for the emoticon grids.

use crate::ui::theme::{is_long_emoticon, theme};
use gpui::{Div, ElementId, SharedString, Stateful, div, prelude::*, px};
use gpui_component::tooltip::Tooltip;

/// Render a single emoticon cell. Click handling is attached by the caller.
///
/// Long text emoticons can be clipped by the cell, so they carry a tooltip
/// with the full text.
pub fn render_emoticon_cell(emoticon: &str, selected: bool, index: usize) -> Stateful<Div> {
    let theme = theme();

    let bg = if selected {
        theme.cell_background_selected
    } else {
        theme.cell_background
    };

    let label = SharedString::from(emoticon.to_string());

    let cell = div()
        .id(ElementId::NamedInteger("emoticon-cell".into(), index as u64))
        .flex_1()
        .min_w(px(0.0))
        .h(theme.cell_size)
        .flex()
        .items_center()
        .justify_center()
        .overflow_hidden()
        .cursor_pointer()
        .bg(bg)
        .hover(|style| style.bg(theme.cell_background_hover))
        .rounded(theme.cell_border_radius)
        .child(
            div()
                .text_size(theme.font_size_for(emoticon))
                .text_color(theme.cell_text_color)
                .whitespace_nowrap()
                .child(label.clone()),
        );

    if is_long_emoticon(emoticon) {
        cell.tooltip(move |window, cx| Tooltip::new(label.clone()).build(window, cx))
    } else {
        cell
    }
}

/// Lay out already rendered cells as one grid row, padding short rows so
/// every cell keeps the same width.
pub fn render_grid_row(cells: Vec<Stateful<Div>>, columns: usize) -> Div {
    let theme = theme();
    let remaining = columns.saturating_sub(cells.len());

    let mut row = div()
        .w_full()
        .flex()
        .flex_row()
        .gap(theme.cell_gap)
        .mb(theme.cell_gap);

    for cell in cells {
        row = row.child(cell);
    }

    for _ in 0..remaining {
        row = row.child(div().flex_1().min_w(px(0.0)).h(theme.cell_size));
    }

    row
}

/// Render the placeholder shown when the filter matches nothing.
pub fn render_empty_state(text: &str) -> Div {
    let theme = theme();

    div()
        .w_full()
        .h(theme.empty_state_height)
        .flex()
        .items_center()
        .justify_center()
        .text_color(theme.empty_state_color)
        .child(SharedString::from(text.to_string()))
}
