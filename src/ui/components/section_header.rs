use crate::ui::theme::theme;
use gpui::{Div, SharedString, div, prelude::*};

/// A section header component shown above each emoticon grid.
///
/// # Example
/// ```ignore
/// SectionHeader::new("Recently Used")
///     .with_count(3)
///     .render()
/// ```
pub struct SectionHeader {
    title: SharedString,
    count: Option<usize>,
}

impl SectionHeader {
    /// Create a new section header
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            count: None,
        }
    }

    /// Set the match count to display
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    fn label(&self) -> String {
        match self.count {
            Some(count) => format!("{} ({})", self.title, count),
            None => self.title.to_string(),
        }
    }

    /// Render the section header
    pub fn render(self) -> Div {
        let theme = theme();

        div()
            .w_full()
            .pt(theme.panel_gap)
            .pb(theme.section_header.padding_y)
            .flex()
            .flex_row()
            .items_center()
            .child(
                div()
                    .text_xs()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(theme.section_header.color)
                    .child(SharedString::from(self.label().to_uppercase())),
            )
    }
}
