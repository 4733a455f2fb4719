use gpui::{Hsla, Pixels, hsla, px};

/// Centralized theme configuration for the picker UI.
/// All colors, sizes, and spacing are defined here for consistency.
#[derive(Clone)]
pub struct PickerTheme {
    // Window
    pub window_background: Hsla,
    pub window_padding: Pixels,

    // Grid cells
    pub cell_size: Pixels,
    pub cell_gap: Pixels,
    pub cell_border_radius: Pixels,
    pub cell_font_size: Pixels,
    pub cell_font_size_long: Pixels,
    pub cell_background: Hsla,
    pub cell_background_hover: Hsla,
    pub cell_background_selected: Hsla,
    pub cell_text_color: Hsla,

    // Space above each panel
    pub panel_gap: Pixels,

    // Section headers
    pub section_header: SectionHeaderTheme,

    // Empty state
    pub empty_state_height: Pixels,
    pub empty_state_color: Hsla,
}

/// Section header styling.
#[derive(Clone)]
pub struct SectionHeaderTheme {
    pub color: Hsla,
    pub padding_y: Pixels,
}

impl Default for PickerTheme {
    fn default() -> Self {
        Self {
            window_background: hsla(0.0, 0.0, 0.08, 1.0),
            window_padding: px(10.0),

            cell_size: px(48.0),
            cell_gap: px(4.0),
            cell_border_radius: px(6.0),
            cell_font_size: px(20.0),
            cell_font_size_long: px(11.0),
            cell_background: hsla(0.0, 0.0, 1.0, 0.04), // ~4% white
            cell_background_hover: hsla(0.0, 0.0, 1.0, 0.1),
            cell_background_selected: hsla(0.58, 0.6, 0.5, 0.45),
            cell_text_color: hsla(0.0, 0.0, 1.0, 0.9), // 90% white

            panel_gap: px(8.0),

            section_header: SectionHeaderTheme {
                color: hsla(0.0, 0.0, 1.0, 0.4), // 40% white
                padding_y: px(4.0),
            },

            empty_state_height: px(200.0),
            empty_state_color: hsla(0.0, 0.0, 1.0, 0.25), // 25% white
        }
    }
}

/// Glyph count above which a cell uses the smaller font.
const LONG_EMOTICON_CHARS: usize = 3;

/// Whether `emoticon` is long text that may not fit a cell. Emoji sequences
/// count as one glyph.
pub fn is_long_emoticon(emoticon: &str) -> bool {
    emojis::get(emoticon).is_none() && emoticon.chars().count() > LONG_EMOTICON_CHARS
}

impl PickerTheme {
    /// Font size for a cell label; long text emoticons get a smaller font.
    pub fn font_size_for(&self, emoticon: &str) -> Pixels {
        if is_long_emoticon(emoticon) {
            self.cell_font_size_long
        } else {
            self.cell_font_size
        }
    }
}

static THEME: std::sync::OnceLock<PickerTheme> = std::sync::OnceLock::new();

/// Get the global picker theme.
pub fn theme() -> &'static PickerTheme {
    THEME.get_or_init(PickerTheme::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_long_emoticon() {
        assert!(is_long_emoticon("(╯°□°）╯︵ ┻━┻"));
        assert!(is_long_emoticon("(づ｡◕‿‿◕｡)づ"));
        assert!(!is_long_emoticon(":-)"));
        assert!(!is_long_emoticon("<3"));
        // ZWJ sequence, many chars but one glyph
        assert!(!is_long_emoticon("👨‍👩‍👧"));
    }

    #[test]
    fn test_font_size_for_glyphs() {
        let theme = PickerTheme::default();
        assert_eq!(theme.font_size_for("😀"), theme.cell_font_size);
        assert_eq!(theme.font_size_for(":-)"), theme.cell_font_size);
        assert_eq!(theme.font_size_for("❤️"), theme.cell_font_size);
    }

    #[test]
    fn test_font_size_for_long_emoticons() {
        let theme = PickerTheme::default();
        assert_eq!(theme.font_size_for(r"¯\_(ツ)_/¯"), theme.cell_font_size_long);
        assert_eq!(theme.font_size_for("(ಠ_ಠ)"), theme.cell_font_size_long);
    }
}
