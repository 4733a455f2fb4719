//! Picker view - the main UI component of smile.
//!
//! [`PickerView`] renders the search input above the history panel and the
//! filtered catalog, and turns clicks and key presses into selections.
//!
//! # Key Bindings
//!
//! - `Left/Right`, `Tab/Shift+Tab` - Previous/next cell
//! - `Up/Down` - Move by one grid row, across panels
//! - `Enter` - Type the selected emoticon, then show the picker again
//! - `Shift+Enter` - Type the selected emoticon, then quit
//! - `Escape` - Quit

mod actions;
mod navigation;
mod render;

use std::collections::BTreeMap;
use std::sync::Arc;

use gpui::{
    App, AppContext, Context, Entity, FocusHandle, Focusable, KeyBinding, ScrollHandle, Window,
    actions,
};
use gpui_component::input::{InputEvent, InputState};

use crate::catalog;
use crate::config::AppConfig;
use crate::injection::AfterTyping;
use crate::search::CatalogFilter;
use crate::ui::panels::{Panel, build_panels};

actions!(
    picker,
    [
        SelectNext,
        SelectPrev,
        SelectUp,
        SelectDown,
        Confirm,
        ConfirmAndQuit,
        Quit
    ]
);

/// Register key bindings for the picker.
pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("left", SelectPrev, Some("PickerView")),
        KeyBinding::new("right", SelectNext, Some("PickerView")),
        KeyBinding::new("shift-tab", SelectPrev, Some("PickerView")),
        KeyBinding::new("tab", SelectNext, Some("PickerView")),
        KeyBinding::new("up", SelectUp, Some("PickerView")),
        KeyBinding::new("down", SelectDown, Some("PickerView")),
        KeyBinding::new("enter", Confirm, Some("PickerView")),
        KeyBinding::new("shift-enter", ConfirmAndQuit, Some("PickerView")),
        KeyBinding::new("escape", Quit, Some("PickerView")),
    ]);
}

/// Callback fired when an emoticon is chosen: `(emoticon, filter text, after)`.
pub type SelectCallback = Arc<dyn Fn(String, String, AfterTyping) + Send + Sync>;

/// Callback fired when the user asks to quit.
pub type QuitCallback = Arc<dyn Fn() + Send + Sync>;

/// Matching options taken from the config when the view is created.
#[derive(Clone, Default)]
pub(crate) struct FilterOptions {
    pub keywords: BTreeMap<String, Vec<String>>,
    pub emoticon_keywords: BTreeMap<String, Vec<String>>,
    pub emoji_names: bool,
}

impl From<&AppConfig> for FilterOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            keywords: config.keywords.clone(),
            emoticon_keywords: config.emoticon_keywords.clone(),
            emoji_names: config.search_emoji_names,
        }
    }
}

/// The emoticon picker view.
pub struct PickerView {
    /// Current filter text, as typed
    pub(crate) query: String,
    /// Recently used emoticons, most recent first
    pub(crate) history: Vec<String>,
    /// Panels for the current query and history
    pub(crate) panels: Vec<Panel>,
    /// Flat index of the selected cell
    pub(crate) selected: Option<usize>,
    /// Cells per grid row
    pub(crate) columns: usize,
    pub(crate) filter_options: FilterOptions,
    /// Input state
    pub(crate) input_state: Entity<InputState>,
    /// Scroll state of the grid area
    pub(crate) scroll_handle: ScrollHandle,
    /// Focus handle
    pub(crate) focus_handle: FocusHandle,
    pub(crate) on_select: SelectCallback,
    pub(crate) on_quit: QuitCallback,
}

impl PickerView {
    /// Create a picker showing `history`, with `query` restored into the
    /// search input.
    pub fn new(
        history: Vec<String>,
        query: String,
        on_select: impl Fn(String, String, AfterTyping) + Send + Sync + 'static,
        on_quit: impl Fn() + Send + Sync + 'static,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let config = crate::config::config();

        let input_state = cx.new(|cx| {
            let mut input = InputState::new(window, cx).placeholder("Search emoticons...");
            input.set_value(query.clone(), window, cx);
            input
        });

        // Subscribe to input changes
        cx.subscribe(
            &input_state,
            |this, input: Entity<InputState>, event: &InputEvent, cx: &mut Context<Self>| {
                if let InputEvent::Change = event {
                    let text = input.read(cx).value().to_string();
                    this.set_query(text);
                    cx.notify();
                }
            },
        )
        .detach();

        // Closing the window from the window manager quits like Escape does
        let on_quit: QuitCallback = Arc::new(on_quit);
        let on_quit_for_close = on_quit.clone();
        window.on_window_should_close(cx, move |_window, _cx| {
            on_quit_for_close();
            true
        });

        let mut picker = Self {
            query: String::new(),
            history,
            panels: Vec::new(),
            selected: None,
            columns: config.columns(),
            filter_options: FilterOptions::from(&config),
            input_state,
            scroll_handle: ScrollHandle::new(),
            focus_handle: cx.focus_handle(),
            on_select: Arc::new(on_select),
            on_quit,
        };
        picker.set_query(query);
        picker
    }

    /// Replace the filter text, rebuild the panels and reset the selection
    /// to the first cell.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.rebuild_panels();
        self.selected = (!self.panels.is_empty()).then_some(0);
        self.scroll_handle.scroll_to_item(0);
    }

    fn rebuild_panels(&mut self) {
        let options = &self.filter_options;
        let filter = CatalogFilter::new(&self.query)
            .with_keywords(&options.keywords)
            .with_emoticon_keywords(&options.emoticon_keywords)
            .with_emoji_names(options.emoji_names);
        self.panels = build_panels(&self.history, &filter, catalog::categories());
    }

    /// Focus the search input.
    pub fn focus(&self, window: &mut Window, cx: &mut Context<Self>) {
        self.input_state.update(cx, |input: &mut InputState, cx| {
            input.focus(window, cx);
        });
    }
}

impl Focusable for PickerView {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
