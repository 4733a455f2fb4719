//! Application shell for smile.
//!
//! Loads config and history, opens the picker window and runs the event
//! loop that types the chosen emoticons.

mod event_loop;
mod events;
mod init;
mod selection;
pub mod window;

pub use event_loop::PickerController;
pub use events::{AppEvent, AppEventReceiver, AppEventSender, create_event_channel};
pub use init::{init_logging, typing_command};
pub use selection::{PickerSurface, Selection, SelectionPipeline, Step};

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use gpui::{Application, QuitMode};
use gpui_component::theme::{Theme, ThemeMode};
use tracing::{error, info};

use crate::history::HistoryStore;
use crate::ui::init_picker;

/// Run the picker.
///
/// Initializes logging, config and history, then starts the GPUI
/// application. Returns once the application quits.
pub fn run() -> Result<()> {
    init::init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "Starting smile");

    // Initialize config from file (single source of truth)
    crate::config::init_config();
    let config = crate::config::config();

    let history = HistoryStore::open_default(config.max_history());
    let typist = init::typing_command(&config);
    let timings = config.injection_timings();

    let (event_tx, event_rx) = create_event_channel();

    // Startup failures inside the GPUI closure are reported after it returns
    let startup_error: Rc<RefCell<Option<anyhow::Error>>> = Rc::new(RefCell::new(None));
    let startup_error_slot = startup_error.clone();

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .with_quit_mode(QuitMode::Explicit)
        .run(move |cx| {
            gpui_component::init(cx);
            init_picker(cx);
            Theme::change(ThemeMode::Dark, None, cx);

            let mut controller =
                PickerController::new(history, Box::new(typist), timings, event_tx);

            if let Err(e) = controller.open(String::new(), cx) {
                error!(%e, "Failed to create window");
                *startup_error_slot.borrow_mut() = Some(e);
                cx.quit();
                return;
            }

            // Main event loop (runs on GPUI executor)
            cx.spawn(async move |cx: &mut gpui::AsyncApp| {
                event_loop::run_event_loop(event_rx, controller, cx).await;
            })
            .detach();
        });

    match startup_error.take() {
        Some(e) => Err(e.context("Failed to open the picker window")),
        None => Ok(()),
    }
}
