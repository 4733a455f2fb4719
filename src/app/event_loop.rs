//! Event handling for the picker.
//!
//! Processes AppEvent messages from the picker window. Each selection runs
//! the full hide/type/reopen sequence before the next event is read, so
//! selections made in quick succession are typed one after another.

use gpui::App;
use tracing::info;

use crate::app::selection::{PickerSurface, Selection, SelectionPipeline, Step};
use crate::app::window::{self, PickerWindow};
use crate::app::{AppEvent, AppEventReceiver, AppEventSender};
use crate::history::HistoryStore;
use crate::injection::InjectionTimings;
use crate::process::Typist;

/// The real picker window, opened and closed through GPUI.
struct WindowSurface<'a> {
    window: &'a mut Option<PickerWindow>,
    event_tx: &'a AppEventSender,
    cx: &'a mut App,
}

impl PickerSurface for WindowSurface<'_> {
    fn hide(&mut self) {
        if let Some(pw) = self.window.take() {
            window::close_window(&pw.handle, self.cx);
        }
    }

    fn show(&mut self, history: &[String], filter: String) -> anyhow::Result<()> {
        let picker_window =
            window::open_picker_window(history.to_vec(), filter, self.event_tx.clone(), self.cx)?;
        *self.window = Some(picker_window);
        Ok(())
    }
}

/// State owned by the event loop.
pub struct PickerController {
    /// The picker window, if open.
    pub picker_window: Option<PickerWindow>,
    pipeline: SelectionPipeline,
    event_tx: AppEventSender,
}

impl PickerController {
    pub fn new(
        history: HistoryStore,
        typist: Box<dyn Typist>,
        timings: InjectionTimings,
        event_tx: AppEventSender,
    ) -> Self {
        Self {
            picker_window: None,
            pipeline: SelectionPipeline::new(history, typist, timings),
            event_tx,
        }
    }

    /// Open the picker window with the current history.
    pub fn open(&mut self, filter: String, cx: &mut App) -> anyhow::Result<()> {
        let mut surface = WindowSurface {
            window: &mut self.picker_window,
            event_tx: &self.event_tx,
            cx,
        };
        surface.show(self.pipeline.history(), filter)
    }

    /// Close the window if it exists.
    pub fn close(&mut self, cx: &mut App) {
        WindowSurface {
            window: &mut self.picker_window,
            event_tx: &self.event_tx,
            cx,
        }
        .hide();
    }

    /// Run one selection through hide, type and reopen.
    ///
    /// Returns `false` when the application should quit.
    async fn handle_select(&mut self, selection: Selection, cx: &mut gpui::AsyncApp) -> bool {
        loop {
            let step = cx.update(|cx| {
                let mut surface = WindowSurface {
                    window: &mut self.picker_window,
                    event_tx: &self.event_tx,
                    cx,
                };
                self.pipeline.step(&selection, &mut surface)
            });

            match step {
                Ok(Step::Continue(Some(delay))) => {
                    let executor = cx.background_executor().clone();
                    executor.timer(delay).await;
                }
                Ok(Step::Continue(None)) => {}
                Ok(Step::Done(keep_running)) => return keep_running,
                // Application is shutting down
                Err(_) => return false,
            }
        }
    }
}

/// Run the main event loop, processing AppEvents.
///
/// This function is spawned as an async task within the GPUI application.
pub async fn run_event_loop(
    event_rx: AppEventReceiver,
    mut controller: PickerController,
    cx: &mut gpui::AsyncApp,
) {
    while let Ok(event) = event_rx.recv_async().await {
        let keep_running = match event {
            AppEvent::Select {
                emoticon,
                filter,
                after,
            } => {
                let selection = Selection {
                    emoticon,
                    filter,
                    after,
                };
                controller.handle_select(selection, cx).await
            }
            AppEvent::Quit => false,
        };

        if !keep_running {
            info!("Quitting");
            let _ = cx.update(|cx| {
                controller.close(cx);
                cx.quit();
            });
            return;
        }
    }
}
