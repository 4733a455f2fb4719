use crate::app::{AppEvent, AppEventSender};
use crate::config::config;
use crate::injection::AfterTyping;
use crate::ui::PickerView;
use gpui::{
    App, AppContext, Bounds, TitlebarOptions, WindowBounds, WindowHandle, WindowKind,
    WindowOptions, px, size,
};
use gpui_component::Root;

/// Window title shown by the window manager.
pub const WINDOW_TITLE: &str = "Smile - Emoticon Picker";

/// Handle to an open picker window.
pub struct PickerWindow {
    pub handle: WindowHandle<Root>,
}

/// Open the picker centered on screen, showing `history` and with `filter`
/// already typed into the search input.
pub fn open_picker_window(
    history: Vec<String>,
    filter: String,
    event_tx: AppEventSender,
    cx: &mut App,
) -> anyhow::Result<PickerWindow> {
    let config = config();
    let window_size = size(px(config.window_width), px(config.window_height));

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            window_size,
            cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        focus: true,
        show: true,
        // Keeps the picker above other windows
        kind: WindowKind::PopUp,
        is_resizable: false,
        app_id: Some(crate::config::APP_NAME.to_string()),
        ..Default::default()
    };

    let window_handle = cx.open_window(options, |window, cx| {
        let select_tx = event_tx.clone();
        let on_select = move |emoticon: String, filter: String, after: AfterTyping| {
            let _ = select_tx.send(AppEvent::Select {
                emoticon,
                filter,
                after,
            });
        };
        let on_quit = move || {
            let _ = event_tx.send(AppEvent::Quit);
        };
        let view = cx.new(|cx| PickerView::new(history, filter, on_select, on_quit, window, cx));

        // Auto-focus the search input
        view.update(cx, |picker: &mut PickerView, cx| {
            picker.focus(window, cx);
        });

        cx.new(|cx| Root::new(view, window, cx))
    })?;

    window_handle.update(cx, |_root, window, _cx| {
        window.activate_window();
    })?;

    Ok(PickerWindow {
        handle: window_handle,
    })
}

/// Close the window. The app keeps running; it quits explicitly.
pub fn close_window(handle: &WindowHandle<Root>, cx: &mut App) {
    let _ = handle.update(cx, |_root, window, _cx| {
        window.remove_window();
    });
}
