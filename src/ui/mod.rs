pub mod components;
pub mod grid;
pub mod panels;
pub mod picker;
pub mod theme;
pub mod views;

// Re-export main types for convenience
pub use picker::{PickerView, init, init as init_picker};
pub use theme::{PickerTheme, theme};
