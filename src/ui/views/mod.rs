//! Rendering helpers for the picker, kept apart from the view's state and
//! action handling.

mod grid_rendering;

pub use grid_rendering::{render_emoticon_cell, render_empty_state, render_grid_row};
