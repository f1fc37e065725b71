//! Dialog components for TUI

mod base;
mod success_dialog;

pub use success_dialog::{overlay_area, render_success_dialog};
