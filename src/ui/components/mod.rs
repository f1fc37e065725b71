//! Reusable UI components

mod button;
mod dialog;
mod toast;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::{overlay_area, render_success_dialog};
pub use toast::{render_toasts, toast_close_at};
