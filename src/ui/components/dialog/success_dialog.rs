//! Success overlay: a modal dialog over a dimmed form

use super::base::{dialog_area, render_dialog, DialogConfig};
use crate::state::SuccessOverlay;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};
use std::time::Instant;

const MAX_WIDTH: u16 = 56;

fn overlay_config(overlay: &SuccessOverlay, now: Instant) -> DialogConfig<'_> {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to close"),
    ];

    DialogConfig {
        title: &overlay.title,
        title_color: Color::Green,
        border_color: Color::Green,
        message: &overlay.message,
        hint: Some(hint),
        max_width: MAX_WIDTH,
        scale: overlay.scale(now),
    }
}

/// Area the overlay occupies at `now`; clicks outside it dismiss the overlay
pub fn overlay_area(area: Rect, overlay: &SuccessOverlay, now: Instant) -> Rect {
    dialog_area(area, &overlay_config(overlay, now))
}

/// Dim everything already drawn, then draw the overlay on top
pub fn render_success_dialog(frame: &mut Frame, overlay: &SuccessOverlay, now: Instant) {
    let area = frame.area();
    frame.buffer_mut().set_style(
        area,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
    render_dialog(frame, overlay_config(overlay, now));
}
