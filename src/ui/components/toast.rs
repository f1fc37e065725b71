//! Toast notifications stacked in the top-right corner

use crate::state::{Toast, ToastId, ToastKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

pub const TOAST_WIDTH: u16 = 44;
/// Border + title + two message lines + border
pub const TOAST_HEIGHT: u16 = 5;
const MARGIN: u16 = 1;
const TOP: u16 = 1;

const CLOSE_LABEL: &str = " × ";

fn accent(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    }
}

/// Slot `index` of the stack, slid right by the hidden fraction of the toast
/// and clipped to `area`.
pub fn toast_area(area: Rect, index: usize, visibility: f32) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let resting_x = area.right().saturating_sub(width + MARGIN).max(area.x);
    let hidden = 1.0 - visibility.clamp(0.0, 1.0);
    let offset = (hidden * f32::from(width + MARGIN)).round() as u16;
    let y = area.y + TOP + (index as u16).saturating_mul(TOAST_HEIGHT + 1);

    Rect {
        x: resting_x.saturating_add(offset),
        y,
        width,
        height: TOAST_HEIGHT,
    }
    .intersection(area)
}

/// The close control drawn on the right of a toast's top border
pub fn close_area(toast: Rect) -> Rect {
    let width = CLOSE_LABEL.chars().count() as u16;
    Rect {
        x: toast.right().saturating_sub(width + 1),
        y: toast.y,
        width: width.min(toast.width),
        height: 1.min(toast.height),
    }
}

/// The toast whose close control is at `position`
pub fn toast_close_at(
    area: Rect,
    toasts: &[Toast],
    now: Instant,
    position: Position,
) -> Option<ToastId> {
    toasts.iter().enumerate().find_map(|(index, toast)| {
        let rect = toast_area(area, index, toast.visibility(now));
        (!rect.is_empty() && close_area(rect).contains(position)).then_some(toast.id)
    })
}

pub fn render_toasts(frame: &mut Frame, toasts: &[Toast], now: Instant) {
    let area = frame.area();
    for (index, toast) in toasts.iter().enumerate() {
        let rect = toast_area(area, index, toast.visibility(now));
        if rect.is_empty() {
            continue;
        }
        render_toast(frame, rect, toast);
    }
}

fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let color = accent(toast.kind);

    let title = Line::from(vec![
        Span::styled(
            format!("{} ", toast.kind.icon()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            toast.title.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    let message = Line::from(Span::styled(
        toast.message.as_str(),
        Style::default().fg(Color::Gray),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title_top(Line::from(CLOSE_LABEL).right_aligned())
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(vec![title, message])
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TRANSITION;
    use pretty_assertions::assert_eq;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    #[test]
    fn test_visible_toast_rests_at_right_edge() {
        let rect = toast_area(AREA, 0, 1.0);
        assert_eq!(rect, Rect::new(100 - TOAST_WIDTH - MARGIN, TOP, TOAST_WIDTH, TOAST_HEIGHT));
    }

    #[test]
    fn test_hidden_toast_is_off_screen() {
        assert!(toast_area(AREA, 0, 0.0).is_empty());
    }

    #[test]
    fn test_half_visible_toast_is_clipped() {
        let rect = toast_area(AREA, 0, 0.5);
        assert!(rect.width < TOAST_WIDTH);
        assert_eq!(rect.right(), AREA.right());
    }

    #[test]
    fn test_toasts_stack_downwards() {
        let first = toast_area(AREA, 0, 1.0);
        let second = toast_area(AREA, 1, 1.0);
        assert!(second.y >= first.bottom());
    }

    #[test]
    fn test_close_hit_test() {
        let t = Instant::now();
        let toasts = vec![Toast::success(7, t)];
        let settled = t + TRANSITION;

        let rect = toast_area(AREA, 0, 1.0);
        let close = close_area(rect);
        let on_close = Position::new(close.x + 1, close.y);
        let on_body = Position::new(rect.x + 2, rect.y + 2);

        assert_eq!(toast_close_at(AREA, &toasts, settled, on_close), Some(7));
        assert_eq!(toast_close_at(AREA, &toasts, settled, on_body), None);
    }
}
