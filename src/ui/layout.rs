//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{CLOSE_TOAST_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::UiFeedbackState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header, content and status bar areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " Get in touch ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Tell us about your project and we'll reply within 24 hours.",
            Style::default().fg(Color::Gray),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let controller = &app.controller;

    let state_span = match controller.state() {
        UiFeedbackState::Idle => Span::styled(" ● ready ", Style::default().fg(Color::Green)),
        UiFeedbackState::Loading => Span::styled(" ◌ sending ", Style::default().fg(Color::Yellow)),
        UiFeedbackState::ErrorsShown(errors) => Span::styled(
            format!(" ● {} to fix ", errors.len()),
            Style::default().fg(Color::Red),
        ),
        UiFeedbackState::ResultShown(outcome) if outcome.is_success() => {
            Span::styled(" ✓ sent ", Style::default().fg(Color::Green))
        }
        UiFeedbackState::ResultShown(_) => {
            Span::styled(" ✕ failed ", Style::default().fg(Color::Red))
        }
    };

    let spans = vec![
        state_span,
        Span::styled(view_hints(), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled(
            controller.strategy_name(),
            Style::default().fg(Color::Blue),
        ),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn view_hints() -> String {
    format!(
        "Tab:next  ←/→:service  {SUBMIT_SHORTCUT}:send  {RESET_SHORTCUT}:reset  {CLOSE_TOAST_SHORTCUT}:close"
    )
}
