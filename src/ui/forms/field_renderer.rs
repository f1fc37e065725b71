//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field and, below it, its inline error if any
pub fn draw_field(
    frame: &mut Frame,
    input_area: Rect,
    error_area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let accent = match (error, is_active) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Cyan,
        (None, false) => Color::DarkGray,
    };
    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let is_choice = matches!(field.value, FieldValue::Choice { .. });
    let placeholder = display_value.is_empty() && !is_active;
    let display_str = if placeholder {
        "(empty)".to_string()
    } else {
        display_value
    };
    let display_style = if placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        value_style
    };

    // Choice fields cycle with arrows, no text cursor
    let cursor = if is_active && !is_choice { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), display_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, display_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title_style = if is_active {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), input_area);

    if let Some(message) = error {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), error_area);
    }
}
