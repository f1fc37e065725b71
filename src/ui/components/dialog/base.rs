//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
    /// Size relative to the natural size, for the entry animation
    pub scale: f32,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            hint: None,
            max_width: 60,
            scale: 1.0,
        }
    }
}

/// 2 chars padding on each side
const PADDING: u16 = 4;

/// Where a dialog with `config` lands when centered in `area`
pub fn dialog_area(area: Rect, config: &DialogConfig) -> Rect {
    let max_line_width = config.max_width.saturating_sub(PADDING) as usize;
    let wrapped_lines = wrap_text(config.message, max_line_width);

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let natural_width = (content_width + PADDING + 2).min(config.max_width); // +2 for borders

    // title + blank + message lines + blank (if hint) + hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let natural_height = (2 + wrapped_lines.len() as u16 + hint_lines + 2).max(5);

    let scale = config.scale.clamp(0.0, 1.0);
    let width = scaled(natural_width, scale).min(area.width);
    let height = scaled(natural_height, scale).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn scaled(length: u16, scale: f32) -> u16 {
    (f32::from(length) * scale).round() as u16
}

/// Render a centered dialog overlay and return its area
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) -> Rect {
    let dialog_area = dialog_area(frame.area(), &config);
    let max_line_width = config.max_width.saturating_sub(PADDING) as usize;

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in wrap_text(config.message, max_line_width) {
        content.push(Line::from(line));
    }

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
    dialog_area
}

/// Wrap text to fit within a maximum width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_width = current_line.chars().count();
            if current_width + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_text_keeps_blank_paragraphs() {
        let lines = wrap_text("a\n\nb", 10);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_dialog_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let config = DialogConfig {
            title: "Hello",
            message: "short",
            ..Default::default()
        };
        let rect = dialog_area(area, &config);
        assert_eq!(rect.width, 11);
        assert_eq!(rect.height, 5);
        assert_eq!(rect.x, (100 - 11) / 2);
        assert_eq!(rect.y, (40 - 5) / 2);
    }

    #[test]
    fn test_scaled_dialog_is_smaller_and_still_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let full = dialog_area(
            area,
            &DialogConfig {
                message: "a fairly long message that wraps over more than one line of text",
                max_width: 40,
                ..Default::default()
            },
        );
        let small = dialog_area(
            area,
            &DialogConfig {
                message: "a fairly long message that wraps over more than one line of text",
                max_width: 40,
                scale: 0.8,
                ..Default::default()
            },
        );
        assert!(small.width < full.width);
        assert!(small.height <= full.height);
        assert!(full.intersection(small) == small);
    }

    #[test]
    fn test_dialog_never_exceeds_area() {
        let area = Rect::new(0, 0, 20, 4);
        let rect = dialog_area(
            area,
            &DialogConfig {
                message: "a message far wider than the terminal it is shown in",
                ..Default::default()
            },
        );
        assert!(rect.width <= 20);
        assert!(rect.height <= 4);
    }
}
