//! Contact form rendering and its layout

use super::field_renderer::draw_field;
use crate::controller::FormSurface;
use crate::state::{ContactField, ContactSurface};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// The form never grows wider than this
pub const FORM_MAX_WIDTH: u16 = 72;
const SUBMIT_WIDTH: u16 = 22;
const INPUT_HEIGHT: u16 = 3;
const MESSAGE_MIN_HEIGHT: u16 = 5;

/// Input and inline error rows of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    pub field: ContactField,
    pub input: Rect,
    pub error: Rect,
}

/// Where every part of the form is drawn. Shared by rendering and mouse
/// hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub frame: Rect,
    pub fields: Vec<FieldSlot>,
    pub submit: Rect,
}

impl FormLayout {
    pub fn field_at(&self, position: Position) -> Option<ContactField> {
        self.fields
            .iter()
            .find(|slot| slot.input.contains(position))
            .map(|slot| slot.field)
    }

    pub fn is_submit_at(&self, position: Position) -> bool {
        self.submit.contains(position)
    }

    #[cfg(test)]
    pub fn slot(&self, field: ContactField) -> Option<&FieldSlot> {
        self.fields.iter().find(|slot| slot.field == field)
    }
}

/// Lay the form out inside the content area, centered horizontally
pub fn form_layout(area: Rect) -> FormLayout {
    let width = area.width.min(FORM_MAX_WIDTH);
    let frame = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let mut constraints = Vec::with_capacity(ContactField::ALL.len() * 2 + 2);
    for field in ContactField::ALL {
        constraints.push(if field == ContactField::Message {
            Constraint::Min(MESSAGE_MIN_HEIGHT)
        } else {
            Constraint::Length(INPUT_HEIGHT)
        });
        constraints.push(Constraint::Length(1)); // inline error
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(frame);

    let fields = ContactField::ALL
        .iter()
        .enumerate()
        .map(|(i, &field)| FieldSlot {
            field,
            input: chunks[i * 2],
            error: chunks[i * 2 + 1],
        })
        .collect();

    let submit_row = chunks[ContactField::ALL.len() * 2];
    let submit = Rect {
        width: submit_row.width.min(SUBMIT_WIDTH),
        ..submit_row
    };

    FormLayout {
        frame,
        fields,
        submit,
    }
}

/// Draw the form with inline errors and the submit button
pub fn draw_contact_form(frame: &mut Frame, area: Rect, surface: &ContactSurface) {
    let layout = form_layout(area);
    let form = surface.form();

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, layout.frame);

    let focused = surface.focused_field();
    for slot in &layout.fields {
        draw_field(
            frame,
            slot.input,
            slot.error,
            form.field(slot.field),
            focused == Some(slot.field),
            surface.field_error(slot.field),
        );
    }

    render_button(
        frame,
        layout.submit,
        surface.submit_label(),
        form.is_submit_focused(),
        surface.is_submit_enabled(),
        Color::Green,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_is_centered_and_capped() {
        let layout = form_layout(Rect::new(0, 3, 120, 32));
        assert_eq!(layout.frame.width, FORM_MAX_WIDTH);
        assert_eq!(layout.frame.x, (120 - FORM_MAX_WIDTH) / 2);
    }

    #[test]
    fn test_fields_in_order_with_error_rows_below() {
        let layout = form_layout(Rect::new(0, 0, 80, 34));
        let order: Vec<ContactField> = layout.fields.iter().map(|s| s.field).collect();
        assert_eq!(order, ContactField::ALL.to_vec());

        for slot in &layout.fields {
            assert_eq!(slot.error.y, slot.input.bottom());
            assert_eq!(slot.error.height, 1);
        }
        let message = layout.slot(ContactField::Message).unwrap();
        assert!(message.input.height >= MESSAGE_MIN_HEIGHT);
        assert!(layout.submit.y >= message.error.bottom());
    }

    #[test]
    fn test_hit_testing() {
        let layout = form_layout(Rect::new(0, 0, 80, 34));
        let email = layout.slot(ContactField::Email).unwrap().input;

        assert_eq!(
            layout.field_at(Position::new(email.x + 2, email.y + 1)),
            Some(ContactField::Email)
        );
        assert_eq!(layout.field_at(Position::new(0, 0)), None);
        assert!(layout.is_submit_at(Position::new(layout.submit.x + 1, layout.submit.y + 1)));
    }
}
