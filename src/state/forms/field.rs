//! Form field value objects

use serde::{Deserialize, Serialize};

/// The five validated inputs of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Service,
        ContactField::Message,
    ];

    /// Field identifier used in snapshots and the JSON payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::Message => "message",
        }
    }

    /// Look up a field by identifier. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone (optional)",
            Self::Service => "Service",
            Self::Message => "Message",
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Phone)
    }
}

/// A selectable entry of a choice field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice {
        options: Vec<ChoiceOption>,
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Edit applied to a field by a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Newline,
    NextOption,
    PrevOption,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: ContactField,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(field: ContactField, is_multiline: bool) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(field: ContactField, options: Vec<ChoiceOption>) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            is_multiline: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.field.as_str()
    }

    /// Raw submitted value. A choice field yields the selected option's value.
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|o| o.value.as_str())
                .unwrap_or(""),
        }
    }

    /// Replace the text value. Choice fields select the option with that value.
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value,
            FieldValue::Choice { options, selected } => {
                *selected = options.iter().position(|o| o.value == value);
            }
        }
    }

    /// Apply a keystroke edit
    pub fn apply(&mut self, edit: FieldEdit) {
        match (&mut self.value, edit) {
            (FieldValue::Text(s), FieldEdit::Insert(c)) => s.push(c),
            (FieldValue::Text(s), FieldEdit::Backspace) => {
                s.pop();
            }
            (FieldValue::Text(s), FieldEdit::Newline) if self.is_multiline => s.push('\n'),
            (FieldValue::Choice { options, selected }, FieldEdit::NextOption) => {
                if !options.is_empty() {
                    *selected = Some(selected.map_or(0, |i| (i + 1) % options.len()));
                }
            }
            (FieldValue::Choice { options, selected }, FieldEdit::PrevOption) => {
                if !options.is_empty() {
                    *selected = Some(match *selected {
                        None | Some(0) => options.len() - 1,
                        Some(i) => i - 1,
                    });
                }
            }
            (FieldValue::Choice { selected, .. }, FieldEdit::Backspace) => *selected = None,
            _ => {}
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, selected } => match selected.and_then(|i| options.get(i))
            {
                Some(option) => format!("◂ {} ▸", option.label),
                None => "◂ Select a service ▸".to_string(),
            },
        }
    }
}
