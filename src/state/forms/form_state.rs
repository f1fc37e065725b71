//! Form state management and the contact form struct

use super::field::{ChoiceOption, ContactField, FieldEdit, FormField};
use super::snapshot::{FormSnapshot, SnapshotField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Focus slot of the submit button (after the five inputs)
pub const SUBMIT_SLOT: usize = 5;

/// The contact form: five inputs, the submit button slot and hidden fields
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub service: FormField,
    pub message: FormField,
    /// Extra name/value pairs posted with every submission
    pub hidden: Vec<(String, String)>,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new(services: Vec<ChoiceOption>, hidden: Vec<(String, String)>) -> Self {
        Self {
            name: FormField::text(ContactField::Name, false),
            email: FormField::text(ContactField::Email, false),
            phone: FormField::text(ContactField::Phone, false),
            service: FormField::choice(ContactField::Service, services),
            message: FormField::text(ContactField::Message, true),
            hidden,
            active_field_index: 0,
        }
    }

    pub fn field(&self, field: ContactField) -> &FormField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut FormField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
        }
    }

    /// The focused input, or `None` when the submit button has focus
    pub fn focused_field(&self) -> Option<ContactField> {
        self.get_field(self.active_field_index).map(|f| f.field)
    }

    pub fn focus(&mut self, field: ContactField) {
        self.active_field_index = field as usize;
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_SLOT
    }

    pub fn apply_edit(&mut self, field: ContactField, edit: FieldEdit) {
        self.field_mut(field).apply(edit);
    }

    /// Capture visible inputs followed by hidden fields
    pub fn snapshot(&self) -> FormSnapshot {
        let visible = ContactField::ALL.into_iter().map(|f| {
            let field = self.field(f);
            SnapshotField {
                name: field.name().to_string(),
                value: field.as_text().to_string(),
                optional: f.is_optional(),
            }
        });
        // A hidden field never shadows a visible input
        let hidden = self
            .hidden
            .iter()
            .filter(|(name, _)| ContactField::from_name(name).is_none())
            .map(|(name, value)| SnapshotField {
                name: name.clone(),
                value: value.clone(),
                optional: true,
            });
        FormSnapshot::new(visible.chain(hidden).collect())
    }

    /// Clear all visible inputs. Hidden fields and focus are kept.
    pub fn reset(&mut self) {
        for field in ContactField::ALL {
            self.field_mut(field).clear();
        }
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|f| self.field(f).as_text().is_empty())
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        6 // five inputs, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_SLOT);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        ContactField::ALL.get(index).map(|f| self.field(*f))
    }
}
