//! Contact form validation
//!
//! Pure functions only: `validate` checks a whole snapshot, `validate_field`
//! checks a single name/value pair when a field loses focus. Both apply the
//! same rules, so they always agree per field.

mod rules;

#[cfg(test)]
pub use rules::{EMAIL_ERROR, MESSAGE_ERROR, NAME_ERROR, PHONE_ERROR, SERVICE_ERROR};

use crate::state::{ContactField, FormSnapshot};
use std::collections::BTreeMap;

/// Field → error message. An absent entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<ContactField, &'static str>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Errors in form order
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }

    pub fn remove(&mut self, field: ContactField) -> Option<&'static str> {
        self.errors.remove(&field)
    }
}

impl FromIterator<(ContactField, &'static str)> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = (ContactField, &'static str)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Validate every known field of a snapshot. Missing fields count as empty.
pub fn validate(snapshot: &FormSnapshot) -> ValidationResult {
    ContactField::ALL
        .into_iter()
        .filter_map(|field| {
            let value = snapshot.get(field.as_str()).unwrap_or("");
            rules::check(field, value).map(|message| (field, message))
        })
        .collect()
}

/// Validate a single field by name. Unknown names have no rule.
pub fn validate_field(name: &str, value: &str) -> Option<&'static str> {
    ContactField::from_name(name).and_then(|field| rules::check(field, value))
}
