//! Form domain layer
//!
//! Fields, the contact form and the snapshot captured on submit.

mod field;
mod form_state;
mod snapshot;

pub use field::{ChoiceOption, ContactField, FieldEdit, FieldValue, FormField};
pub use form_state::{ContactForm, Form, SUBMIT_SLOT};
pub use snapshot::FormSnapshot;
