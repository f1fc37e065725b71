//! Form rendering module
//!
//! - `field_renderer`: a single field with its inline error
//! - `contact_form`: the contact form, its submit button and layout

mod contact_form;
mod field_renderer;

pub use contact_form::{draw_contact_form, form_layout};
#[cfg(test)]
pub use contact_form::FormLayout;
