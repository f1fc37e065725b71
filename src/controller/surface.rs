//! Trait abstraction over the form and its feedback surfaces

use crate::state::{
    ContactField, FieldEdit, FormSnapshot, SuccessOverlay, Toast, ToastId,
};
use crate::validation::ValidationResult;
use std::time::Instant;

/// Requested focus change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Prev,
    To(ContactField),
    Submit,
}

/// Everything the submission controller reads from or writes to the UI.
/// The controller owns its surface exclusively.
#[cfg_attr(test, mockall::automock)]
pub trait FormSurface {
    /// Capture every input, hidden fields included
    fn snapshot(&self) -> FormSnapshot;

    fn field_value(&self, field: ContactField) -> String;

    fn set_field_value(&mut self, field: ContactField, value: String);

    fn apply_edit(&mut self, field: ContactField, edit: FieldEdit);

    /// Clear every visible input
    fn reset_fields(&mut self);

    /// The focused input, `None` when the submit control has focus
    fn focused_field(&self) -> Option<ContactField>;

    fn move_focus(&mut self, focus: FocusMove);

    /// Replace all inline errors with `errors`
    fn show_field_errors(&mut self, errors: &ValidationResult);

    /// Returns true if an error was displayed for `field`
    fn clear_field_error(&mut self, field: ContactField) -> bool;

    fn clear_field_errors(&mut self);

    fn has_field_errors(&self) -> bool;

    /// Disable the submit control and show the loading label
    fn set_loading(&mut self, loading: bool);

    fn show_overlay(&mut self, overlay: SuccessOverlay);

    /// Returns true if an overlay was visible
    fn hide_overlay(&mut self) -> bool;

    fn has_overlay(&self) -> bool;

    fn push_toast(&mut self, toast: Toast);

    /// Start the exit transition of a toast
    fn begin_toast_exit(&mut self, id: ToastId, now: Instant) -> bool;

    fn remove_toast(&mut self, id: ToastId) -> bool;

    fn clear_toasts(&mut self);
}
