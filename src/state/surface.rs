//! In-memory form surface drawn by the terminal UI

use super::feedback::{SuccessOverlay, Toast, ToastId};
use super::forms::{ChoiceOption, ContactField, ContactForm, FieldEdit, Form, FormSnapshot};
use crate::controller::{FocusMove, FormSurface};
use crate::validation::ValidationResult;
use std::time::Instant;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const LOADING_LABEL: &str = "Sending...";

/// The contact form plus every feedback surface attached to it
#[derive(Debug, Clone)]
pub struct ContactSurface {
    form: ContactForm,
    field_errors: ValidationResult,
    loading: bool,
    overlay: Option<SuccessOverlay>,
    toasts: Vec<Toast>,
}

impl ContactSurface {
    pub fn new(services: Vec<ChoiceOption>, hidden: Vec<(String, String)>) -> Self {
        Self {
            form: ContactForm::new(services, hidden),
            field_errors: ValidationResult::default(),
            loading: false,
            overlay: None,
            toasts: Vec::new(),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn field_error(&self, field: ContactField) -> Option<&'static str> {
        self.field_errors.get(field)
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn overlay(&self) -> Option<&SuccessOverlay> {
        self.overlay.as_ref()
    }

    /// Toasts oldest first
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Most recent toast that is not already leaving
    pub fn newest_toast(&self) -> Option<ToastId> {
        self.toasts
            .iter()
            .rev()
            .find(|t| !t.is_leaving())
            .map(|t| t.id)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.overlay.as_ref().is_some_and(|o| o.is_animating(now))
            || self.toasts.iter().any(|t| t.is_animating(now))
    }
}

impl FormSurface for ContactSurface {
    fn snapshot(&self) -> FormSnapshot {
        self.form.snapshot()
    }

    fn field_value(&self, field: ContactField) -> String {
        self.form.field(field).as_text().to_string()
    }

    fn set_field_value(&mut self, field: ContactField, value: String) {
        self.form.field_mut(field).set_text(value);
    }

    fn apply_edit(&mut self, field: ContactField, edit: FieldEdit) {
        self.form.apply_edit(field, edit);
    }

    fn reset_fields(&mut self) {
        self.form.reset();
    }

    fn focused_field(&self) -> Option<ContactField> {
        self.form.focused_field()
    }

    fn move_focus(&mut self, focus: FocusMove) {
        match focus {
            FocusMove::Next => self.form.next_field(),
            FocusMove::Prev => self.form.prev_field(),
            FocusMove::To(field) => self.form.focus(field),
            FocusMove::Submit => self.form.set_active_field(super::forms::SUBMIT_SLOT),
        }
    }

    fn show_field_errors(&mut self, errors: &ValidationResult) {
        self.field_errors = errors.clone();
    }

    fn clear_field_error(&mut self, field: ContactField) -> bool {
        self.field_errors.remove(field).is_some()
    }

    fn clear_field_errors(&mut self) {
        self.field_errors = ValidationResult::default();
    }

    fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn show_overlay(&mut self, overlay: SuccessOverlay) {
        self.overlay = Some(overlay);
    }

    fn hide_overlay(&mut self) -> bool {
        self.overlay.take().is_some()
    }

    fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    fn begin_toast_exit(&mut self, id: ToastId, now: Instant) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if !toast.is_leaving() => {
                toast.leaving_since = Some(now);
                true
            }
            _ => false,
        }
    }

    fn remove_toast(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    fn clear_toasts(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{EMAIL_ERROR, NAME_ERROR};

    fn surface() -> ContactSurface {
        ContactSurface::new(vec![ChoiceOption::new("consulting", "Consulting")], Vec::new())
    }

    #[test]
    fn test_submit_label_follows_loading() {
        let mut surface = surface();
        assert_eq!(surface.submit_label(), "Send Message");
        assert!(surface.is_submit_enabled());

        surface.set_loading(true);
        assert_eq!(surface.submit_label(), "Sending...");
        assert!(!surface.is_submit_enabled());

        surface.set_loading(false);
        assert_eq!(surface.submit_label(), "Send Message");
    }

    #[test]
    fn test_show_field_errors_replaces_previous() {
        let mut surface = surface();
        surface.show_field_errors(&[(ContactField::Name, NAME_ERROR)].into_iter().collect());

        let errors: ValidationResult = [(ContactField::Email, EMAIL_ERROR)].into_iter().collect();
        surface.show_field_errors(&errors);

        assert_eq!(surface.field_error(ContactField::Name), None);
        assert_eq!(surface.field_error(ContactField::Email), Some(EMAIL_ERROR));
    }

    #[test]
    fn test_clear_field_error_reports_change() {
        let mut surface = surface();
        surface.show_field_errors(&[(ContactField::Name, NAME_ERROR)].into_iter().collect());
        assert!(surface.clear_field_error(ContactField::Name));
        assert!(!surface.clear_field_error(ContactField::Name));
        assert!(!surface.has_field_errors());
    }

    #[test]
    fn test_focus_moves() {
        let mut surface = surface();
        assert_eq!(surface.focused_field(), Some(ContactField::Name));
        surface.move_focus(FocusMove::Next);
        assert_eq!(surface.focused_field(), Some(ContactField::Email));
        surface.move_focus(FocusMove::To(ContactField::Message));
        assert_eq!(surface.focused_field(), Some(ContactField::Message));
        surface.move_focus(FocusMove::Submit);
        assert_eq!(surface.focused_field(), None);
        assert!(surface.form().is_submit_focused());
        surface.move_focus(FocusMove::Prev);
        assert_eq!(surface.focused_field(), Some(ContactField::Message));
    }

    mod toasts {
        use super::*;

        #[test]
        fn test_newest_skips_leaving() {
            let now = Instant::now();
            let mut surface = surface();
            surface.push_toast(Toast::success(1, now));
            surface.push_toast(Toast::error(2, now));
            assert_eq!(surface.newest_toast(), Some(2));

            assert!(surface.begin_toast_exit(2, now));
            assert_eq!(surface.newest_toast(), Some(1));
        }

        #[test]
        fn test_begin_exit_only_once() {
            let now = Instant::now();
            let mut surface = surface();
            surface.push_toast(Toast::success(1, now));
            assert!(surface.begin_toast_exit(1, now));
            assert!(!surface.begin_toast_exit(1, now));
            assert!(!surface.begin_toast_exit(99, now));
        }

        #[test]
        fn test_remove_and_clear() {
            let now = Instant::now();
            let mut surface = surface();
            surface.push_toast(Toast::success(1, now));
            surface.push_toast(Toast::error(2, now));

            assert!(surface.remove_toast(1));
            assert!(!surface.remove_toast(1));
            assert_eq!(surface.toasts().len(), 1);

            surface.clear_toasts();
            assert!(surface.toasts().is_empty());
        }
    }

    #[test]
    fn test_overlay_show_and_hide() {
        let mut surface = surface();
        assert!(!surface.hide_overlay());
        surface.show_overlay(SuccessOverlay::new(Instant::now()));
        assert!(surface.has_overlay());
        assert!(surface.hide_overlay());
        assert!(surface.overlay().is_none());
    }

    #[test]
    fn test_set_field_value_and_reset() {
        let mut surface = surface();
        surface.set_field_value(ContactField::Service, "consulting".to_string());
        surface.set_field_value(ContactField::Name, "Al".to_string());
        assert_eq!(surface.field_value(ContactField::Service), "consulting");

        surface.reset_fields();
        assert_eq!(surface.field_value(ContactField::Name), "");
        assert_eq!(surface.field_value(ContactField::Service), "");
    }
}
