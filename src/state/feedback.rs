//! Feedback surfaces: toasts, the success overlay and the controller state

use crate::submit::SubmissionOutcome;
use crate::validation::ValidationResult;
use std::time::{Duration, Instant};

/// Slide/scale animation length for toasts and the overlay
pub const TRANSITION: Duration = Duration::from_millis(300);

pub const SUCCESS_TOAST_TITLE: &str = "Form Submitted Successfully!";
pub const OVERLAY_TITLE: &str = "Message Sent Successfully!";
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry. We'll get back to you within 24 hours.";
pub const ERROR_TOAST_TITLE: &str = "Submission Failed";
pub const ERROR_MESSAGE: &str = "There was an error submitting your form. Please try again.";

/// Feedback state owned by the submission controller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiFeedbackState {
    #[default]
    Idle,
    Loading,
    ErrorsShown(ValidationResult),
    ResultShown(SubmissionOutcome),
}

impl UiFeedbackState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::ErrorsShown(_) => "errors",
            Self::ResultShown(_) => "result",
        }
    }
}

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
        }
    }
}

/// A transient notification in the top-right corner
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub shown_at: Instant,
    /// Set once the exit transition has started
    pub leaving_since: Option<Instant>,
}

impl Toast {
    pub fn success(id: ToastId, now: Instant) -> Self {
        Self::new(id, ToastKind::Success, SUCCESS_TOAST_TITLE, SUCCESS_MESSAGE, now)
    }

    pub fn error(id: ToastId, now: Instant) -> Self {
        Self::new(id, ToastKind::Error, ERROR_TOAST_TITLE, ERROR_MESSAGE, now)
    }

    fn new(id: ToastId, kind: ToastKind, title: &str, message: &str, now: Instant) -> Self {
        Self {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            shown_at: now,
            leaving_since: None,
        }
    }

    pub fn is_leaving(&self) -> bool {
        self.leaving_since.is_some()
    }

    /// 0.0 = fully off-screen, 1.0 = fully in place
    pub fn visibility(&self, now: Instant) -> f32 {
        match self.leaving_since {
            Some(since) => 1.0 - simple_easing::cubic_in(progress(since, now)),
            None => simple_easing::cubic_out(progress(self.shown_at, now)),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        let since = self.leaving_since.unwrap_or(self.shown_at);
        now.saturating_duration_since(since) < TRANSITION
    }
}

/// Modal success message shown over the form
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessOverlay {
    pub title: String,
    pub message: String,
    pub shown_at: Instant,
}

impl SuccessOverlay {
    pub fn new(now: Instant) -> Self {
        Self {
            title: OVERLAY_TITLE.to_string(),
            message: SUCCESS_MESSAGE.to_string(),
            shown_at: now,
        }
    }

    /// Grows from 80% to full size
    pub fn scale(&self, now: Instant) -> f32 {
        0.8 + 0.2 * simple_easing::cubic_out(progress(self.shown_at, now))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < TRANSITION
    }
}

fn progress(since: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(since).as_secs_f32();
    (elapsed / TRANSITION.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod toast {
        use super::*;

        #[test]
        fn test_success_and_error_texts() {
            let now = Instant::now();
            let ok = Toast::success(1, now);
            assert_eq!(ok.kind, ToastKind::Success);
            assert_eq!(ok.title, "Form Submitted Successfully!");
            assert_eq!(ok.kind.icon(), "✓");

            let err = Toast::error(2, now);
            assert_eq!(err.title, "Submission Failed");
            assert_eq!(
                err.message,
                "There was an error submitting your form. Please try again."
            );
            assert_eq!(err.kind.icon(), "✕");
        }

        #[test]
        fn test_slides_in() {
            let start = Instant::now();
            let toast = Toast::success(1, start);
            assert_eq!(toast.visibility(start), 0.0);
            assert!(toast.is_animating(start));
            assert_eq!(toast.visibility(start + TRANSITION), 1.0);
            assert!(!toast.is_animating(start + TRANSITION));
        }

        #[test]
        fn test_slides_out_when_leaving() {
            let start = Instant::now();
            let mut toast = Toast::success(1, start);
            let leave = start + Duration::from_secs(5);
            toast.leaving_since = Some(leave);

            assert!(toast.is_leaving());
            assert_eq!(toast.visibility(leave), 1.0);
            assert_eq!(toast.visibility(leave + TRANSITION), 0.0);
        }
    }

    mod overlay {
        use super::*;

        #[test]
        fn test_scale_grows_to_full() {
            let start = Instant::now();
            let overlay = SuccessOverlay::new(start);
            assert!((overlay.scale(start) - 0.8).abs() < f32::EPSILON);
            assert!((overlay.scale(start + TRANSITION) - 1.0).abs() < f32::EPSILON);
            assert!(!overlay.is_animating(start + TRANSITION));
        }

        #[test]
        fn test_texts() {
            let overlay = SuccessOverlay::new(Instant::now());
            assert_eq!(overlay.title, "Message Sent Successfully!");
            assert_eq!(overlay.message, SUCCESS_MESSAGE);
        }
    }

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(UiFeedbackState::default(), UiFeedbackState::Idle);
        assert_eq!(UiFeedbackState::Loading.label(), "loading");
    }
}
