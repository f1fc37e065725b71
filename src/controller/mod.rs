//! Submission controller
//!
//! Owns the form surface and drives the feedback state machine:
//!
//! ```text
//! Idle ──submit(invalid)──▶ ErrorsShown
//!   │                          │ submit(valid)
//!   └──submit(valid)──▶ Loading ◀┘
//!                          │ outcome
//!                          ▼
//!                     ResultShown ──dismiss / 5s──▶ Idle
//! ```
//!
//! `on_reset` returns to `Idle` from anywhere. Timers are deadlines checked by
//! `tick`, so every transition is driven by the caller's clock.

mod surface;
mod timers;

pub use surface::{FocusMove, FormSurface};
#[cfg(test)]
pub use surface::MockFormSurface;
pub use timers::{TimerKind, Timers};

use crate::config::SuccessSurface;
use crate::format::format_phone;
use crate::state::{ContactField, FieldEdit, SuccessOverlay, Toast, ToastId, UiFeedbackState};
use crate::submit::{SubmissionOutcome, SubmissionStrategy};
use crate::validation::{validate, validate_field, ValidationResult};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Success overlay lifetime
pub const OVERLAY_VISIBLE_FOR: Duration = Duration::from_millis(5000);
/// Toast lifetime before its exit transition starts
pub const TOAST_VISIBLE_FOR: Duration = Duration::from_millis(5000);
/// Toast exit transition
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

/// Identifies one submit attempt
pub type AttemptId = u64;

struct InFlight {
    attempt: AttemptId,
    task: JoinHandle<()>,
}

/// Validates, submits and renders feedback for one form
pub struct SubmissionController<S: FormSurface> {
    surface: S,
    strategy: Arc<dyn SubmissionStrategy>,
    success_surface: SuccessSurface,
    state: UiFeedbackState,
    timers: Timers,
    outcome_tx: UnboundedSender<(AttemptId, SubmissionOutcome)>,
    outcome_rx: UnboundedReceiver<(AttemptId, SubmissionOutcome)>,
    in_flight: Option<InFlight>,
    next_attempt: AttemptId,
    next_toast: ToastId,
    /// Toast announcing the current result, while it is still showing
    result_toast: Option<ToastId>,
}

impl<S: FormSurface> SubmissionController<S> {
    pub fn new(
        surface: S,
        strategy: Arc<dyn SubmissionStrategy>,
        success_surface: SuccessSurface,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            surface,
            strategy,
            success_surface,
            state: UiFeedbackState::Idle,
            timers: Timers::default(),
            outcome_tx,
            outcome_rx,
            in_flight: None,
            next_attempt: 1,
            next_toast: 1,
            result_toast: None,
        }
    }

    pub fn state(&self) -> &UiFeedbackState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UiFeedbackState::Loading)
    }

    /// Validate and, if valid, start a submission on the tokio runtime.
    /// Returns true when a submission was started.
    pub fn on_submit(&mut self) -> bool {
        if self.is_loading() {
            tracing::debug!("submit ignored while a submission is in flight");
            return false;
        }

        self.clear_feedback();

        let snapshot = self.surface.snapshot();
        let errors = validate(&snapshot);
        if !errors.is_valid() {
            let fields: Vec<&str> = errors.iter().map(|(field, _)| field.as_str()).collect();
            tracing::debug!(?fields, "contact form has validation errors");
            self.surface.show_field_errors(&errors);
            self.transition(UiFeedbackState::ErrorsShown(errors));
            return false;
        }

        self.surface.set_loading(true);
        self.transition(UiFeedbackState::Loading);

        let attempt = self.next_attempt;
        self.next_attempt += 1;
        let strategy = Arc::clone(&self.strategy);
        let tx = self.outcome_tx.clone();
        tracing::info!(attempt, strategy = strategy.name(), "submitting contact form");

        let task = tokio::spawn(async move {
            let outcome = strategy.submit(snapshot).await;
            // The receiver lives as long as the controller
            let _ = tx.send((attempt, outcome));
        });
        self.in_flight = Some(InFlight { attempt, task });
        true
    }

    /// Apply the outcome of a submission. Outcomes of stale attempts are dropped.
    pub fn on_outcome(&mut self, attempt: AttemptId, outcome: SubmissionOutcome, now: Instant) {
        match &self.in_flight {
            Some(in_flight) if in_flight.attempt == attempt => {}
            _ => {
                tracing::debug!(attempt, "dropping outcome of a stale submission");
                return;
            }
        }
        self.in_flight = None;
        self.surface.set_loading(false);

        match &outcome {
            SubmissionOutcome::Success => {
                tracing::info!(attempt, "contact form submitted");
                self.surface.reset_fields();
                self.surface.clear_field_errors();
                if self.success_surface.shows_overlay() {
                    self.open_overlay(now);
                }
                if self.success_surface.shows_toast() {
                    let id = self.open_toast(Toast::success(self.next_toast, now), now);
                    self.result_toast = Some(id);
                }
            }
            SubmissionOutcome::Failure(reason) | SubmissionOutcome::NetworkError(reason) => {
                tracing::warn!(attempt, %reason, "contact form not delivered");
                let id = self.open_toast(Toast::error(self.next_toast, now), now);
                self.result_toast = Some(id);
            }
        }

        self.transition(UiFeedbackState::ResultShown(outcome));
    }

    /// Drain every outcome that has arrived without waiting
    pub fn poll_outcomes(&mut self, now: Instant) {
        while let Ok((attempt, outcome)) = self.outcome_rx.try_recv() {
            self.on_outcome(attempt, outcome, now);
        }
    }

    /// Wait for the next outcome and apply it
    #[cfg(test)]
    pub async fn wait_for_outcome(&mut self, now: Instant) {
        if let Some((attempt, outcome)) = self.outcome_rx.recv().await {
            self.on_outcome(attempt, outcome, now);
        }
    }

    /// Fire every timer due at `now`
    pub fn tick(&mut self, now: Instant) {
        for timer in self.timers.take_due(now) {
            match timer {
                TimerKind::OverlayDismiss => self.dismiss_overlay(),
                TimerKind::ToastExit(id) => self.expire_toast(id, now),
                TimerKind::ToastRemove(id) => {
                    self.surface.remove_toast(id);
                }
            }
        }
    }

    /// Clear the form and every piece of feedback, cancelling pending timers
    /// and any submission still in flight.
    pub fn on_reset(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::info!(attempt = in_flight.attempt, "cancelling in-flight submission");
            in_flight.task.abort();
            self.surface.set_loading(false);
        }
        self.clear_feedback();
        self.surface.reset_fields();
    }

    /// Close the success overlay (click outside it, Esc or Enter)
    pub fn dismiss_overlay(&mut self) {
        if self.surface.hide_overlay() {
            self.timers.cancel(TimerKind::OverlayDismiss);
            self.settle_result();
        }
    }

    /// Close a toast immediately (its close control)
    pub fn dismiss_toast(&mut self, id: ToastId) {
        if self.surface.remove_toast(id) {
            self.timers.cancel_toast(id);
            self.release_result_toast(id);
        }
    }

    /// Apply a keystroke to a field: phone input is re-formatted and any error
    /// shown for the field is cleared without re-validating.
    pub fn on_input(&mut self, field: ContactField, edit: FieldEdit) {
        self.surface.apply_edit(field, edit);
        if field == ContactField::Phone {
            let formatted = format_phone(&self.surface.field_value(field));
            self.surface.set_field_value(field, formatted);
        }

        if self.surface.clear_field_error(field) {
            if let UiFeedbackState::ErrorsShown(errors) = &mut self.state {
                errors.remove(field);
                if errors.is_empty() && !self.surface.has_field_errors() {
                    self.transition(UiFeedbackState::Idle);
                }
            }
        }
    }

    /// Move focus; the field losing focus is validated on its own.
    pub fn on_focus(&mut self, focus: FocusMove) {
        let leaving = self.surface.focused_field();
        self.surface.move_focus(focus);
        if let Some(field) = leaving {
            if self.surface.focused_field() != Some(field) {
                self.on_blur(field);
            }
        }
    }

    /// An invalid field replaces every inline error with its own; a valid
    /// one leaves the displayed errors alone.
    fn on_blur(&mut self, field: ContactField) {
        let value = self.surface.field_value(field);
        let Some(message) = validate_field(field.as_str(), &value) else {
            return;
        };
        let errors: ValidationResult = [(field, message)].into_iter().collect();
        self.surface.show_field_errors(&errors);
        if let UiFeedbackState::ErrorsShown(shown) = &mut self.state {
            *shown = errors;
        }
    }

    fn open_overlay(&mut self, now: Instant) {
        self.surface.show_overlay(SuccessOverlay::new(now));
        self.timers
            .schedule(TimerKind::OverlayDismiss, now + OVERLAY_VISIBLE_FOR);
    }

    fn open_toast(&mut self, toast: Toast, now: Instant) -> ToastId {
        let id = toast.id;
        self.next_toast = id + 1;
        self.surface.push_toast(toast);
        self.timers
            .schedule(TimerKind::ToastExit(id), now + TOAST_VISIBLE_FOR);
        id
    }

    fn expire_toast(&mut self, id: ToastId, now: Instant) {
        if self.surface.begin_toast_exit(id, now) {
            self.timers.schedule(TimerKind::ToastRemove(id), now + TOAST_EXIT);
        }
        self.release_result_toast(id);
    }

    fn release_result_toast(&mut self, id: ToastId) {
        if self.result_toast == Some(id) {
            self.result_toast = None;
            self.settle_result();
        }
    }

    /// Back to idle once no surface announces the result any more
    fn settle_result(&mut self) {
        if matches!(self.state, UiFeedbackState::ResultShown(_))
            && !self.surface.has_overlay()
            && self.result_toast.is_none()
        {
            self.transition(UiFeedbackState::Idle);
        }
    }

    fn clear_feedback(&mut self) {
        self.timers.clear();
        self.surface.clear_field_errors();
        self.surface.hide_overlay();
        self.surface.clear_toasts();
        self.result_toast = None;
        self.transition(UiFeedbackState::Idle);
    }

    fn transition(&mut self, next: UiFeedbackState) {
        if self.state != next {
            tracing::debug!(from = self.state.label(), to = next.label(), "feedback state");
        }
        self.state = next;
    }
}
