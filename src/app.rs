//! Application state and input handling

use crate::config::{FormConfig, SuccessSurface};
use crate::controller::{FocusMove, FormSurface, SubmissionController};
use crate::platform;
use crate::state::{ContactField, ContactSurface, FieldEdit};
use crate::submit::{build_strategy, SubmissionStrategy};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Form, feedback surfaces and submission state machine
    pub controller: SubmissionController<ContactSurface>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &FormConfig) -> Result<Self> {
        let strategy = build_strategy(config)?;
        let surface = ContactSurface::new(config.services(), config.hidden_fields());
        tracing::info!(
            strategy = strategy.name(),
            hidden_fields = config.hidden_fields().len(),
            "contact form ready"
        );
        Ok(Self::with_strategy(
            surface,
            strategy,
            config.success_surface(),
        ))
    }

    pub fn with_strategy(
        surface: ContactSurface,
        strategy: Arc<dyn SubmissionStrategy>,
        success_surface: SuccessSurface,
    ) -> Self {
        Self {
            controller: SubmissionController::new(surface, strategy, success_surface),
            quit: false,
            terminal_size: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    fn surface(&self) -> &ContactSurface {
        self.controller.surface()
    }

    /// Whether the next frames differ without input (transitions or a spinner)
    pub fn is_animating(&self, now: Instant) -> bool {
        self.controller.is_loading() || self.surface().is_animating(now)
    }

    /// Apply finished submissions and fire due timers
    pub fn poll_background(&mut self, now: Instant) {
        self.controller.poll_outcomes(now);
        self.controller.tick(now);
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // The success overlay is modal
        if self.surface().has_overlay() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.controller.dismiss_overlay();
            }
            return;
        }

        if platform::is_action(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => {
                    self.controller.on_submit();
                }
                KeyCode::Char('r') => self.controller.on_reset(),
                KeyCode::Char('x') => self.close_newest_toast(),
                _ => {}
            }
            return;
        }

        let focused = self.surface().focused_field();
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.controller.on_focus(FocusMove::Next),
            KeyCode::BackTab | KeyCode::Up => self.controller.on_focus(FocusMove::Prev),
            KeyCode::Esc => self.close_newest_toast(),
            KeyCode::Enter => match focused {
                None => {
                    self.controller.on_submit();
                }
                Some(ContactField::Message) => {
                    self.controller
                        .on_input(ContactField::Message, FieldEdit::Newline)
                }
                Some(_) => self.controller.on_focus(FocusMove::Next),
            },
            KeyCode::Left if focused == Some(ContactField::Service) => self
                .controller
                .on_input(ContactField::Service, FieldEdit::PrevOption),
            KeyCode::Right | KeyCode::Char(' ') if focused == Some(ContactField::Service) => self
                .controller
                .on_input(ContactField::Service, FieldEdit::NextOption),
            KeyCode::Char(c) => {
                if let Some(field) = focused {
                    self.controller.on_input(field, FieldEdit::Insert(c));
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = focused {
                    self.controller.on_input(field, FieldEdit::Backspace);
                }
            }
            _ => {}
        }
    }

    /// Handle a mouse event. Only left clicks do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(area) = self.frame_area() else {
            return;
        };
        let position = Position::new(mouse.column, mouse.row);

        // Clicking the backdrop closes the overlay; the form stays inert
        if let Some(overlay) = self.surface().overlay() {
            if !ui::overlay_area(area, overlay, now).contains(position) {
                self.controller.dismiss_overlay();
            }
            return;
        }

        if let Some(id) = ui::toast_close_at(area, self.surface().toasts(), now, position) {
            self.controller.dismiss_toast(id);
            return;
        }

        let layout = ui::form_layout(ui::screen_layout(area).content);
        if layout.is_submit_at(position) {
            self.controller.on_focus(FocusMove::Submit);
            self.controller.on_submit();
        } else if let Some(field) = layout.field_at(position) {
            self.controller.on_focus(FocusMove::To(field));
        }
    }

    fn close_newest_toast(&mut self) {
        if let Some(id) = self.surface().newest_toast() {
            self.controller.dismiss_toast(id);
        }
    }

    fn frame_area(&self) -> Option<Rect> {
        self.terminal_size
            .map(|(height, width)| Rect::new(0, 0, width, height))
    }
}
