//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

pub use components::{overlay_area, toast_close_at};
pub use forms::form_layout;
#[cfg(test)]
pub use forms::FormLayout;
pub use layout::screen_layout;

use crate::app::App;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let screen = screen_layout(frame.area());
    let surface = app.controller.surface();

    layout::draw_header(frame, screen.header);
    forms::draw_contact_form(frame, screen.content, surface);
    layout::draw_status_bar(frame, screen.status, app);

    // Overlay is modal: it dims everything drawn before it
    if let Some(overlay) = surface.overlay() {
        components::render_success_dialog(frame, overlay, now);
    }
    components::render_toasts(frame, surface.toasts(), now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::config::SuccessSurface;
    use crate::state::{ChoiceOption, ContactField, ContactSurface, FieldEdit};
    use crate::submit::{MockSubmissionStrategy, SubmissionOutcome};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn app(outcome: SubmissionOutcome, success_surface: SuccessSurface) -> App {
        let mut strategy = MockSubmissionStrategy::new();
        strategy.expect_name().return_const("simulated");
        strategy.expect_submit().returning(move |_| outcome.clone());
        let surface = ContactSurface::new(
            vec![ChoiceOption::new("consulting", "Consulting")],
            Vec::new(),
        );
        App::with_strategy(surface, Arc::new(strategy), success_surface)
    }

    fn render(app: &App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 36)).unwrap();
        terminal.draw(|frame| draw(frame, app, now)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_fields_and_submit() {
        let app = app(SubmissionOutcome::Success, SuccessSurface::Overlay);
        let output = render(&app, Instant::now());

        for label in ["Name", "Email", "Phone (optional)", "Service", "Message"] {
            assert!(output.contains(label), "missing {label}");
        }
        assert!(output.contains("Send Message"));
        assert!(output.contains("Select a service"));
        assert!(output.contains("simulated"));
    }

    #[tokio::test]
    async fn test_renders_inline_errors() {
        let mut app = app(SubmissionOutcome::Success, SuccessSurface::Overlay);
        app.controller.on_submit();
        let output = render(&app, Instant::now());

        assert!(output.contains("Name must be at least 2 characters long"));
        assert!(output.contains("Please enter a valid email address"));
        assert!(output.contains("Please select a service"));
    }

    #[tokio::test]
    async fn test_renders_overlay_and_toast() {
        let mut app = app(SubmissionOutcome::Success, SuccessSurface::Both);
        let now = Instant::now();
        let typed = [
            (ContactField::Name, "Al"),
            (ContactField::Email, "a@b.com"),
            (ContactField::Message, "Please contact me soon"),
        ];
        for (field, text) in typed {
            for ch in text.chars() {
                app.controller.on_input(field, FieldEdit::Insert(ch));
            }
        }
        app.controller
            .on_input(ContactField::Service, FieldEdit::NextOption);
        assert!(app.controller.on_submit());
        app.controller.wait_for_outcome(now).await;

        let output = render(&app, now + crate::state::TRANSITION);
        assert!(output.contains("Message Sent Successfully!"));
        assert!(output.contains("Form Submitted Successfully!"));
    }
}
