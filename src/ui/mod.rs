//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::{SubmissionState, ValidationErrors};
use components::render_error_dialog;
use ratatui::Frame;

/// Label on the submit button while a request is in flight
pub const SENDING_LABEL: &str = "Sending...";
/// Label on the submit button otherwise
pub const SUBMIT_LABEL: &str = "Submit";

/// Which view to show, derived from the submission state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Thank-you message with a control to send another
    Confirmation,
    /// The four-field form with inline errors
    Form {
        submit_label: &'static str,
        submit_enabled: bool,
    },
}

/// Pick the view for the current state.
///
/// The confirmation is never shown while field errors are present.
pub fn present(state: SubmissionState, errors: &ValidationErrors, busy: bool) -> Screen {
    match state {
        SubmissionState::Submitted if errors.is_empty() => Screen::Confirmation,
        _ => Screen::Form {
            submit_label: if busy { SENDING_LABEL } else { SUBMIT_LABEL },
            submit_enabled: !busy,
        },
    }
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    let screen = present(
        app.state.submission_state(),
        &app.state.errors,
        app.state.is_busy(),
    );
    match screen {
        Screen::Confirmation => {
            confirmation::draw(frame, main_area, app.state.submission.submitted_at())
        }
        Screen::Form {
            submit_label,
            submit_enabled,
        } => forms::draw_contact_form(frame, main_area, &app.state, submit_label, submit_enabled),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Failure notice is drawn last so it sits on top
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

    pub fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    /// Render with `draw_fn` into an off-screen terminal and return the text
    pub fn render(width: u16, height: u16, draw_fn: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw_fn).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }
}
