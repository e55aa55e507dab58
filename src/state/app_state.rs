//! Application state definitions

use super::forms::{ContactForm, FieldName, Form, FormInput};
use super::submission::{AttemptId, Settlement, Submission, SubmissionState};
use super::validation::{validate, ValidationErrors};
use std::collections::VecDeque;

/// Notice shown when the endpoint rejects a message or cannot be reached
pub const SUBMIT_FAILED_NOTICE: &str = "Failed to send message. Please try again.";

/// Why a submit trigger did not produce a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A request is already in flight
    Busy,
    /// The confirmation view is showing
    AlreadySubmitted,
    /// One or more fields failed validation
    Invalid,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    pub form: ContactForm,
    pub errors: ValidationErrors,
    pub submission: Submission,

    // Notices waiting to be acknowledged, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn submission_state(&self) -> SubmissionState {
        self.submission.state()
    }

    /// Busy guard for the submit control
    pub fn is_busy(&self) -> bool {
        self.submission.is_busy()
    }

    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Handle character input in the focused field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.form.input_char(c) {
            self.field_edited(field);
        }
    }

    /// Handle backspace in the focused field
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.form.backspace() {
            self.field_edited(field);
        }
    }

    /// An edit clears that field's error only; the rest wait for the next submit
    fn field_edited(&mut self, field: FieldName) {
        if self.errors.clear_field(field) {
            tracing::debug!("Cleared {} error after edit", field.key());
        }
    }

    /// Validate and, if the form is clean, start a new attempt.
    ///
    /// Returns the attempt id and the values to send.
    pub fn begin_submit(&mut self) -> Result<(AttemptId, FormInput), SubmitRejection> {
        match self.submission.state() {
            SubmissionState::Submitting => return Err(SubmitRejection::Busy),
            SubmissionState::Submitted => return Err(SubmitRejection::AlreadySubmitted),
            SubmissionState::Idle => {}
        }

        let input = self.form.to_input();
        let errors = validate(&input);
        if !errors.is_empty() {
            tracing::info!("Submit rejected: {} invalid field(s)", errors.len());
            self.errors = errors;
            return Err(SubmitRejection::Invalid);
        }

        self.errors.clear();
        let attempt = self
            .submission
            .begin()
            .ok_or(SubmitRejection::Busy)?;
        tracing::info!("Submitting contact message (attempt {attempt})");
        Ok((attempt, input))
    }

    /// Apply the outcome of a submission attempt.
    ///
    /// Success clears the form; failure keeps the values and queues the
    /// failure notice. Outcomes for stale attempts change nothing.
    pub fn finish_submit(&mut self, attempt: AttemptId, success: bool) -> Settlement {
        let settlement = self.submission.settle(attempt, success);
        match settlement {
            Settlement::Applied(SubmissionState::Submitted) => {
                tracing::info!("Contact message sent (attempt {attempt})");
                self.form.clear();
            }
            Settlement::Applied(_) => {
                tracing::warn!("Contact message failed (attempt {attempt})");
                self.push_error(SUBMIT_FAILED_NOTICE);
            }
            Settlement::Stale => {
                tracing::debug!("Discarding outcome of stale attempt {attempt}");
            }
        }
        settlement
    }

    /// Leave the confirmation view with an empty form.
    /// Returns false unless a message was just sent.
    pub fn reset(&mut self) -> bool {
        if !self.submission.reset() {
            return false;
        }
        self.form.clear();
        self.errors.clear();
        true
    }

    /// Queue a notice for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.error_queue.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The notice currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Acknowledge the current notice
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
