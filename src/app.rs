//! Application state and core logic

use crate::config::TuiConfig;
use crate::contact::{ContactClient, ContactClientTrait, SubmitError};
use crate::state::{AppState, AttemptId, SubmissionState, SubmitRejection};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Result of one submission attempt, sent back to the event loop
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub attempt: AttemptId,
    pub result: Result<(), SubmitError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where messages are posted, shown in the status bar
    pub endpoint: String,
    client: Arc<dyn ContactClientTrait>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App posting to the configured endpoint
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let endpoint = config.endpoint();
        let client = ContactClient::new(endpoint.clone())?;
        tracing::info!("Posting contact messages to {endpoint}");
        Ok(Self::with_client(Arc::new(client), endpoint))
    }

    /// Create an App around any contact client
    pub fn with_client(client: Arc<dyn ContactClientTrait>, endpoint: String) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            endpoint,
            client,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Failure notice is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.submission_state() {
            SubmissionState::Submitted => self.handle_confirmation_key(key),
            SubmissionState::Idle | SubmissionState::Submitting => self.handle_form_key(key),
        }
        Ok(())
    }

    /// Handle keys on the form view
    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_submit = self.state.form.is_submit_active();
        let multiline = self
            .state
            .form
            .active_field_name()
            .is_some_and(|field| field.is_multiline());

        match key.code {
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter if on_submit => self.submit(),
            KeyCode::Enter if multiline => self.state.form_input_char('\n'),
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Handle keys on the confirmation view
    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => {
                self.state.reset();
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Submit trigger: validate, then send at most one request
    fn submit(&mut self) {
        match self.state.begin_submit() {
            Ok((attempt, input)) => {
                let client = Arc::clone(&self.client);
                let tx = self.outcome_tx.clone();
                tokio::spawn(async move {
                    let result = client.submit(&input).await;
                    if tx.send(SubmissionOutcome { attempt, result }).is_err() {
                        tracing::debug!("App closed before attempt {attempt} settled");
                    }
                });
            }
            Err(SubmitRejection::Busy) => {
                tracing::debug!("Submit ignored: a message is already being sent");
            }
            Err(SubmitRejection::AlreadySubmitted) => {
                tracing::debug!("Submit ignored: message already sent");
            }
            // Field errors are rendered inline
            Err(SubmitRejection::Invalid) => {}
        }
    }

    /// Apply every outcome that has arrived since the last tick
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        if let Err(err) = &outcome.result {
            tracing::warn!("Attempt {} failed: {err}", outcome.attempt);
        }
        self.state
            .finish_submit(outcome.attempt, outcome.result.is_ok());
    }
}
