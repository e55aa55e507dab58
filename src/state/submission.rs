//! Submission state machine
//!
//! Idle → Submitting → Submitted, with failures falling back to Idle.
//! Each request is tagged with an attempt id so a late outcome from an
//! earlier attempt can be told apart from the one currently in flight.

use chrono::{DateTime, Local};

/// Tag for one submission that reached the network
pub type AttemptId = u64;

/// Where the form is in its submit lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Submitting => "Sending message...",
            Self::Submitted => "Message sent",
        }
    }
}

/// Result of handing an outcome to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The outcome belonged to the in-flight attempt and moved the state
    Applied(SubmissionState),
    /// The outcome was for an attempt that is no longer in flight
    Stale,
}

#[derive(Debug, Default)]
pub struct Submission {
    state: SubmissionState,
    last_attempt: AttemptId,
    in_flight: Option<AttemptId>,
    submitted_at: Option<DateTime<Local>>,
}

impl Submission {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// True while a request is in flight
    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Local time the last message was accepted
    pub fn submitted_at(&self) -> Option<DateTime<Local>> {
        self.submitted_at
    }

    /// Enter Submitting and hand out a fresh attempt id.
    /// Returns None unless the form is Idle.
    pub fn begin(&mut self) -> Option<AttemptId> {
        if self.state != SubmissionState::Idle {
            return None;
        }
        self.last_attempt += 1;
        self.in_flight = Some(self.last_attempt);
        self.state = SubmissionState::Submitting;
        Some(self.last_attempt)
    }

    /// Settle an attempt. Outcomes for anything but the in-flight attempt
    /// leave the state untouched.
    pub fn settle(&mut self, attempt: AttemptId, success: bool) -> Settlement {
        if self.in_flight != Some(attempt) {
            return Settlement::Stale;
        }
        self.in_flight = None;
        self.state = if success {
            self.submitted_at = Some(Local::now());
            SubmissionState::Submitted
        } else {
            SubmissionState::Idle
        };
        Settlement::Applied(self.state)
    }

    /// Leave the confirmation view. Returns false unless Submitted.
    pub fn reset(&mut self) -> bool {
        if self.state != SubmissionState::Submitted {
            return false;
        }
        self.state = SubmissionState::Idle;
        self.submitted_at = None;
        true
    }
}
