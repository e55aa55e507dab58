//! Errors returned when delivering a contact message

use thiserror::Error;

/// Ways a submission can fail.
///
/// Both variants are shown to the user as the same generic notice; the
/// detail only reaches the log.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a status outside 200-299
    #[error("Contact endpoint rejected the message with status {status}")]
    Rejected { status: u16 },

    /// The request never got a response
    #[error("Failed to reach contact endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}
