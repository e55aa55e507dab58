//! Trait abstraction for the contact client to enable mocking in tests

use super::error::SubmitError;
use crate::state::FormInput;
use async_trait::async_trait;

/// Trait for contact endpoint operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactClientTrait: Send + Sync {
    /// Deliver one message. Makes exactly one request and never retries.
    async fn submit(&self, input: &FormInput) -> Result<(), SubmitError>;
}
