//! Client module for the contact endpoint

mod client;
mod error;
mod traits;

pub use client::{ContactClient, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use traits::ContactClientTrait;

#[cfg(test)]
pub use traits::MockContactClientTrait;
