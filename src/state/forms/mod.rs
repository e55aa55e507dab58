//! Form domain layer
//!
//! Field value objects and the contact form that owns them.

mod contact_form;
mod field;

pub use contact_form::{ContactForm, Form, FormInput};
pub use field::{FieldName, FormField};
