//! Contact form state and the submitted input value

use super::field::{FieldName, FormField};
use serde::Serialize;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The values sent to the contact endpoint.
///
/// `phone` is optional and is the empty string when not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Index of the submit button row, after the four input fields
pub const SUBMIT_ROW: usize = 4;

/// Contact form, kept in sync with every edit
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldName::Name),
            email: FormField::new(FieldName::Email),
            phone: FormField::new(FieldName::Phone),
            message: FormField::new(FieldName::Message),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Message => &self.message,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Message => &mut self.message,
        }
    }

    /// The focused input field, or None when the submit button has focus
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the submit button row is focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Append a character to the focused field.
    /// Returns the edited field, if any.
    pub fn input_char(&mut self, c: char) -> Option<FieldName> {
        let name = self.active_field_name()?;
        self.field_mut(name).push_char(c);
        Some(name)
    }

    /// Delete the last character of the focused field.
    /// Returns the edited field, if anything changed.
    pub fn backspace(&mut self) -> Option<FieldName> {
        let name = self.active_field_name()?;
        self.field_mut(name).pop_char().then_some(name)
    }

    /// Snapshot the current values
    pub fn to_input(&self) -> FormInput {
        FormInput {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }

    /// Empty every field and move focus back to the first one
    pub fn clear(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, phone, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::ALL.get(index).map(|name| self.field(*name))
    }
}
