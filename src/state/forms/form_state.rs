//! Contact form state: current values, current errors, submit transition

use super::field::{FieldInput, FieldName};
use super::validator;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-field error messages; a key is present iff that field is invalid
pub type FieldErrors = BTreeMap<FieldName, String>;

/// Current value of every field
///
/// `Default` is the empty form: empty strings and unchecked consent. The
/// query value is the stored radio label (`""` until one is picked).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub query: String,
    pub message: String,
    pub consent: bool,
}

impl FieldValues {
    /// Text content of a field (empty for the consent checkbox)
    pub fn text(&self, name: FieldName) -> &str {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Query => &self.query,
            FieldName::Message => &self.message,
            FieldName::Consent => "",
        }
    }
}

/// The form's single source of truth: one `FieldValues` plus one
/// `FieldErrors`, mutated only through the methods below.
///
/// Errors refresh on submit only; edits never re-validate, so the user gets
/// no feedback until they attempt to send.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: FieldValues,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error message for one field, if it failed the last submit
    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(&name).map(String::as_str)
    }

    /// Apply one field edit. Errors are left untouched.
    ///
    /// Consent takes a `Flag`, every other field takes `Text`; a mismatched
    /// payload is dropped, since the collaborator contract rules it out.
    pub fn set_field(&mut self, name: FieldName, input: FieldInput) {
        match (name, input) {
            (FieldName::FirstName, FieldInput::Text(value)) => self.values.first_name = value,
            (FieldName::LastName, FieldInput::Text(value)) => self.values.last_name = value,
            (FieldName::Email, FieldInput::Text(value)) => self.values.email = value,
            (FieldName::Query, FieldInput::Text(value)) => self.values.query = value,
            (FieldName::Message, FieldInput::Text(value)) => self.values.message = value,
            (FieldName::Consent, FieldInput::Flag(value)) => self.values.consent = value,
            (name, input) => {
                tracing::warn!(field = name.key(), ?input, "ignoring mismatched field input");
            }
        }
    }

    /// Validate and, when clean, hand a snapshot to `on_success`.
    ///
    /// The validation result always replaces the stored errors. On success
    /// the callback runs exactly once with the submitted values and the form
    /// returns to the empty state; on failure the values stay put so the
    /// user can correct them in place. Returns whether the submit went
    /// through.
    pub fn submit<F>(&mut self, on_success: F) -> bool
    where
        F: FnOnce(FieldValues),
    {
        self.errors = validator::validate(&self.values);
        if !self.errors.is_empty() {
            return false;
        }
        let snapshot = std::mem::take(&mut self.values);
        on_success(snapshot);
        true
    }

    /// Back to the created state: default values, no errors
    pub fn reset(&mut self) {
        self.values = FieldValues::default();
        self.errors.clear();
    }
}
