//! Form domain layer
//!
//! The state-and-validation core of the contact form. Nothing here knows
//! about the terminal; the UI reads snapshots and feeds edits back in.

mod field;
mod form_state;
mod validator;

pub use field::{FieldInput, FieldName, QueryType};
pub use form_state::{ContactForm, FieldErrors, FieldValues};
pub use validator::validate;
