//! Submission delivery: what happens to a snapshot after a valid submit

mod session_log;
mod traits;

pub use session_log::SessionLog;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;

use crate::state::FieldValues;
use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

/// A validated form snapshot on its way to the application layer
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    /// Reference id shown to the user after sending
    pub reference: Uuid,
    pub received_at: DateTime<Local>,
    pub values: FieldValues,
}

impl Submission {
    pub fn new(values: FieldValues) -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Local::now(),
            values,
        }
    }

    /// Short form of the reference id for the success toast
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_keeps_the_snapshot_intact() {
        let values = FieldValues {
            first_name: "Ada".to_string(),
            consent: true,
            ..FieldValues::default()
        };
        let submission = Submission::new(values.clone());
        assert_eq!(submission.values, values);
    }

    #[test]
    fn test_references_are_unique_per_submission() {
        let a = Submission::new(FieldValues::default());
        let b = Submission::new(FieldValues::default());
        assert_ne!(a.reference, b.reference);
    }

    #[test]
    fn test_short_reference_is_eight_hex_chars() {
        let submission = Submission::new(FieldValues::default());
        let short = submission.short_reference();
        assert_eq!(short.len(), 8);
        assert!(short.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
