//! Structured-log sink for the current session

use super::{Submission, SubmissionSink};

/// Default sink used by the binary: emits one structured log event per
/// submission. Nothing is written to disk or the network.
#[derive(Debug, Default)]
pub struct SessionLog;

impl SessionLog {
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionSink for SessionLog {
    fn deliver(&mut self, submission: Submission) {
        tracing::info!(
            reference = %submission.reference,
            query = %submission.values.query,
            "contact form submitted"
        );
        tracing::debug!(
            snapshot = %serde_json::to_string(&submission).unwrap_or_default(),
            "submission snapshot"
        );
    }
}
