//! Trait abstraction for submission delivery to enable mocking in tests

use super::Submission;

/// Receiver for validated form submissions, enabling mocking in tests
///
/// The controller calls `deliver` exactly once per valid submit, with the
/// snapshot taken before the form reset.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Accept one validated submission
    fn deliver(&mut self, submission: Submission);
}
