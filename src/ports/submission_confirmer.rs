//! Submission Confirmer Port - Explicit user consent before submitting.

use async_trait::async_trait;

use crate::domain::interview::Process;

/// Asks the user to confirm a submission.
#[async_trait]
pub trait SubmissionConfirmer: Send + Sync {
    /// Returns true if the user agreed to submit `process`.
    async fn confirm(&self, process: &Process) -> bool;
}

#[async_trait]
impl<F> SubmissionConfirmer for F
where
    F: Fn(&Process) -> bool + Send + Sync,
{
    async fn confirm(&self, process: &Process) -> bool {
        self(process)
    }
}
