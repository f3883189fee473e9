use async_trait::async_trait;
use thiserror::Error;

use crate::models::Draft;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// `submit()` was called from a step other than Review.
    #[error("submission is only possible from the review step")]
    NotAtReview,

    /// A submission for this draft is already in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// The receiving service refused or failed to accept the draft.
    /// The draft and the store are left intact so the user can retry.
    #[error("submission failed: {0}")]
    Rejected(String),
}

/// Outbound boundary for a completed draft.
///
/// The wizard calls this with a draft that has already passed every step's
/// validation; the client owns transport, retries and authentication. On
/// `Ok` the wizard clears the draft store, so the caller is expected to
/// leave the form.
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn submit(&self, draft: &Draft) -> Result<(), SubmitError>;
}
