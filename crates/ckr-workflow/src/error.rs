//! Workflow error type.

use ckr_domain::{FeedbackId, RequestError, TransitionError};
use ckr_store::StoreError;
use ckr_validation::DispatchError;
use thiserror::Error;

/// Everything that can go wrong while submitting or reviewing feedback
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The payload or its parent references failed validation
    #[error(transparent)]
    InvalidPayload(#[from] DispatchError),

    /// The submission itself was malformed
    #[error(transparent)]
    Submission(#[from] RequestError),

    /// The requested review action is not legal from the current state
    #[error(transparent)]
    IllegalTransition(#[from] TransitionError),

    /// No feedback request with this id exists
    #[error("feedback not found: {0}")]
    NotFound(FeedbackId),

    /// The store rejected the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}
