//! Store error types.

use ckr_domain::FeedbackId;

/// Failures raised by a feedback store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No request with the given id
    #[error("feedback not found: {0}")]
    NotFound(FeedbackId),

    /// `save` called with a request that already has an id
    #[error("feedback {0} is already persisted")]
    AlreadyPersisted(FeedbackId),

    /// `update` called with an unpersisted request
    #[error("feedback request has no id; save it first")]
    MissingId,

    /// The request changed since it was loaded; re-read and retry.
    ///
    /// This is the per-id serialization signal: of two concurrent conflicting
    /// review actions, exactly one observes it.
    #[error("stale write for feedback {id}: modified concurrently")]
    StaleState {
        /// Request whose optimistic check failed
        id: FeedbackId,
    },

    /// Backend-specific failure (I/O, connection, ...)
    #[error("storage backend failure: {0}")]
    Backend(String),
}
