//! Feedback queue persistence contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ckr_domain::{FeedbackId, FeedbackRequest};

use crate::criteria::{Slice, SliceCriteria};
use crate::error::StoreError;

/// Append-only store for feedback requests.
///
/// Rows are never deleted; rejected and merged requests stay queryable as a
/// review trail. Identity is issued by the store on first save and is
/// monotonically increasing, which is what makes descending-id cursor
/// pagination stable.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persists a new submission, issuing its id.
    ///
    /// # Errors
    ///
    /// [`StoreError::AlreadyPersisted`] when the request already carries an
    /// id.
    async fn save(&self, request: FeedbackRequest) -> Result<FeedbackRequest, StoreError>;

    /// Looks up a request by id.
    async fn find(&self, id: FeedbackId) -> Result<Option<FeedbackRequest>, StoreError>;

    /// Replaces a persisted request, guarded by the `updated_at` the caller
    /// loaded it with.
    ///
    /// # Errors
    ///
    /// [`StoreError::MissingId`] for unsaved requests,
    /// [`StoreError::NotFound`] for unknown ids and
    /// [`StoreError::StaleState`] when the stored row changed since `base`
    /// was read.
    async fn update(
        &self,
        request: &FeedbackRequest,
        base: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Returns one cursor page of requests matching `criteria`, most recent
    /// first.
    async fn slice(&self, criteria: &SliceCriteria) -> Result<Slice, StoreError>;
}
