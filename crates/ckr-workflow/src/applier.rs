//! Merge side-effect boundary.
//!
//! Applying a merged change to the knowledge base is someone else's job;
//! the workflow only emits a [`MergeOrder`] describing what was approved.

use async_trait::async_trait;
use ckr_domain::{ChangeAction, FeedbackId, TargetKind};
use thiserror::Error;

/// An approved change, ready to be applied to the knowledge base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOrder {
    /// The merged feedback request
    pub id: FeedbackId,
    /// Entity kind the change targets
    pub target_kind: TargetKind,
    /// Existing entity id for modify/delete; absent for add
    pub target_id: Option<u64>,
    /// What to do with the target
    pub action: ChangeAction,
    /// The validated JSON payload as submitted
    pub payload: String,
}

/// Failure reported by an applier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("merge apply failed: {0}")]
pub struct ApplyError(pub String);

/// Receives merge orders once a request reaches `MERGED`.
///
/// A failing applier does not undo the merge decision; the workflow keeps
/// the request merged and reports the failure to the caller.
#[async_trait]
pub trait MergeApplier: Send + Sync {
    /// Applies one approved change
    async fn apply(&self, order: &MergeOrder) -> Result<(), ApplyError>;
}

/// Applier that acknowledges every order without side effects
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopApplier;

#[async_trait]
impl MergeApplier for NoopApplier {
    async fn apply(&self, _order: &MergeOrder) -> Result<(), ApplyError> {
        Ok(())
    }
}
