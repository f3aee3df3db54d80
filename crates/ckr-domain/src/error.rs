//! Domain error types.

use crate::ids::FeedbackId;
use crate::types::{ChangeAction, ReviewAction, ReviewStatus, RiskLevel};

/// A review action was requested from a status/risk combination that does not
/// permit it. The request is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "illegal transition{}: {action} not permitted from {status} at risk {risk}",
    .id.map(|i| format!(" for feedback {i}")).unwrap_or_default()
)]
pub struct TransitionError {
    /// Request identity, when already persisted
    pub id: Option<FeedbackId>,
    /// Status at the time of the attempt
    pub status: ReviewStatus,
    /// Immutable risk classification of the request
    pub risk: RiskLevel,
    /// The action that was denied
    pub action: ReviewAction,
}

impl TransitionError {
    /// Attach the request id for diagnostics
    #[must_use]
    pub fn with_id(mut self, id: Option<FeedbackId>) -> Self {
        self.id = id;
        self
    }
}

/// Structural violations when constructing or identifying a feedback request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// `Modify`/`Delete` proposals must name the entity they change
    #[error("target id is required for {0} feedback")]
    TargetIdRequired(ChangeAction),

    /// `Add` proposals create a new entity; a target id is meaningless
    #[error("target id must be absent for {0} feedback")]
    TargetIdForbidden(ChangeAction),

    /// `assign_id` called on a request that already has one
    #[error("feedback id already assigned: {0}")]
    IdAlreadyAssigned(FeedbackId),
}
