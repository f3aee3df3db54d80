//! Guarded transition table for the review workflow.
//!
//! The legality rules live here, in one auditable place, rather than scattered
//! across call sites. [`FeedbackRequest`](crate::request::FeedbackRequest)
//! consults this table before mutating.

use crate::error::TransitionError;
use crate::types::{ReviewAction, ReviewStatus, RiskLevel};

/// Validates a review action against the current status and risk, returning
/// the resulting status.
///
/// Risk guards:
/// - `merge` from `LLM_APPROVED` requires `SAFE` (auto-merge); from
///   `HUMAN_APPROVED` it is legal at any risk since a human already signed off
/// - `humanApprove`/`humanReject` require a risk that mandates human review
///   (`MEDIUM`/`HIGH`); `SAFE` requests never enter the human stage
///
/// # Errors
///
/// Returns [`TransitionError`] (without an id; callers attach one) for every
/// (status, risk, action) combination not in the table.
pub fn validate_transition(
    status: ReviewStatus,
    risk: RiskLevel,
    action: ReviewAction,
) -> Result<ReviewStatus, TransitionError> {
    use ReviewAction as A;
    use ReviewStatus as S;

    match (action, status) {
        (A::LlmApprove, S::Pending) => Ok(S::LlmApproved),
        (A::LlmReject, S::Pending) => Ok(S::LlmRejected),
        (A::HumanApprove, S::LlmApproved) if risk.requires_human_approval() => Ok(S::HumanApproved),
        (A::HumanReject, S::LlmApproved) if risk.requires_human_approval() => Ok(S::HumanRejected),
        (A::Merge, S::LlmApproved) if risk.is_auto_mergeable() => Ok(S::Merged),
        (A::Merge, S::HumanApproved) => Ok(S::Merged),
        _ => Err(TransitionError {
            id: None,
            status,
            risk,
            action,
        }),
    }
}

/// Enumerates the actions legal from a (status, risk) pair.
///
/// Derived from the same table as [`validate_transition`], so the two can
/// never disagree.
#[must_use]
pub fn allowed_actions(status: ReviewStatus, risk: RiskLevel) -> Vec<ReviewAction> {
    ReviewAction::ALL
        .into_iter()
        .filter(|action| validate_transition(status, risk, *action).is_ok())
        .collect()
}
