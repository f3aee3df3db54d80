//! Requests parked at interesting points of the review lifecycle.

use chrono::{TimeZone, Utc};
use ckr_domain::{ChangeAction, FeedbackRequest, RiskLevel, TargetKind};

use crate::payloads;

/// A fixed submission instant so fixtures compare deterministically
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn submitted_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// A safe, auto-mergeable submission: add a rule example
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn pending_safe_request() -> FeedbackRequest {
    FeedbackRequest::new_submission(
        TargetKind::RuleExample,
        None,
        ChangeAction::Add,
        payloads::add_rule_example(1),
        RiskLevel::Safe,
        submitted_at(),
    )
    .unwrap()
}

/// A medium-risk submission parked at `LLM_APPROVED`, awaiting a human
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn llm_approved_medium_request() -> FeedbackRequest {
    let mut request = FeedbackRequest::new_submission(
        TargetKind::CodingRule,
        Some(1),
        ChangeAction::Modify,
        payloads::modify_coding_rule(1),
        RiskLevel::Medium,
        submitted_at(),
    )
    .unwrap();
    request
        .llm_approve(Some("looks consistent".into()), submitted_at())
        .unwrap();
    request
}

/// A high-risk deletion at `Pending`
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn pending_high_risk_delete() -> FeedbackRequest {
    FeedbackRequest::new_submission(
        TargetKind::RuleExample,
        Some(1),
        ChangeAction::Delete,
        "{}".into(),
        RiskLevel::High,
        submitted_at(),
    )
    .unwrap()
}
