//! Risk classification policy.
//!
//! Each target kind carries an intrinsic risk, each change action carries its
//! own contribution, and the effective risk is the maximum of the two. Deletes
//! therefore escalate to `HIGH` regardless of kind, while for additive and
//! corrective changes the kind risk governs.

use crate::types::{ChangeAction, RiskLevel, TargetKind};

/// Intrinsic risk of the entity kind being changed
#[must_use]
pub fn kind_risk(kind: TargetKind) -> RiskLevel {
    match kind {
        // Low-impact additive content
        TargetKind::RuleExample | TargetKind::ChecklistItem => RiskLevel::Safe,
        // Structural artifacts
        TargetKind::CodingRule | TargetKind::ClassTemplate | TargetKind::ArchUnitTest => {
            RiskLevel::Medium
        }
    }
}

/// Risk contribution of the change action itself
#[must_use]
pub fn action_risk(action: ChangeAction) -> RiskLevel {
    match action {
        ChangeAction::Add | ChangeAction::Modify => RiskLevel::Safe,
        ChangeAction::Delete => RiskLevel::High,
    }
}

/// Effective risk of a proposed change. Pure, total, and deterministic over
/// the closed enumerations; computed exactly once at submission time.
#[must_use]
pub fn classify(kind: TargetKind, action: ChangeAction) -> RiskLevel {
    kind_risk(kind).max(action_risk(action))
}
