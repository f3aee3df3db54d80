//! Closed enumerations of the review workflow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of knowledge entity a feedback request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetKind {
    /// Good/bad code example attached to a coding rule
    RuleExample,
    /// Class skeleton template under a package structure
    ClassTemplate,
    /// Coding rule under a convention
    CodingRule,
    /// Review checklist item attached to a coding rule
    ChecklistItem,
    /// Generated ArchUnit test under a package structure
    ArchUnitTest,
}

impl TargetKind {
    /// Every kind, in declaration order. Used for exhaustive validator
    /// registration checks.
    pub const ALL: [TargetKind; 5] = [
        TargetKind::RuleExample,
        TargetKind::ClassTemplate,
        TargetKind::CodingRule,
        TargetKind::ChecklistItem,
        TargetKind::ArchUnitTest,
    ];

    /// Entity name as it appears in validation messages
    #[must_use]
    pub fn entity_name(self) -> &'static str {
        match self {
            TargetKind::RuleExample => "RuleExample",
            TargetKind::ClassTemplate => "ClassTemplate",
            TargetKind::CodingRule => "CodingRule",
            TargetKind::ChecklistItem => "ChecklistItem",
            TargetKind::ArchUnitTest => "ArchUnitTest",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity_name())
    }
}

/// Kind of change a feedback request proposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeAction {
    /// Create a new entity under an existing parent
    Add,
    /// Replace fields of an existing entity
    Modify,
    /// Remove an existing entity
    Delete,
}

impl ChangeAction {
    /// True for [`ChangeAction::Add`]
    #[must_use]
    pub fn is_add(self) -> bool {
        matches!(self, ChangeAction::Add)
    }

    /// True for actions that reference an existing target
    /// ([`ChangeAction::Modify`] and [`ChangeAction::Delete`])
    #[must_use]
    pub fn requires_target_id(self) -> bool {
        !self.is_add()
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeAction::Add => "ADD",
            ChangeAction::Modify => "MODIFY",
            ChangeAction::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// Risk classification controlling merge eligibility.
///
/// Ordered: `Safe < Medium < High`. The classifier combines kind and action
/// contributions by taking the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Low-impact additive content; auto-merges after LLM approval
    Safe,
    /// Structural artifact; human sign-off required before merge
    Medium,
    /// Destructive or otherwise escalated change; human sign-off required
    High,
}

impl RiskLevel {
    /// Whether an LLM-approved request at this risk may merge without a human
    #[must_use]
    pub fn is_auto_mergeable(self) -> bool {
        matches!(self, RiskLevel::Safe)
    }

    /// Whether this risk mandates the human review stage
    #[must_use]
    pub fn requires_human_approval(self) -> bool {
        !self.is_auto_mergeable()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// Review lifecycle state of a feedback request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    /// Awaiting first-stage (LLM) review
    Pending,
    /// Passed LLM review
    LlmApproved,
    /// Rejected at LLM review; terminal
    LlmRejected,
    /// Passed human review
    HumanApproved,
    /// Rejected at human review; terminal
    HumanRejected,
    /// Approved and handed to the merge applier; terminal
    Merged,
}

impl ReviewStatus {
    /// Every status, in declaration order
    pub const ALL: [ReviewStatus; 6] = [
        ReviewStatus::Pending,
        ReviewStatus::LlmApproved,
        ReviewStatus::LlmRejected,
        ReviewStatus::HumanApproved,
        ReviewStatus::HumanRejected,
        ReviewStatus::Merged,
    ];

    /// True once no further transition is possible
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ReviewStatus::LlmRejected | ReviewStatus::HumanRejected | ReviewStatus::Merged
        )
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReviewStatus::Pending => "PENDING",
            ReviewStatus::LlmApproved => "LLM_APPROVED",
            ReviewStatus::LlmRejected => "LLM_REJECTED",
            ReviewStatus::HumanApproved => "HUMAN_APPROVED",
            ReviewStatus::HumanRejected => "HUMAN_REJECTED",
            ReviewStatus::Merged => "MERGED",
        };
        f.write_str(s)
    }
}

/// Review action requested against a queued feedback request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewAction {
    /// First-stage approval by the automated reviewer
    LlmApprove,
    /// First-stage rejection by the automated reviewer
    LlmReject,
    /// Second-stage approval by a human reviewer
    HumanApprove,
    /// Second-stage rejection by a human reviewer
    HumanReject,
    /// Final transition handing the payload to the applier
    Merge,
}

impl ReviewAction {
    /// Every action, in declaration order
    pub const ALL: [ReviewAction; 5] = [
        ReviewAction::LlmApprove,
        ReviewAction::LlmReject,
        ReviewAction::HumanApprove,
        ReviewAction::HumanReject,
        ReviewAction::Merge,
    ];
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReviewAction::LlmApprove => "llmApprove",
            ReviewAction::LlmReject => "llmReject",
            ReviewAction::HumanApprove => "humanApprove",
            ReviewAction::HumanReject => "humanReject",
            ReviewAction::Merge => "merge",
        };
        f.write_str(s)
    }
}
