//! Slice criteria and cursor page types.

use ckr_domain::{ChangeAction, FeedbackId, FeedbackRequest, ReviewStatus, RiskLevel, TargetKind};
use serde::{Deserialize, Serialize};

/// Default page size when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Filtered, cursor-paginated query over the feedback queue.
///
/// Every filter is an optional set; `None` means "any". Results are ordered
/// by descending id and `cursor` (exclusive, the last-seen id) resumes a
/// previous page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceCriteria {
    /// Restrict to these review statuses
    pub statuses: Option<Vec<ReviewStatus>>,
    /// Restrict to these target kinds
    pub target_kinds: Option<Vec<TargetKind>>,
    /// Restrict to these risk levels
    pub risk_levels: Option<Vec<RiskLevel>>,
    /// Restrict to these change actions
    pub actions: Option<Vec<ChangeAction>>,
    /// Exclusive pagination cursor: the last id of the previous page
    pub cursor: Option<FeedbackId>,
    /// Maximum number of items to return; `0` means [`DEFAULT_PAGE_SIZE`]
    pub size: usize,
}

impl SliceCriteria {
    /// Unfiltered first page of the given size
    #[must_use]
    pub fn first(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Canonical view: requests awaiting first-stage (LLM) review
    #[must_use]
    pub fn pending_llm_review(
        target_kind: Option<TargetKind>,
        cursor: Option<FeedbackId>,
        size: usize,
    ) -> Self {
        Self {
            statuses: Some(vec![ReviewStatus::Pending]),
            target_kinds: target_kind.map(|k| vec![k]),
            cursor,
            size,
            ..Self::default()
        }
    }

    /// Canonical view: LLM-approved requests whose risk mandates a human
    /// decision
    #[must_use]
    pub fn awaiting_human_review(
        target_kind: Option<TargetKind>,
        cursor: Option<FeedbackId>,
        size: usize,
    ) -> Self {
        Self {
            statuses: Some(vec![ReviewStatus::LlmApproved]),
            target_kinds: target_kind.map(|k| vec![k]),
            risk_levels: Some(vec![RiskLevel::Medium, RiskLevel::High]),
            cursor,
            size,
            ..Self::default()
        }
    }

    /// Page size with the zero default applied. Stores page by this, never
    /// by the raw `size`, so a degenerate zero never produces an
    /// unadvanceable page.
    #[must_use]
    pub fn effective_size(&self) -> usize {
        if self.size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.size
        }
    }

    /// Whether a request passes every populated filter
    #[must_use]
    pub fn matches(&self, request: &FeedbackRequest) -> bool {
        fn in_set<T: PartialEq>(set: &Option<Vec<T>>, value: T) -> bool {
            match set {
                Some(values) => values.contains(&value),
                None => true,
            }
        }
        in_set(&self.statuses, request.status())
            && in_set(&self.target_kinds, request.target_kind())
            && in_set(&self.risk_levels, request.risk())
            && in_set(&self.actions, request.action())
    }
}

/// One page of the queue, most recent first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slice {
    /// Matching requests, descending id order
    pub items: Vec<FeedbackRequest>,
    /// Cursor for the next page; set only when `has_more`
    pub next_cursor: Option<FeedbackId>,
    /// Whether more matches exist past this page
    pub has_more: bool,
}

impl Slice {
    /// An empty page
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
            has_more: false,
        }
    }
}
