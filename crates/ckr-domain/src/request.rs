//! The feedback request aggregate.

use crate::error::{RequestError, TransitionError};
use crate::ids::FeedbackId;
use crate::state_machine;
use crate::types::{ChangeAction, ReviewAction, ReviewStatus, RiskLevel, TargetKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A queued proposal to add, modify, or delete a piece of convention
/// knowledge.
///
/// Mutation happens only through [`FeedbackRequest::apply`] (and its named
/// wrappers), which consult the transition table before touching state.
/// Transitions replace `status` and optionally `review_notes` and touch
/// `updated_at`; they never alter the payload, target, action, or risk.
/// Terminal requests are retained forever for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    id: Option<FeedbackId>,
    target_kind: TargetKind,
    target_id: Option<u64>,
    action: ChangeAction,
    payload: String,
    status: ReviewStatus,
    risk: RiskLevel,
    review_notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl FeedbackRequest {
    /// Constructs a new, unpersisted request in `PENDING` status.
    ///
    /// The risk level is fixed here, at submission time, and never
    /// recomputed.
    ///
    /// # Errors
    ///
    /// [`RequestError::TargetIdRequired`] when a `Modify`/`Delete` proposal
    /// omits its target, [`RequestError::TargetIdForbidden`] when an `Add`
    /// proposal carries one.
    pub fn new_submission(
        target_kind: TargetKind,
        target_id: Option<u64>,
        action: ChangeAction,
        payload: String,
        risk: RiskLevel,
        now: DateTime<Utc>,
    ) -> Result<Self, RequestError> {
        match (action.requires_target_id(), target_id) {
            (true, None) => return Err(RequestError::TargetIdRequired(action)),
            (false, Some(_)) => return Err(RequestError::TargetIdForbidden(action)),
            _ => {}
        }
        Ok(Self {
            id: None,
            target_kind,
            target_id,
            action,
            payload,
            status: ReviewStatus::Pending,
            risk,
            review_notes: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restores a persisted request without re-running submission checks
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn reconstitute(
        id: FeedbackId,
        target_kind: TargetKind,
        target_id: Option<u64>,
        action: ChangeAction,
        payload: String,
        status: ReviewStatus,
        risk: RiskLevel,
        review_notes: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            target_kind,
            target_id,
            action,
            payload,
            status,
            risk,
            review_notes,
            created_at,
            updated_at,
        }
    }

    /// Assigns the store-issued identity after first save.
    ///
    /// # Errors
    ///
    /// [`RequestError::IdAlreadyAssigned`] when called twice.
    pub fn assign_id(&mut self, id: FeedbackId) -> Result<(), RequestError> {
        if let Some(existing) = self.id {
            return Err(RequestError::IdAlreadyAssigned(existing));
        }
        self.id = Some(id);
        Ok(())
    }

    /// Applies a review action, moving the request along the transition
    /// graph.
    ///
    /// `notes` replaces the stored review notes when present; it is left
    /// untouched otherwise.
    ///
    /// # Errors
    ///
    /// [`TransitionError`] when the action is not legal from the current
    /// status/risk; the request is left unchanged.
    pub fn apply(
        &mut self,
        action: ReviewAction,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), TransitionError> {
        let next = state_machine::validate_transition(self.status, self.risk, action)
            .map_err(|e| e.with_id(self.id))?;
        self.status = next;
        if notes.is_some() {
            self.review_notes = notes;
        }
        self.updated_at = now;
        Ok(())
    }

    /// `PENDING → LLM_APPROVED`
    ///
    /// # Errors
    ///
    /// [`TransitionError`] outside `PENDING`.
    pub fn llm_approve(
        &mut self,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), TransitionError> {
        self.apply(ReviewAction::LlmApprove, notes, now)
    }

    /// `PENDING → LLM_REJECTED` (terminal)
    ///
    /// # Errors
    ///
    /// [`TransitionError`] outside `PENDING`.
    pub fn llm_reject(
        &mut self,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), TransitionError> {
        self.apply(ReviewAction::LlmReject, notes, now)
    }

    /// `LLM_APPROVED → HUMAN_APPROVED`, only when risk mandates human review
    ///
    /// # Errors
    ///
    /// [`TransitionError`] outside `LLM_APPROVED` or at `SAFE` risk.
    pub fn human_approve(
        &mut self,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), TransitionError> {
        self.apply(ReviewAction::HumanApprove, notes, now)
    }

    /// `LLM_APPROVED → HUMAN_REJECTED` (terminal), same risk condition as
    /// [`FeedbackRequest::human_approve`]
    ///
    /// # Errors
    ///
    /// [`TransitionError`] outside `LLM_APPROVED` or at `SAFE` risk.
    pub fn human_reject(
        &mut self,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), TransitionError> {
        self.apply(ReviewAction::HumanReject, notes, now)
    }

    /// `LLM_APPROVED (SAFE) → MERGED` or `HUMAN_APPROVED → MERGED` (terminal)
    ///
    /// # Errors
    ///
    /// [`TransitionError`] when auto-merge is not permitted and no human has
    /// approved.
    pub fn merge(&mut self, now: DateTime<Utc>) -> Result<(), TransitionError> {
        self.apply(ReviewAction::Merge, None, now)
    }

    // === Queries ===

    /// True until the store assigns an id
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// LLM-approved and safe enough to merge without a human
    #[must_use]
    pub fn can_auto_merge(&self) -> bool {
        self.status == ReviewStatus::LlmApproved && self.risk.is_auto_mergeable()
    }

    /// LLM-approved and waiting on a human decision
    #[must_use]
    pub fn requires_human_review(&self) -> bool {
        self.status == ReviewStatus::LlmApproved && self.risk.requires_human_approval()
    }

    /// True once no further transition is possible
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Actions currently legal for this request
    #[must_use]
    pub fn allowed_actions(&self) -> Vec<ReviewAction> {
        state_machine::allowed_actions(self.status, self.risk)
    }

    // === Accessors ===

    /// Store-assigned identity, absent before first save
    #[must_use]
    pub fn id(&self) -> Option<FeedbackId> {
        self.id
    }

    /// Kind of entity the change applies to
    #[must_use]
    pub fn target_kind(&self) -> TargetKind {
        self.target_kind
    }

    /// Identity of the entity being modified/deleted; absent for `Add`
    #[must_use]
    pub fn target_id(&self) -> Option<u64> {
        self.target_id
    }

    /// Proposed change action
    #[must_use]
    pub fn action(&self) -> ChangeAction {
        self.action
    }

    /// Opaque serialized change description
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Current review status
    #[must_use]
    pub fn status(&self) -> ReviewStatus {
        self.status
    }

    /// Risk classification, fixed at submission
    #[must_use]
    pub fn risk(&self) -> RiskLevel {
        self.risk
    }

    /// Reviewer rationale, if any was attached
    #[must_use]
    pub fn review_notes(&self) -> Option<&str> {
        self.review_notes.as_deref()
    }

    /// Submission time
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the last sanctioned mutation
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn t1() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 5, 0).unwrap()
    }

    fn pending(risk: RiskLevel) -> FeedbackRequest {
        FeedbackRequest::new_submission(
            TargetKind::RuleExample,
            None,
            ChangeAction::Add,
            "{\"ruleId\":1}".to_owned(),
            risk,
            t0(),
        )
        .unwrap()
    }

    #[test]
    fn add_rejects_target_id() {
        let err = FeedbackRequest::new_submission(
            TargetKind::CodingRule,
            Some(3),
            ChangeAction::Add,
            "{}".to_owned(),
            RiskLevel::Medium,
            t0(),
        )
        .unwrap_err();
        assert_eq!(err, RequestError::TargetIdForbidden(ChangeAction::Add));
    }

    #[test]
    fn modify_requires_target_id() {
        let err = FeedbackRequest::new_submission(
            TargetKind::CodingRule,
            None,
            ChangeAction::Modify,
            "{}".to_owned(),
            RiskLevel::Medium,
            t0(),
        )
        .unwrap_err();
        assert_eq!(err, RequestError::TargetIdRequired(ChangeAction::Modify));
    }

    #[test]
    fn assign_id_is_single_shot() {
        let mut request = pending(RiskLevel::Safe);
        assert!(request.is_new());
        request.assign_id(FeedbackId(1)).unwrap();
        assert!(!request.is_new());
        assert_eq!(
            request.assign_id(FeedbackId(2)),
            Err(RequestError::IdAlreadyAssigned(FeedbackId(1)))
        );
    }

    #[test]
    fn safe_path_auto_merges() {
        let mut request = pending(RiskLevel::Safe);
        request.llm_approve(Some("looks good".into()), t1()).unwrap();
        assert!(request.can_auto_merge());
        request.merge(t1()).unwrap();
        assert_eq!(request.status(), ReviewStatus::Merged);
        assert!(request.is_terminal());
    }

    #[test]
    fn medium_path_needs_human() {
        let mut request = pending(RiskLevel::Medium);
        request.llm_approve(None, t1()).unwrap();
        assert!(request.requires_human_review());
        assert!(request.merge(t1()).is_err());
        request.human_approve(Some("approved".into()), t1()).unwrap();
        request.merge(t1()).unwrap();
        assert_eq!(request.status(), ReviewStatus::Merged);
    }

    #[test]
    fn transitions_touch_only_status_notes_and_updated_at() {
        let mut request = pending(RiskLevel::Safe);
        let payload_before = request.payload().to_owned();
        request.llm_approve(Some("note".into()), t1()).unwrap();
        assert_eq!(request.payload(), payload_before);
        assert_eq!(request.risk(), RiskLevel::Safe);
        assert_eq!(request.created_at(), t0());
        assert_eq!(request.updated_at(), t1());
        assert_eq!(request.review_notes(), Some("note"));
    }

    #[test]
    fn failed_transition_leaves_request_unchanged() {
        let mut request = pending(RiskLevel::Safe);
        let before = request.clone();
        assert!(request.human_approve(Some("nope".into()), t1()).is_err());
        assert_eq!(request, before);
    }

    #[test]
    fn notes_survive_transition_without_new_notes() {
        let mut request = pending(RiskLevel::Safe);
        request.llm_approve(Some("rationale".into()), t1()).unwrap();
        request.merge(t1()).unwrap();
        assert_eq!(request.review_notes(), Some("rationale"));
    }
}
