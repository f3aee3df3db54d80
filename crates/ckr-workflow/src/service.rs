//! The review workflow service.

use std::sync::Arc;

use chrono::Utc;
use ckr_domain::{
    classify, ChangeAction, FeedbackId, FeedbackRequest, ReviewAction, ReviewStatus, RiskLevel,
    TargetKind,
};
use ckr_store::{FeedbackStore, Slice, SliceCriteria};
use ckr_validation::ValidatorRegistry;

use crate::applier::{MergeApplier, MergeOrder};
use crate::error::WorkflowError;

/// A change proposal as submitted by an agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    /// Entity kind the proposal targets
    pub target_kind: TargetKind,
    /// Existing entity id for modify/delete; must be absent for add
    pub target_id: Option<u64>,
    /// Proposed change action
    pub action: ChangeAction,
    /// JSON payload describing the change
    pub payload: String,
}

/// What the submitter gets back: the queued id plus the classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Store-issued identity
    pub id: FeedbackId,
    /// Always `Pending` on submission
    pub status: ReviewStatus,
    /// Assigned risk level
    pub risk: RiskLevel,
}

/// Result of processing one review action.
///
/// `apply_failure` is set when the action merged the request but the
/// applier could not carry the change out; the request stays merged.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// The request after the action
    pub request: FeedbackRequest,
    /// Applier failure notice, if any
    pub apply_failure: Option<String>,
}

/// Orchestrates the feedback review lifecycle end to end.
///
/// Stateless beyond its collaborators; clone-cheap via `Arc` handles.
pub struct ReviewWorkflow {
    store: Arc<dyn FeedbackStore>,
    validators: ValidatorRegistry,
    applier: Arc<dyn MergeApplier>,
}

impl ReviewWorkflow {
    /// Wires the workflow over its collaborators
    #[must_use]
    pub fn new(
        store: Arc<dyn FeedbackStore>,
        validators: ValidatorRegistry,
        applier: Arc<dyn MergeApplier>,
    ) -> Self {
        Self {
            store,
            validators,
            applier,
        }
    }

    /// Validates, classifies and queues a new proposal.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::InvalidPayload`] when the payload is malformed or a
    /// referenced entity does not exist, [`WorkflowError::Submission`] when
    /// the target id rule for the action is broken, or a store failure.
    #[tracing::instrument(skip(self, feedback), fields(kind = %feedback.target_kind, action = %feedback.action))]
    pub async fn submit(&self, feedback: NewFeedback) -> Result<SubmissionReceipt, WorkflowError> {
        self.validators
            .validate(
                feedback.target_kind,
                feedback.action,
                feedback.target_id,
                &feedback.payload,
            )
            .await?;
        let risk = classify(feedback.target_kind, feedback.action);
        let request = FeedbackRequest::new_submission(
            feedback.target_kind,
            feedback.target_id,
            feedback.action,
            feedback.payload,
            risk,
            Utc::now(),
        )?;
        let saved = self.store.save(request).await?;
        let id = saved.id().ok_or(ckr_store::StoreError::MissingId)?;
        tracing::info!(id = id.value(), %risk, "feedback queued");
        Ok(SubmissionReceipt {
            id,
            status: saved.status(),
            risk: saved.risk(),
        })
    }

    /// Applies one review action to a queued request.
    ///
    /// When the action lands the request in `MERGED`, the applier is invoked
    /// with a [`MergeOrder`]; an applier failure is reported in the outcome
    /// but never reverts the state.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::NotFound`] for unknown ids,
    /// [`WorkflowError::IllegalTransition`] for illegal actions, or a store
    /// failure including [`ckr_store::StoreError::StaleState`] when a
    /// concurrent reviewer won.
    #[tracing::instrument(skip(self, notes), fields(id = id.value(), %action))]
    pub async fn process(
        &self,
        id: FeedbackId,
        action: ReviewAction,
        notes: Option<String>,
    ) -> Result<ProcessOutcome, WorkflowError> {
        let mut request = self
            .store
            .find(id)
            .await?
            .ok_or(WorkflowError::NotFound(id))?;
        let base = request.updated_at();
        request.apply(action, notes, Utc::now())?;
        self.store.update(&request, base).await?;
        tracing::info!(status = %request.status(), "review action applied");

        let mut apply_failure = None;
        if request.status() == ReviewStatus::Merged {
            let order = MergeOrder {
                id,
                target_kind: request.target_kind(),
                target_id: request.target_id(),
                action: request.action(),
                payload: request.payload().to_owned(),
            };
            if let Err(e) = self.applier.apply(&order).await {
                tracing::warn!(error = %e, "merged but apply failed");
                apply_failure = Some(e.to_string());
            }
        }
        Ok(ProcessOutcome {
            request,
            apply_failure,
        })
    }

    /// Looks up one request.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::NotFound`] for unknown ids, or a store failure.
    pub async fn get(&self, id: FeedbackId) -> Result<FeedbackRequest, WorkflowError> {
        self.store
            .find(id)
            .await?
            .ok_or(WorkflowError::NotFound(id))
    }

    /// Requests awaiting the first-stage (LLM) verdict, most recent first.
    ///
    /// # Errors
    ///
    /// Store failures only.
    pub async fn pending_llm_review(
        &self,
        target_kind: Option<TargetKind>,
        cursor: Option<FeedbackId>,
        size: usize,
    ) -> Result<Slice, WorkflowError> {
        let criteria = SliceCriteria::pending_llm_review(target_kind, cursor, size);
        Ok(self.store.slice(&criteria).await?)
    }

    /// LLM-approved requests whose risk requires a human verdict.
    ///
    /// # Errors
    ///
    /// Store failures only.
    pub async fn awaiting_human_review(
        &self,
        target_kind: Option<TargetKind>,
        cursor: Option<FeedbackId>,
        size: usize,
    ) -> Result<Slice, WorkflowError> {
        let criteria = SliceCriteria::awaiting_human_review(target_kind, cursor, size);
        Ok(self.store.slice(&criteria).await?)
    }

    /// Arbitrary filtered page over the queue.
    ///
    /// # Errors
    ///
    /// Store failures only.
    pub async fn search(&self, criteria: &SliceCriteria) -> Result<Slice, WorkflowError> {
        Ok(self.store.slice(criteria).await?)
    }
}
