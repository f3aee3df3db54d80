//! End-to-end scenarios over the full review workflow.

use std::sync::Arc;

use async_trait::async_trait;
use ckr_domain::{ChangeAction, FeedbackId, ReviewAction, ReviewStatus, RiskLevel, TargetKind};
use ckr_store::{FeedbackStore, InMemoryFeedbackStore, StoreError};
use ckr_test_utils::{payloads, StaticDirectory};
use ckr_validation::default_validators;
use ckr_workflow::{
    ApplyError, MergeApplier, MergeOrder, NewFeedback, NoopApplier, ReviewWorkflow, WorkflowError,
};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

/// Applier that remembers every order it received
#[derive(Debug, Default)]
struct RecordingApplier {
    orders: Mutex<Vec<MergeOrder>>,
}

impl RecordingApplier {
    fn orders(&self) -> Vec<MergeOrder> {
        self.orders.lock().clone()
    }
}

#[async_trait]
impl MergeApplier for RecordingApplier {
    async fn apply(&self, order: &MergeOrder) -> Result<(), ApplyError> {
        self.orders.lock().push(order.clone());
        Ok(())
    }
}

/// Applier that always refuses
#[derive(Debug, Default)]
struct FailingApplier;

#[async_trait]
impl MergeApplier for FailingApplier {
    async fn apply(&self, _order: &MergeOrder) -> Result<(), ApplyError> {
        Err(ApplyError("knowledge base write timed out".into()))
    }
}

fn directory() -> StaticDirectory {
    StaticDirectory::new()
        .with_convention(1)
        .with_coding_rule(1)
        .with_rule_example(1)
        .with_checklist_item(1)
        .with_package_structure(1)
        .with_class_template(1)
        .with_arch_unit_test(1)
}

fn workflow_with(applier: Arc<dyn MergeApplier>) -> ReviewWorkflow {
    let validators = default_validators(Arc::new(directory())).unwrap();
    ReviewWorkflow::new(Arc::new(InMemoryFeedbackStore::new()), validators, applier)
}

fn add_example() -> NewFeedback {
    NewFeedback {
        target_kind: TargetKind::RuleExample,
        target_id: None,
        action: ChangeAction::Add,
        payload: payloads::add_rule_example(1),
    }
}

fn modify_rule() -> NewFeedback {
    NewFeedback {
        target_kind: TargetKind::CodingRule,
        target_id: Some(1),
        action: ChangeAction::Modify,
        payload: payloads::modify_coding_rule(1),
    }
}

fn delete_example() -> NewFeedback {
    NewFeedback {
        target_kind: TargetKind::RuleExample,
        target_id: Some(1),
        action: ChangeAction::Delete,
        payload: "{}".into(),
    }
}

#[tokio::test]
async fn safe_addition_auto_merges_after_llm_approval() {
    let applier = Arc::new(RecordingApplier::default());
    let workflow = workflow_with(applier.clone());

    let receipt = workflow.submit(add_example()).await.unwrap();
    assert_eq!(receipt.status, ReviewStatus::Pending);
    assert_eq!(receipt.risk, RiskLevel::Safe);

    workflow
        .process(receipt.id, ReviewAction::LlmApprove, None)
        .await
        .unwrap();
    let outcome = workflow
        .process(receipt.id, ReviewAction::Merge, None)
        .await
        .unwrap();

    assert_eq!(outcome.request.status(), ReviewStatus::Merged);
    assert!(outcome.apply_failure.is_none());

    let orders = applier.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, receipt.id);
    assert_eq!(orders[0].target_kind, TargetKind::RuleExample);
    assert_eq!(orders[0].action, ChangeAction::Add);
}

#[tokio::test]
async fn medium_modification_requires_human_before_merge() {
    let applier = Arc::new(RecordingApplier::default());
    let workflow = workflow_with(applier.clone());

    let receipt = workflow.submit(modify_rule()).await.unwrap();
    assert_eq!(receipt.risk, RiskLevel::Medium);

    workflow
        .process(receipt.id, ReviewAction::LlmApprove, None)
        .await
        .unwrap();

    // auto-merge is gated to safe proposals
    let err = workflow
        .process(receipt.id, ReviewAction::Merge, None)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::IllegalTransition(_)));
    assert!(applier.orders().is_empty());

    workflow
        .process(
            receipt.id,
            ReviewAction::HumanApprove,
            Some("scope is fine".into()),
        )
        .await
        .unwrap();
    let outcome = workflow
        .process(receipt.id, ReviewAction::Merge, None)
        .await
        .unwrap();

    assert_eq!(outcome.request.status(), ReviewStatus::Merged);
    assert_eq!(outcome.request.review_notes(), Some("scope is fine"));
    assert_eq!(applier.orders().len(), 1);
}

#[tokio::test]
async fn deletion_is_high_risk_and_human_rejectable() {
    let workflow = workflow_with(Arc::new(NoopApplier));

    let receipt = workflow.submit(delete_example()).await.unwrap();
    assert_eq!(receipt.risk, RiskLevel::High);

    workflow
        .process(receipt.id, ReviewAction::LlmApprove, None)
        .await
        .unwrap();
    let outcome = workflow
        .process(
            receipt.id,
            ReviewAction::HumanReject,
            Some("too destructive".into()),
        )
        .await
        .unwrap();
    assert_eq!(outcome.request.status(), ReviewStatus::HumanRejected);

    // terminal: nothing else applies
    for action in ReviewAction::ALL {
        let err = workflow.process(receipt.id, action, None).await.unwrap_err();
        assert!(matches!(err, WorkflowError::IllegalTransition(_)));
    }
}

#[tokio::test]
async fn every_kind_accepts_well_formed_payloads() {
    let workflow = workflow_with(Arc::new(NoopApplier));

    let cases = vec![
        (TargetKind::RuleExample, None, ChangeAction::Add, payloads::add_rule_example(1), RiskLevel::Safe),
        (TargetKind::RuleExample, Some(1), ChangeAction::Modify, payloads::modify_rule_example(1), RiskLevel::Safe),
        (TargetKind::ChecklistItem, None, ChangeAction::Add, payloads::add_checklist_item(1), RiskLevel::Safe),
        (TargetKind::ChecklistItem, Some(1), ChangeAction::Modify, payloads::modify_checklist_item(1), RiskLevel::Safe),
        (TargetKind::CodingRule, None, ChangeAction::Add, payloads::add_coding_rule(1), RiskLevel::Medium),
        (TargetKind::CodingRule, Some(1), ChangeAction::Modify, payloads::modify_coding_rule(1), RiskLevel::Medium),
        (TargetKind::ClassTemplate, None, ChangeAction::Add, payloads::add_class_template(1), RiskLevel::Medium),
        (TargetKind::ClassTemplate, Some(1), ChangeAction::Modify, payloads::modify_class_template(1), RiskLevel::Medium),
        (TargetKind::ArchUnitTest, None, ChangeAction::Add, payloads::add_arch_unit_test(1), RiskLevel::Medium),
        (TargetKind::ArchUnitTest, Some(1), ChangeAction::Modify, payloads::modify_arch_unit_test(1), RiskLevel::Medium),
    ];

    for (target_kind, target_id, action, payload, expected_risk) in cases {
        let receipt = workflow
            .submit(NewFeedback {
                target_kind,
                target_id,
                action,
                payload,
            })
            .await
            .unwrap();
        assert_eq!(receipt.status, ReviewStatus::Pending);
        assert_eq!(receipt.risk, expected_risk, "{target_kind} {action}");
    }
}

#[tokio::test]
async fn rejected_submissions_never_reach_the_queue() {
    let workflow = workflow_with(Arc::new(NoopApplier));

    // unknown parent
    let err = workflow
        .submit(NewFeedback {
            target_kind: TargetKind::RuleExample,
            target_id: None,
            action: ChangeAction::Add,
            payload: payloads::add_rule_example(99),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "CodingRule not found: 99");

    // modify of a rule that does not exist
    let err = workflow
        .submit(NewFeedback {
            target_kind: TargetKind::CodingRule,
            target_id: Some(99),
            action: ChangeAction::Modify,
            payload: payloads::modify_coding_rule(99),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "CodingRule not found for modification: 99");

    // delete without a target
    let err = workflow
        .submit(NewFeedback {
            target_kind: TargetKind::RuleExample,
            target_id: None,
            action: ChangeAction::Delete,
            payload: "{}".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Target ID is required");

    // malformed payload
    let err = workflow
        .submit(NewFeedback {
            target_kind: TargetKind::CodingRule,
            target_id: None,
            action: ChangeAction::Add,
            payload: "not json".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidPayload(_)));

    let pending = workflow.pending_llm_review(None, None, 10).await.unwrap();
    assert!(pending.items.is_empty());
}

#[tokio::test]
async fn unreachable_directory_blocks_submission() {
    let validators = default_validators(Arc::new(StaticDirectory::new().unavailable())).unwrap();
    let workflow = ReviewWorkflow::new(
        Arc::new(InMemoryFeedbackStore::new()),
        validators,
        Arc::new(NoopApplier),
    );

    let err = workflow.submit(add_example()).await.unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidPayload(_)));
    assert!(err.to_string().contains("knowledge directory unavailable"));
}

#[tokio::test]
async fn llm_rejection_is_terminal() {
    let workflow = workflow_with(Arc::new(NoopApplier));
    let receipt = workflow.submit(add_example()).await.unwrap();

    let outcome = workflow
        .process(receipt.id, ReviewAction::LlmReject, Some("duplicate".into()))
        .await
        .unwrap();
    assert_eq!(outcome.request.status(), ReviewStatus::LlmRejected);

    let err = workflow
        .process(receipt.id, ReviewAction::LlmApprove, None)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::IllegalTransition(_)));

    // the record stays queryable
    let row = workflow.get(receipt.id).await.unwrap();
    assert_eq!(row.review_notes(), Some("duplicate"));
}

#[tokio::test]
async fn apply_failure_keeps_the_merge_decision() {
    let workflow = workflow_with(Arc::new(FailingApplier));
    let receipt = workflow.submit(add_example()).await.unwrap();

    workflow
        .process(receipt.id, ReviewAction::LlmApprove, None)
        .await
        .unwrap();
    let outcome = workflow
        .process(receipt.id, ReviewAction::Merge, None)
        .await
        .unwrap();

    assert_eq!(outcome.request.status(), ReviewStatus::Merged);
    assert_eq!(
        outcome.apply_failure.as_deref(),
        Some("merge apply failed: knowledge base write timed out")
    );

    // persisted state agrees
    let row = workflow.get(receipt.id).await.unwrap();
    assert_eq!(row.status(), ReviewStatus::Merged);
}

#[tokio::test]
async fn review_views_partition_the_queue() {
    let workflow = workflow_with(Arc::new(NoopApplier));

    let safe = workflow.submit(add_example()).await.unwrap();
    let medium = workflow.submit(modify_rule()).await.unwrap();
    let high = workflow.submit(delete_example()).await.unwrap();

    let pending = workflow.pending_llm_review(None, None, 10).await.unwrap();
    assert_eq!(
        pending.items.iter().filter_map(|r| r.id()).collect::<Vec<_>>(),
        vec![high.id, medium.id, safe.id]
    );

    workflow
        .process(medium.id, ReviewAction::LlmApprove, None)
        .await
        .unwrap();
    workflow
        .process(high.id, ReviewAction::LlmApprove, None)
        .await
        .unwrap();
    workflow
        .process(safe.id, ReviewAction::LlmApprove, None)
        .await
        .unwrap();

    // safe-and-approved does not need a human; medium and high do
    let human = workflow.awaiting_human_review(None, None, 10).await.unwrap();
    assert_eq!(
        human.items.iter().filter_map(|r| r.id()).collect::<Vec<_>>(),
        vec![high.id, medium.id]
    );

    let by_kind = workflow
        .awaiting_human_review(Some(TargetKind::CodingRule), None, 10)
        .await
        .unwrap();
    assert_eq!(
        by_kind.items.iter().filter_map(|r| r.id()).collect::<Vec<_>>(),
        vec![medium.id]
    );

    // a human decision removes the request from the view
    workflow
        .process(medium.id, ReviewAction::HumanApprove, None)
        .await
        .unwrap();
    let human = workflow.awaiting_human_review(None, None, 10).await.unwrap();
    assert_eq!(
        human.items.iter().filter_map(|r| r.id()).collect::<Vec<_>>(),
        vec![high.id]
    );
}

#[tokio::test]
async fn duplicate_submissions_are_independent() {
    let workflow = workflow_with(Arc::new(NoopApplier));

    let first = workflow.submit(modify_rule()).await.unwrap();
    let second = workflow.submit(modify_rule()).await.unwrap();
    assert_ne!(first.id, second.id);

    workflow
        .process(first.id, ReviewAction::LlmReject, None)
        .await
        .unwrap();
    let row = workflow.get(second.id).await.unwrap();
    assert_eq!(row.status(), ReviewStatus::Pending);
}

#[tokio::test]
async fn unknown_ids_are_reported_as_not_found() {
    let workflow = workflow_with(Arc::new(NoopApplier));
    let missing = FeedbackId::from(404);

    let err = workflow.get(missing).await.unwrap_err();
    assert!(matches!(err, WorkflowError::NotFound(id) if id == missing));

    let err = workflow
        .process(missing, ReviewAction::LlmApprove, None)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::NotFound(id) if id == missing));
}

#[tokio::test]
async fn concurrent_reviewers_cannot_double_apply() {
    // drive the store directly to emulate a lost race
    let store = Arc::new(InMemoryFeedbackStore::new());
    let workflow = ReviewWorkflow::new(
        store.clone(),
        default_validators(Arc::new(directory())).unwrap(),
        Arc::new(NoopApplier),
    );

    let receipt = workflow.submit(add_example()).await.unwrap();
    let stale = store.find(receipt.id).await.unwrap().unwrap();
    let base = stale.updated_at();

    workflow
        .process(receipt.id, ReviewAction::LlmApprove, None)
        .await
        .unwrap();

    // a competing writer holding the pre-approval snapshot loses
    let mut competing = stale;
    competing
        .llm_reject(None, chrono::Utc::now())
        .unwrap();
    let err = store.update(&competing, base).await.unwrap_err();
    assert!(matches!(err, StoreError::StaleState { .. }));
}
