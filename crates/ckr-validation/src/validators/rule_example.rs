//! Rule example payload validation.
//!
//! - Add: parent `CodingRule` must exist
//! - Modify/Delete: the `RuleExample` must exist

use crate::error::PayloadError;
use crate::lookup::KnowledgeDirectory;
use crate::schema::{self, AddRuleExample, ModifyRuleExample};
use crate::validator::PayloadValidator;
use async_trait::async_trait;
use ckr_domain::ids::{CodingRuleId, RuleExampleId};
use ckr_domain::{ChangeAction, TargetKind};
use std::sync::Arc;

/// Validator for `RULE_EXAMPLE` feedback
pub struct RuleExampleValidator {
    directory: Arc<dyn KnowledgeDirectory>,
}

impl RuleExampleValidator {
    /// Validator over the given directory
    #[must_use]
    pub fn new(directory: Arc<dyn KnowledgeDirectory>) -> Self {
        Self { directory }
    }

    async fn validate_add(&self, payload: &str) -> Result<(), PayloadError> {
        let add: AddRuleExample = schema::parse(payload)?;
        if !self.directory.coding_rule_exists(add.rule_id).await? {
            return Err(PayloadError::ParentNotFound {
                parent: "CodingRule",
                id: add.rule_id.value(),
            });
        }
        Ok(())
    }

    async fn validate_modify(
        &self,
        target_id: Option<u64>,
        payload: &str,
    ) -> Result<(), PayloadError> {
        let _parsed: ModifyRuleExample = schema::parse(payload)?;
        let id = target_id.ok_or(PayloadError::TargetIdRequired)?;
        if !self.directory.rule_example_exists(RuleExampleId(id)).await? {
            return Err(PayloadError::ModifyTargetNotFound {
                kind: TargetKind::RuleExample,
                id,
            });
        }
        Ok(())
    }

    async fn validate_delete(&self, target_id: Option<u64>) -> Result<(), PayloadError> {
        let id = target_id.ok_or(PayloadError::TargetIdRequired)?;
        if !self.directory.rule_example_exists(RuleExampleId(id)).await? {
            return Err(PayloadError::DeleteTargetNotFound {
                kind: TargetKind::RuleExample,
                id,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PayloadValidator for RuleExampleValidator {
    fn target_kind(&self) -> TargetKind {
        TargetKind::RuleExample
    }

    async fn validate(
        &self,
        action: ChangeAction,
        target_id: Option<u64>,
        payload: &str,
    ) -> Result<(), PayloadError> {
        match action {
            ChangeAction::Add => self.validate_add(payload).await,
            ChangeAction::Modify => self.validate_modify(target_id, payload).await,
            ChangeAction::Delete => self.validate_delete(target_id).await,
        }
    }
}
