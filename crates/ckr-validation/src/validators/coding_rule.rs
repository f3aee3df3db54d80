//! Coding rule payload validation.
//!
//! - Add: parent `Convention` must exist
//! - Modify/Delete: the `CodingRule` must exist

use crate::error::PayloadError;
use crate::lookup::KnowledgeDirectory;
use crate::schema::{self, AddCodingRule, ModifyCodingRule};
use crate::validator::PayloadValidator;
use async_trait::async_trait;
use ckr_domain::ids::CodingRuleId;
use ckr_domain::{ChangeAction, TargetKind};
use std::sync::Arc;

/// Validator for `CODING_RULE` feedback
pub struct CodingRuleValidator {
    directory: Arc<dyn KnowledgeDirectory>,
}

impl CodingRuleValidator {
    /// Validator over the given directory
    #[must_use]
    pub fn new(directory: Arc<dyn KnowledgeDirectory>) -> Self {
        Self { directory }
    }

    async fn validate_add(&self, payload: &str) -> Result<(), PayloadError> {
        let add: AddCodingRule = schema::parse(payload)?;
        if !self.directory.convention_exists(add.convention_id).await? {
            return Err(PayloadError::ParentNotFound {
                parent: "Convention",
                id: add.convention_id.value(),
            });
        }
        Ok(())
    }

    async fn validate_modify(
        &self,
        target_id: Option<u64>,
        payload: &str,
    ) -> Result<(), PayloadError> {
        let _parsed: ModifyCodingRule = schema::parse(payload)?;
        let id = target_id.ok_or(PayloadError::TargetIdRequired)?;
        if !self.directory.coding_rule_exists(CodingRuleId(id)).await? {
            return Err(PayloadError::ModifyTargetNotFound {
                kind: TargetKind::CodingRule,
                id,
            });
        }
        Ok(())
    }

    async fn validate_delete(&self, target_id: Option<u64>) -> Result<(), PayloadError> {
        let id = target_id.ok_or(PayloadError::TargetIdRequired)?;
        if !self.directory.coding_rule_exists(CodingRuleId(id)).await? {
            return Err(PayloadError::DeleteTargetNotFound {
                kind: TargetKind::CodingRule,
                id,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PayloadValidator for CodingRuleValidator {
    fn target_kind(&self) -> TargetKind {
        TargetKind::CodingRule
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
