//! Checklist item payload validation.
//!
//! - Add: parent `CodingRule` must exist
//! - Modify/Delete: the `ChecklistItem` must exist

use crate::error::PayloadError;
use crate::lookup::KnowledgeDirectory;
use crate::schema::{self, AddChecklistItem, ModifyChecklistItem};
use crate::validator::PayloadValidator;
use async_trait::async_trait;
use ckr_domain::ids::ChecklistItemId;
use ckr_domain::{ChangeAction, TargetKind};
use std::sync::Arc;

/// Validator for `CHECKLIST_ITEM` feedback
pub struct ChecklistItemValidator {
    directory: Arc<dyn KnowledgeDirectory>,
}

impl ChecklistItemValidator {
    /// Validator over the given directory
    #[must_use]
    pub fn new(directory: Arc<dyn KnowledgeDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl PayloadValidator for ChecklistItemValidator {
    fn target_kind(&self) -> TargetKind {
        TargetKind::ChecklistItem
    }

    async fn validate(
        &self,
        action: ChangeAction,
        target_id: Option<u64>,
        payload: &str,
    ) -> Result<(), PayloadError> {
        match action {
            ChangeAction::Add => {
                let add: AddChecklistItem = schema::parse(payload)?;
                if !self.directory.coding_rule_exists(add.rule_id).await? {
                    return Err(PayloadError::ParentNotFound {
                        parent: "CodingRule",
                        id: add.rule_id.value(),
                    });
                }
                Ok(())
            }
            ChangeAction::Modify => {
                let _parsed: ModifyChecklistItem = schema::parse(payload)?;
                let id = target_id.ok_or(PayloadError::TargetIdRequired)?;
                if !self.directory.checklist_item_exists(ChecklistItemId(id)).await? {
                    return Err(PayloadError::ModifyTargetNotFound {
                        kind: TargetKind::ChecklistItem,
                        id,
                    });
                }
                Ok(())
            }
            ChangeAction::Delete => {
                let id = target_id.ok_or(PayloadError::TargetIdRequired)?;
                if !self.directory.checklist_item_exists(ChecklistItemId(id)).await? {
                    return Err(PayloadError::DeleteTargetNotFound {
                        kind: TargetKind::ChecklistItem,
                        id,
                    });
                }
                Ok(())
            }
        }
    }
}
