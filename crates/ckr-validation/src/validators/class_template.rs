//! Class template payload validation.
//!
//! - Add: parent `PackageStructure` must exist
//! - Modify/Delete: the `ClassTemplate` must exist

use crate::error::PayloadError;
use crate::lookup::KnowledgeDirectory;
use crate::schema::{self, AddClassTemplate, ModifyClassTemplate};
use crate::validator::PayloadValidator;
use async_trait::async_trait;
use ckr_domain::ids::ClassTemplateId;
use ckr_domain::{ChangeAction, TargetKind};
use std::sync::Arc;

/// Validator for `CLASS_TEMPLATE` feedback
pub struct ClassTemplateValidator {
    directory: Arc<dyn KnowledgeDirectory>,
}

impl ClassTemplateValidator {
    /// Validator over the given directory
    #[must_use]
    pub fn new(directory: Arc<dyn KnowledgeDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl PayloadValidator for ClassTemplateValidator {
    fn target_kind(&self) -> TargetKind {
        TargetKind::ClassTemplate
    }

    async fn validate(
        &self,
        action: ChangeAction,
        target_id: Option<u64>,
        payload: &str,
    ) -> Result<(), PayloadError> {
        match action {
            ChangeAction::Add => {
                let add: AddClassTemplate = schema::parse(payload)?;
                if !self.directory.package_structure_exists(add.structure_id).await? {
                    return Err(PayloadError::ParentNotFound {
                        parent: "PackageStructure",
                        id: add.structure_id.value(),
                    });
                }
                Ok(())
            }
            ChangeAction::Modify => {
                let _parsed: ModifyClassTemplate = schema::parse(payload)?;
                let id = target_id.ok_or(PayloadError::TargetIdRequired)?;
                if !self.directory.class_template_exists(ClassTemplateId(id)).await? {
                    return Err(PayloadError::ModifyTargetNotFound {
                        kind: TargetKind::ClassTemplate,
                        id,
                    });
                }
                Ok(())
            }
            ChangeAction::Delete => {
                let id = target_id.ok_or(PayloadError::TargetIdRequired)?;
                if !self.directory.class_template_exists(ClassTemplateId(id)).await? {
                    return Err(PayloadError::DeleteTargetNotFound {
                        kind: TargetKind::ClassTemplate,
                        id,
                    });
                }
                Ok(())
            }
        }
    }
}
