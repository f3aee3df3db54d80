//! Read-only lookup seam into the knowledge domain.
//!
//! Each target domain supplies existence checks; the review core never writes
//! through this interface. Implementations back onto whatever the deployment
//! uses for the knowledge aggregates (the reference tests use a static
//! in-memory directory).

use crate::error::DirectoryError;
use async_trait::async_trait;
use ckr_domain::ids::{
    ArchUnitTestId, ChecklistItemId, ClassTemplateId, CodingRuleId, ConventionId,
    PackageStructureId, RuleExampleId,
};

/// Existence lookups for every entity kind the validators reference.
///
/// Reads may observe concurrent mutation of the underlying entities; a
/// validated-then-stale reference is accepted risk, but an unreachable
/// directory must surface as [`DirectoryError`] rather than pass.
#[async_trait]
pub trait KnowledgeDirectory: Send + Sync {
    /// Whether the convention exists
    async fn convention_exists(&self, id: ConventionId) -> Result<bool, DirectoryError>;

    /// Whether the coding rule exists
    async fn coding_rule_exists(&self, id: CodingRuleId) -> Result<bool, DirectoryError>;

    /// Whether the rule example exists
    async fn rule_example_exists(&self, id: RuleExampleId) -> Result<bool, DirectoryError>;

    /// Whether the checklist item exists
    async fn checklist_item_exists(&self, id: ChecklistItemId) -> Result<bool, DirectoryError>;

    /// Whether the class template exists
    async fn class_template_exists(&self, id: ClassTemplateId) -> Result<bool, DirectoryError>;

    /// Whether the ArchUnit test exists
    async fn arch_unit_test_exists(&self, id: ArchUnitTestId) -> Result<bool, DirectoryError>;

    /// Whether the package structure exists
    async fn package_structure_exists(&self, id: PackageStructureId)
        -> Result<bool, DirectoryError>;
}
