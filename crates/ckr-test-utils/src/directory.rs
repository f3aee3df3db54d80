//! Seedable knowledge directory.

use std::collections::HashSet;

use async_trait::async_trait;
use ckr_domain::ids::{
    ArchUnitTestId, ChecklistItemId, ClassTemplateId, CodingRuleId, ConventionId,
    PackageStructureId, RuleExampleId,
};
use ckr_validation::{DirectoryError, KnowledgeDirectory};

/// In-memory [`KnowledgeDirectory`] seeded with known entity ids.
///
/// Lookups answer from fixed sets; flip `unavailable` to simulate the
/// directory being unreachable.
#[derive(Debug, Default, Clone)]
pub struct StaticDirectory {
    conventions: HashSet<u64>,
    coding_rules: HashSet<u64>,
    rule_examples: HashSet<u64>,
    checklist_items: HashSet<u64>,
    class_templates: HashSet<u64>,
    arch_unit_tests: HashSet<u64>,
    package_structures: HashSet<u64>,
    unavailable: bool,
}

impl StaticDirectory {
    /// An empty directory; every lookup answers "not found"
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a convention id
    #[must_use]
    pub fn with_convention(mut self, id: u64) -> Self {
        self.conventions.insert(id);
        self
    }

    /// Seeds a coding rule id
    #[must_use]
    pub fn with_coding_rule(mut self, id: u64) -> Self {
        self.coding_rules.insert(id);
        self
    }

    /// Seeds a rule example id
    #[must_use]
    pub fn with_rule_example(mut self, id: u64) -> Self {
        self.rule_examples.insert(id);
        self
    }

    /// Seeds a checklist item id
    #[must_use]
    pub fn with_checklist_item(mut self, id: u64) -> Self {
        self.checklist_items.insert(id);
        self
    }

    /// Seeds a class template id
    #[must_use]
    pub fn with_class_template(mut self, id: u64) -> Self {
        self.class_templates.insert(id);
        self
    }

    /// Seeds an arch unit test id
    #[must_use]
    pub fn with_arch_unit_test(mut self, id: u64) -> Self {
        self.arch_unit_tests.insert(id);
        self
    }

    /// Seeds a package structure id
    #[must_use]
    pub fn with_package_structure(mut self, id: u64) -> Self {
        self.package_structures.insert(id);
        self
    }

    /// Makes every lookup fail with a connection error
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn answer(&self, set: &HashSet<u64>, id: u64) -> Result<bool, DirectoryError> {
        if self.unavailable {
            return Err(DirectoryError("connection refused".into()));
        }
        Ok(set.contains(&id))
    }
}

#[async_trait]
impl KnowledgeDirectory for StaticDirectory {
    async fn convention_exists(&self, id: ConventionId) -> Result<bool, DirectoryError> {
        self.answer(&self.conventions, id.value())
    }

    async fn coding_rule_exists(&self, id: CodingRuleId) -> Result<bool, DirectoryError> {
        self.answer(&self.coding_rules, id.value())
    }

    async fn rule_example_exists(&self, id: RuleExampleId) -> Result<bool, DirectoryError> {
        self.answer(&self.rule_examples, id.value())
    }

    async fn checklist_item_exists(&self, id: ChecklistItemId) -> Result<bool, DirectoryError> {
        self.answer(&self.checklist_items, id.value())
    }

    async fn class_template_exists(&self, id: ClassTemplateId) -> Result<bool, DirectoryError> {
        self.answer(&self.class_templates, id.value())
    }

    async fn arch_unit_test_exists(&self, id: ArchUnitTestId) -> Result<bool, DirectoryError> {
        self.answer(&self.arch_unit_tests, id.value())
    }

    async fn package_structure_exists(
        &self,
        id: PackageStructureId,
    ) -> Result<bool, DirectoryError> {
        self.answer(&self.package_structures, id.value())
    }
}
