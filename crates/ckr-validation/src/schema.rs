//! Per-kind payload schemas.
//!
//! Each target kind has an add-schema naming its parent and a modify-schema
//! naming the entity being changed. Beyond the fields validation reads, the
//! payload content is carried opaquely (`extra`) for the merge applier to
//! interpret later. Wire field names are camelCase, matching the upstream
//! JSON contract.

use ckr_domain::ids::{
    ArchUnitTestId, ChecklistItemId, ClassTemplateId, CodingRuleId, ConventionId,
    PackageStructureId, RuleExampleId,
};
use crate::error::PayloadError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Deserialize a payload under `T`, mapping failures to the pinned
/// invalid-format error.
pub(crate) fn parse<T: DeserializeOwned>(payload: &str) -> Result<T, PayloadError> {
    serde_json::from_str(payload).map_err(|e| PayloadError::InvalidFormat {
        detail: e.to_string(),
    })
}

/// Add a rule example under an existing coding rule
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRuleExample {
    /// Parent coding rule
    pub rule_id: CodingRuleId,
    /// Opaque example content (code snippet, explanation, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Modify an existing rule example
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyRuleExample {
    /// Payload echo of the entity id; the submission's target id is authoritative
    pub rule_example_id: Option<RuleExampleId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Add a checklist item under an existing coding rule
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChecklistItem {
    /// Parent coding rule
    pub rule_id: CodingRuleId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Modify an existing checklist item
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyChecklistItem {
    /// Payload echo of the entity id; the submission's target id is authoritative
    pub checklist_item_id: Option<ChecklistItemId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Add a coding rule under an existing convention
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCodingRule {
    /// Parent convention
    pub convention_id: ConventionId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Modify an existing coding rule
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyCodingRule {
    /// Payload echo of the entity id; the submission's target id is authoritative
    pub coding_rule_id: Option<CodingRuleId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Add a class template under an existing package structure
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddClassTemplate {
    /// Parent package structure
    pub structure_id: PackageStructureId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Modify an existing class template
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyClassTemplate {
    /// Payload echo of the entity id; the submission's target id is authoritative
    pub class_template_id: Option<ClassTemplateId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Add an ArchUnit test under an existing package structure
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddArchUnitTest {
    /// Parent package structure
    pub structure_id: PackageStructureId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Modify an existing ArchUnit test
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyArchUnitTest {
    /// Payload echo of the entity id; the submission's target id is authoritative
    pub arch_unit_test_id: Option<ArchUnitTestId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
