//! JSON payload builders matching the camelCase wire shapes.

use serde_json::json;

/// Add-rule-example payload referencing its parent coding rule
#[must_use]
pub fn add_rule_example(rule_id: u64) -> String {
    json!({
        "ruleId": rule_id,
        "title": "prefer assert_eq",
        "code": "assert_eq!(left, right);",
    })
    .to_string()
}

/// Modify-rule-example payload
#[must_use]
pub fn modify_rule_example(rule_example_id: u64) -> String {
    json!({
        "ruleExampleId": rule_example_id,
        "code": "assert_eq!(expected, actual);",
    })
    .to_string()
}

/// Add-checklist-item payload referencing its parent coding rule
#[must_use]
pub fn add_checklist_item(rule_id: u64) -> String {
    json!({
        "ruleId": rule_id,
        "description": "every public function documents its errors",
    })
    .to_string()
}

/// Modify-checklist-item payload
#[must_use]
pub fn modify_checklist_item(checklist_item_id: u64) -> String {
    json!({
        "checklistItemId": checklist_item_id,
        "description": "every fallible public function documents its errors",
    })
    .to_string()
}

/// Add-coding-rule payload referencing its parent convention
#[must_use]
pub fn add_coding_rule(convention_id: u64) -> String {
    json!({
        "conventionId": convention_id,
        "name": "error-documentation",
        "severity": "MAJOR",
    })
    .to_string()
}

/// Modify-coding-rule payload
#[must_use]
pub fn modify_coding_rule(coding_rule_id: u64) -> String {
    json!({
        "codingRuleId": coding_rule_id,
        "severity": "CRITICAL",
    })
    .to_string()
}

/// Add-class-template payload referencing its parent package structure
#[must_use]
pub fn add_class_template(structure_id: u64) -> String {
    json!({
        "structureId": structure_id,
        "name": "RepositoryAdapter",
        "body": "pub struct {name}Adapter;",
    })
    .to_string()
}

/// Modify-class-template payload
#[must_use]
pub fn modify_class_template(class_template_id: u64) -> String {
    json!({
        "classTemplateId": class_template_id,
        "body": "pub(crate) struct {name}Adapter;",
    })
    .to_string()
}

/// Add-arch-unit-test payload referencing its parent package structure
#[must_use]
pub fn add_arch_unit_test(structure_id: u64) -> String {
    json!({
        "structureId": structure_id,
        "name": "domain_has_no_outward_deps",
        "assertion": "no class in domain depends on adapter",
    })
    .to_string()
}

/// Modify-arch-unit-test payload
#[must_use]
pub fn modify_arch_unit_test(arch_unit_test_id: u64) -> String {
    json!({
        "archUnitTestId": arch_unit_test_id,
        "assertion": "no class in domain depends on adapter or application",
    })
    .to_string()
}
