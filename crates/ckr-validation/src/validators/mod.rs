//! Concrete per-kind validators.
//!
//! Each follows the same shape: parse under the kind's schema, then confirm
//! the referenced parent (add) or target (modify/delete) exists. Missing
//! references surface the pinned messages from [`crate::error::PayloadError`].

mod checklist_item;
mod class_template;
mod coding_rule;
mod rule_example;

pub use arch_unit_test::ArchUnitTestValidator;
pub use checklist_item::ChecklistItemValidator;
pub use class_template::ClassTemplateValidator;
pub use coding_rule::CodingRuleValidator;
pub use rule_example::RuleExampleValidator;
