//! Identifier newtypes for the review queue and the knowledge entities it
//! references.
//!
//! All ids are store-assigned, strictly increasing integers. The queue's
//! cursor pagination contract (descending id, cursor = last seen id) depends
//! on that monotonicity.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw integer value
            #[must_use]
            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

entity_id! {
    /// Identity of a feedback request, assigned on first save
    FeedbackId
}

entity_id! {
    /// Identity of a convention, the root grouping for coding rules
    ConventionId
}

entity_id! {
    /// Identity of a coding rule
    CodingRuleId
}

entity_id! {
    /// Identity of a rule example (child of a coding rule)
    RuleExampleId
}

entity_id! {
    /// Identity of a checklist item (child of a coding rule)
    ChecklistItemId
}

entity_id! {
    /// Identity of a class template (child of a package structure)
    ClassTemplateId
}

entity_id! {
    /// Identity of an ArchUnit test (child of a package structure)
    ArchUnitTestId
}

entity_id! {
    /// Identity of a package structure
    PackageStructureId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_by_value() {
        assert!(FeedbackId(1) < FeedbackId(2));
        assert_eq!(FeedbackId(7).value(), 7);
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&CodingRuleId(42)).unwrap();
        assert_eq!(json, "42");
    }
}
