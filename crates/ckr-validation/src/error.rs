//! Validation error types.
//!
//! Message shapes are part of the contract with callers (the REST layer keys
//! user-facing text off them), so they are pinned by tests.

use ckr_domain::TargetKind;

/// The knowledge directory collaborator could not be reached.
///
/// Never treated as a pass: an unverifiable reference fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("knowledge directory unavailable: {0}")]
pub struct DirectoryError(pub String);

/// A submitted payload was rejected before any state was created
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    /// Payload text does not parse under the expected schema
    #[error("Invalid payload format: {detail}")]
    InvalidFormat {
        /// Deserializer diagnostic
        detail: String,
    },

    /// An `Add` referenced a parent entity that does not exist
    #[error("{parent} not found: {id}")]
    ParentNotFound {
        /// Entity name of the missing parent
        parent: &'static str,
        /// Identity the payload referenced
        id: u64,
    },

    /// A `Modify` targeted an entity that does not exist
    #[error("{kind} not found for modification: {id}")]
    ModifyTargetNotFound {
        /// Declared target kind
        kind: TargetKind,
        /// Identity the submission referenced
        id: u64,
    },

    /// A `Delete` targeted an entity that does not exist
    #[error("{kind} not found for deletion: {id}")]
    DeleteTargetNotFound {
        /// Declared target kind
        kind: TargetKind,
        /// Identity the submission referenced
        id: u64,
    },

    /// A `Modify`/`Delete` submission omitted its target id
    #[error("Target ID is required")]
    TargetIdRequired,

    /// The reference could not be verified against current state
    #[error("cannot verify reference: {0}")]
    CannotVerify(#[from] DirectoryError),
}

/// Registry misconfiguration, reported at startup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A target kind has no registered validator
    #[error("no payload validator registered for target kind: {0}")]
    MissingValidator(TargetKind),

    /// Two validators claimed the same target kind
    #[error("duplicate payload validator for target kind: {0}")]
    DuplicateValidator(TargetKind),
}
