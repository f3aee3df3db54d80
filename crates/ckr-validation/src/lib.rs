//! CKR Payload Validation
//!
//! The trusted boundary between raw submitted payloads and the review queue.
//! A submission is admitted only after its payload parses under the target
//! kind's schema and its referential preconditions hold against current state:
//!
//! - **Add**: the parent entity named in the payload must exist
//! - **Modify**: the target entity must exist
//! - **Delete**: a target id must be supplied and the entity must exist
//!
//! Validators are selected by target kind through a [`ValidatorRegistry`];
//! registration is verified exhaustive at startup so a missing kind is a
//! configuration error, never a mid-workflow surprise. Validators only read
//! current state, through the [`KnowledgeDirectory`] seam, and are safe to
//! call repeatedly and concurrently.

pub mod error;
pub mod lookup;
pub mod schema;
pub mod validator;
pub mod validators;

pub use error::{DirectoryError, PayloadError, RegistryError};
pub use lookup::KnowledgeDirectory;
pub use validator::{default_validators, DispatchError, PayloadValidator, ValidatorRegistry};
