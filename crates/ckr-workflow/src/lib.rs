//! Review workflow over the feedback queue.
//!
//! [`ReviewWorkflow`] ties the pieces together: submissions are validated
//! against the knowledge directory, classified for risk, queued, and then
//! driven through the two-stage review by explicit actions. A merge hands
//! the approved change to a [`MergeApplier`]; the workflow records the merge
//! even when the applier fails, surfacing the failure as a notice instead
//! of rolling the decision back.

pub mod applier;
pub mod error;
pub mod service;

pub use applier::{ApplyError, MergeApplier, MergeOrder, NoopApplier};
pub use error::WorkflowError;
pub use service::{NewFeedback, ProcessOutcome, ReviewWorkflow, SubmissionReceipt};
