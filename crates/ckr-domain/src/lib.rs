//! CKR Domain Model
//!
//! The invariant-bearing core of the convention knowledge review workflow:
//!
//! - **Feedback aggregate**: a queued proposal to add, modify, or delete a piece
//!   of convention knowledge, moved only through sanctioned transitions
//! - **Review state machine**: the legal status graph for a feedback request
//! - **Risk policy**: the pure classification that decides whether a proposal
//!   may auto-merge after LLM approval or needs a human sign-off
//!
//! # Status graph
//!
//! ```text
//! PENDING ─ llmApprove ──→ LLM_APPROVED ─ merge (SAFE) ──────────→ MERGED
//!    │                          │
//!    │ llmReject                │ humanApprove (MEDIUM/HIGH)
//!    ↓                          ↓
//! LLM_REJECTED            HUMAN_APPROVED ─ merge ────────────────→ MERGED
//!                               │
//!                (humanReject)  ↓
//!                         HUMAN_REJECTED
//! ```
//!
//! Everything here is pure and synchronous; persistence and collaborator I/O
//! live in the sibling crates.

pub mod error;
pub mod ids;
pub mod request;
pub mod risk;
pub mod state_machine;
pub mod types;

pub use error::{RequestError, TransitionError};
pub use ids::FeedbackId;
pub use request::FeedbackRequest;
pub use risk::classify;
pub use types::{ChangeAction, ReviewAction, ReviewStatus, RiskLevel, TargetKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
