//! CKR Feedback Queue Store
//!
//! Append-only persistence of feedback requests with filtered,
//! cursor-paginated retrieval. Rows are never deleted: terminal requests are
//! retained forever as the audit trail of the review queue.
//!
//! Listing is ordered by descending id (most recent first); the cursor token
//! is the last-seen id. The two canonical views, "pending LLM review" and
//! "awaiting human review", are criteria constructors over the same slice
//! query.
//!
//! The [`FeedbackStore`] trait is async so persistent backends can block;
//! [`InMemoryFeedbackStore`] is the reference implementation and the test
//! harness default.

pub mod criteria;
pub mod error;
pub mod memory;
pub mod store;

pub use criteria::{Slice, SliceCriteria};
pub use error::StoreError;
pub use memory::InMemoryFeedbackStore;
pub use store::FeedbackStore;
