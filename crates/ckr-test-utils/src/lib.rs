//! Shared fixtures for exercising the feedback review workflow.
//!
//! Everything here is deliberately deterministic: a seedable knowledge
//! directory, JSON payload builders matching the wire shapes, and
//! ready-made requests parked at interesting points in the lifecycle.

pub mod directory;
pub mod fixtures;
pub mod payloads;

pub use directory::StaticDirectory;
