//! Jobwatch Core
//!
//! Core types and abstractions for monitoring remote long-running jobs.
//!
//! This crate contains:
//! - Job types: the `JobStatus` snapshot and its terminal-state classification
//! - Session types: the `AuthSession` capability contract consumed by the monitor

pub mod job;
pub mod session;

// Re-export commonly used types
pub use job::JobStatus;
pub use session::{AuthSession, ServiceCatalog, StaticSession};
