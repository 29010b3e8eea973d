//! Jobwatch Monitor
//!
//! An asynchronous status monitor for remote long-running jobs.
//!
//! Cloud APIs accept some requests (zone imports, record changes, ...) by
//! returning a job id and a callback URL instead of a result. This crate
//! watches such a job for you: one background task per job polls the
//! callback URL at a fixed cadence and delivers status snapshots through a
//! cancellable stream. Intermediate snapshots are best-effort, and a slow
//! consumer may miss any number of them, but the terminal snapshot
//! (`COMPLETED` or `ERROR`) is always delivered and always the last item.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use jobwatch_core::{JobStatus, StaticSession};
//! use jobwatch_monitor::monitor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let session = Arc::new(StaticSession::new(
//!         "token-123",
//!         "2026-12-31T00:00:00Z",
//!         reqwest::Client::new(),
//!     ));
//!     let initial = JobStatus::new(
//!         "RUNNING",
//!         "job-1",
//!         "https://dns.api.example.com/v1.0/1234/status/job-1",
//!     );
//!
//!     let mut watch = monitor(session, initial, Duration::from_secs(2));
//!     while let Some(snapshot) = watch.recv().await {
//!         println!("job {} is {}", snapshot.job_id, snapshot.status);
//!     }
//!     // Stream closed: the job reached COMPLETED or ERROR
//! }
//! ```

pub mod error;

mod cadence;
mod fetch;
mod monitor;

// Re-export commonly used types
pub use error::{PollError, Result};
pub use fetch::query;
pub use jobwatch_core::{AuthSession, JobStatus};
pub use monitor::{StatusWatch, monitor};
