//! Job status monitor
//!
//! One background task per monitored job polls the job's callback URL at a
//! fixed cadence and hands snapshots to the consumer through a bounded
//! channel. Intermediate snapshots are best-effort; the terminal snapshot is
//! always delivered, and it is always the last item before the stream closes.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use jobwatch_core::{AuthSession, JobStatus};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::Stream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cadence::Cadence;
use crate::fetch;

/// Start monitoring a job
///
/// Spawns a background worker that polls `initial.callback_url` every
/// `interval` until the job reports a terminal status (`COMPLETED` or
/// `ERROR`) or the returned watch is cancelled or dropped. Must be called
/// within a tokio runtime.
///
/// Fetches are strictly sequential and spaced at least one interval apart.
/// Poll failures (transport errors, unexpected HTTP statuses, undecodable
/// bodies) are logged and retried at the next tick; they never end the
/// stream and never appear on it.
///
/// # Arguments
/// * `session` - The authenticated session; shared freely across jobs
/// * `initial` - The job's initial snapshot, as returned when it was accepted
/// * `interval` - The polling cadence
///
/// # Example
/// ```no_run
/// # use std::sync::Arc;
/// # use std::time::Duration;
/// # use jobwatch_core::{JobStatus, StaticSession};
/// # use jobwatch_monitor::monitor;
/// # async fn example() {
/// let session = Arc::new(StaticSession::new(
///     "token-123",
///     "2026-12-31T00:00:00Z",
///     reqwest::Client::new(),
/// ));
/// let initial = JobStatus::new(
///     "RUNNING",
///     "job-1",
///     "https://dns.api.example.com/v1.0/1234/status/job-1",
/// );
///
/// let mut watch = monitor(session, initial, Duration::from_secs(1));
/// while let Some(snapshot) = watch.recv().await {
///     println!("job-1 is {}", snapshot.status);
/// }
/// # }
/// ```
pub fn monitor(
    session: Arc<dyn AuthSession>,
    initial: JobStatus,
    interval: Duration,
) -> StatusWatch {
    let (tx, rx) = mpsc::channel(1);
    let cancel = CancellationToken::new();

    let worker = PollWorker {
        session,
        snapshot: initial,
        cadence: Cadence::new(interval),
        tx,
        cancel: cancel.clone(),
    };
    let handle = tokio::spawn(worker.run());

    StatusWatch { rx, cancel, handle }
}

/// Consumer-side handle to a monitored job
///
/// Yields snapshots in non-decreasing recency order and ends (returns
/// `None`) once the worker has delivered a terminal snapshot or has been
/// cancelled. Dropping the watch cancels the worker, so an abandoned job is
/// never polled indefinitely.
pub struct StatusWatch {
    rx: mpsc::Receiver<JobStatus>,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl StatusWatch {
    /// Receive the next snapshot
    ///
    /// Returns `None` once monitoring has ended and every published
    /// snapshot has been consumed.
    pub async fn recv(&mut self) -> Option<JobStatus> {
        self.rx.recv().await
    }

    /// Stop the background worker
    ///
    /// Takes effect at the worker's next suspension point, including an
    /// in-flight fetch or a blocked terminal delivery.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the background worker has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Stream for StatusWatch {
    type Item = JobStatus;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<JobStatus>> {
        self.rx.poll_recv(cx)
    }
}

impl Drop for StatusWatch {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Background polling worker
///
/// Sole owner of the job's snapshot; exits only on a terminal status,
/// cancellation, or a vanished consumer. The ticker is dropped on every
/// exit path, and dropping the sender closes the stream exactly once.
struct PollWorker {
    session: Arc<dyn AuthSession>,
    snapshot: JobStatus,
    cadence: Cadence,
    tx: mpsc::Sender<JobStatus>,
    cancel: CancellationToken,
}

impl PollWorker {
    async fn run(mut self) {
        let mut ticker = self.cadence.start();

        debug!("Starting status monitor for job {}", self.snapshot.job_id);

        loop {
            let fetched = tokio::select! {
                _ = self.cancel.cancelled() => return,
                res = fetch::query(self.session.as_ref(), &mut self.snapshot) => res,
            };

            if let Err(e) = &fetched {
                warn!("Status poll for job {} failed: {}", self.snapshot.job_id, e);
            }

            // A failed fetch leaves the snapshot as it was, so a terminal
            // status here is either freshly fetched or was supplied by the
            // caller; both end monitoring.
            if self.snapshot.is_terminal() {
                info!(
                    "Job {} reached terminal status {}",
                    self.snapshot.job_id, self.snapshot.status
                );

                // Guaranteed delivery: block until the consumer takes the
                // final snapshot, unless the monitor is cancelled first.
                tokio::select! {
                    _ = self.cancel.cancelled() => {}
                    _ = self.tx.send(self.snapshot.clone()) => {}
                }
                return;
            }

            if fetched.is_err() {
                // No new information this cycle: publish nothing, wait out
                // the cadence, and try again. There is no retry ceiling.
                tokio::select! {
                    _ = self.cancel.cancelled() => return,
                    _ = ticker.tick() => {}
                }
                continue;
            }

            // Best-effort publish: offer the snapshot until the next tick
            // fires. An early delivery still waits out the remainder of the
            // cadence, so fetches stay at least one interval apart.
            tokio::select! {
                _ = self.cancel.cancelled() => return,
                _ = ticker.tick() => {}
                sent = self.tx.send(self.snapshot.clone()) => {
                    if sent.is_err() {
                        debug!(
                            "Consumer of job {} is gone, stopping monitor",
                            self.snapshot.job_id
                        );
                        return;
                    }

                    tokio::select! {
                        _ = self.cancel.cancelled() => return,
                        _ = ticker.tick() => {}
                    }
                }
            }
        }
    }
}
