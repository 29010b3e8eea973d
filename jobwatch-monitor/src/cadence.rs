//! Fetch cadence control
//!
//! Fixed-interval pacing for fetch attempts. One `Cadence` exists per
//! monitored job; the worker starts it when the loop begins and stops it by
//! dropping the ticker on every exit path.

use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Fixed interval between permitted fetch attempts
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cadence {
    period: Duration,
}

impl Cadence {
    pub(crate) fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Start the timer
    ///
    /// The first tick fires one full period after start, so a fetch issued
    /// immediately at startup is not followed by a second one until the
    /// interval has elapsed.
    pub(crate) fn start(&self) -> Ticker {
        let mut inner = time::interval_at(Instant::now() + self.period, self.period);
        // A fetch slower than the period must not be chased by a burst of
        // make-up ticks; skipped ticks keep fetches at least a period apart.
        inner.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Ticker { inner }
    }
}

/// Running tick source; dropping it stops the timer
pub(crate) struct Ticker {
    inner: Interval,
}

impl Ticker {
    /// Wait for the next tick
    pub(crate) async fn tick(&mut self) {
        self.inner.tick().await;
    }
}
