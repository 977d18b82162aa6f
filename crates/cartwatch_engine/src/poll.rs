use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cartwatch_core::{open_groups, ItemGroup};
use watch_logging::{watch_debug, watch_info};

use crate::extract::TableExtractor;
use crate::navigate::CartNavigator;
use crate::types::WatchError;

/// Shared control surface for one scan: the cooperative stop flag and the
/// completed-iteration counter the status query exposes.
///
/// The flag is written by the stop control and read exactly once per
/// iteration, at the checkpoint after the delay. A stop therefore becomes
/// observable within one delay interval plus one open-cart round trip and
/// never pre-empts an in-flight navigation step.
#[derive(Debug, Clone, Default)]
pub struct PollHandle {
    inner: Arc<PollShared>,
}

#[derive(Debug, Default)]
struct PollShared {
    running: AtomicBool,
    iterations: AtomicU64,
}

impl PollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the running flag and resets the counter for a fresh scan.
    pub fn arm(&self) {
        self.inner.iterations.store(0, Ordering::Relaxed);
        self.inner.running.store(true, Ordering::Release);
    }

    /// Lowers the running flag. Observable at the next checkpoint only.
    pub fn stop(&self) {
        self.inner.running.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::Acquire)
    }

    pub fn iterations(&self) -> u64 {
        self.inner.iterations.load(Ordering::Relaxed)
    }

    fn record_iteration(&self, completed: u64) {
        self.inner.iterations.store(completed, Ordering::Relaxed);
    }
}

/// Drives the navigation steps and the extractor until a group opens, a
/// stop is observed, or a structural failure ends the run.
pub struct PollingController<N: CartNavigator> {
    navigator: N,
    extractor: TableExtractor,
    delay: Duration,
    handle: PollHandle,
}

impl<N: CartNavigator> PollingController<N> {
    pub fn new(navigator: N, extractor: TableExtractor, delay: Duration, handle: PollHandle) -> Self {
        Self {
            navigator,
            extractor,
            delay,
            handle,
        }
    }

    /// Runs the scan to a terminal outcome.
    ///
    /// The cart view must be re-entered before every re-submission — the
    /// monitored page's session rejects a second submission otherwise —
    /// so `open_cart` precedes `resubmit_step` on every iteration,
    /// including the first. A scan that finds an open group returns on
    /// that iteration without sleeping. Errors propagate unchanged; the
    /// only condition that continues the loop is "nothing open yet".
    pub async fn run(mut self) -> Result<Vec<ItemGroup>, WatchError> {
        self.navigator.begin().await?;
        self.navigator.open_cart().await?;

        let mut completed: u64 = 0;
        loop {
            let html = self.navigator.resubmit_step().await?;
            let scan = self.extractor.extract(&html)?;
            let available = open_groups(&scan);
            if !available.is_empty() {
                watch_info!(
                    "found {} open group(s) after {} completed iteration(s)",
                    available.len(),
                    completed
                );
                return Ok(available);
            }

            completed += 1;
            self.handle.record_iteration(completed);
            watch_logging::set_poll_iteration(completed);
            watch_debug!(
                "no open section, iteration {completed} done, sleeping {:?}",
                self.delay
            );
            tokio::time::sleep(self.delay).await;

            // Checkpoint: the single place the stop flag is consulted.
            if !self.handle.is_running() {
                return Err(WatchError::StoppedByUser);
            }
            self.navigator.open_cart().await?;
        }
    }
}
