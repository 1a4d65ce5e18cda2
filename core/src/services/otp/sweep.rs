//! Background sweep of expired passcode records.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::store::OtpStore;

/// Handle to the periodic sweep task.
///
/// Dropping the handle (or calling [`stop`](Self::stop)) aborts the
/// task, tying the sweep to the lifetime of whoever holds the handle.
pub struct SweepHandle {
    handle: JoinHandle<()>,
}

impl SweepHandle {
    /// Spawn the sweep loop on the current tokio runtime
    pub(super) fn spawn<S: OtpStore + 'static>(store: Arc<S>, interval_seconds: u64) -> Self {
        let handle = tokio::spawn(async move {
            info!(interval_seconds, "Passcode sweep task started");

            let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));
            // The first tick completes immediately.
            interval.tick().await;

            loop {
                interval.tick().await;
                let removed = store.sweep_expired().await;
                if removed > 0 {
                    debug!(removed, event = "otp_sweep", "Removed expired verification codes");
                }
            }
        });

        Self { handle }
    }

    /// Abort the sweep task
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Whether the task has terminated
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
