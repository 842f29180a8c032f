//! The once-a-second tick that keeps elapsed-time labels and urgency colors moving.
//!
//! The ticker only publishes a counter. Whoever renders subscribes and re-reads
//! [`in_progress_cards`](crate::tracker::OrderLifecycleTracker::in_progress_cards) on each
//! change; the ticker itself never talks to a store.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub const REFRESH_PERIOD: Duration = Duration::from_secs(1);

/// Periodic tick source. Dropping it stops the task.
pub struct RefreshTicker {
    ticks: watch::Receiver<u64>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTicker {
    /// Spawns the tick task. Must be called inside a Tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (sender, ticks) = watch::channel(0u64);
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_ticker(period, sender, cancel.clone()));
        Self {
            ticks,
            cancel,
            handle: Some(handle),
        }
    }

    /// A receiver whose value is the number of ticks so far.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.ticks.clone()
    }

    pub fn ticks(&self) -> u64 {
        *self.ticks.borrow()
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Cancels the task and waits for it to exit.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RefreshTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_ticker(period: Duration, sender: watch::Sender<u64>, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    interval.tick().await;
    info!(?period, "Refresh ticker started");

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                info!(ticks = *sender.borrow(), "Refresh ticker stopped");
                break;
            }
            _ = interval.tick() => {
                sender.send_modify(|n| *n += 1);
                debug!(tick = *sender.borrow(), "Tick");
            }
        }
    }
}
