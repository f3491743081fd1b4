//! Periodic refresh for `watch` mode.
//!
//! The scheduler never touches the loader or its cache. It only sends
//! [`RefreshRequest`]s over a channel; the render loop that owns the loader
//! receives them and decides what to do. Manual refreshes are sent on the same
//! channel, so the render loop handles one request at a time regardless of
//! where it came from.
//!
//! ```rust,no_run
//! use srrview::libs::scheduler::{RefreshRequest, RefreshScheduler};
//! use std::time::Duration;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let (tx, mut rx) = tokio::sync::mpsc::channel(8);
//! let handle = RefreshScheduler::spawn(Duration::from_secs(120), tx);
//!
//! if let Some(RefreshRequest::Timer) = rx.recv().await {
//!     // reload and render
//! }
//! handle.stop().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Shortest accepted period; `tokio::time::interval` rejects zero.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshRequest {
    /// The refresh period elapsed.
    Timer,
    /// The user asked for a refresh.
    Manual,
}

pub struct RefreshScheduler;

impl RefreshScheduler {
    /// Starts a task sending [`RefreshRequest::Timer`] every `period`.
    ///
    /// The first request is sent one full period after the call. The task ends
    /// when [`RefreshHandle::stop`] is called or the receiver is dropped.
    pub fn spawn(period: Duration, requests: mpsc::Sender<RefreshRequest>) -> RefreshHandle {
        let period = period.max(MIN_PERIOD);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        if requests.send(RefreshRequest::Timer).await.is_err() {
                            break;
                        }
                    }
                }
            }

            msg_debug!(Message::SchedulerStopped);
        });

        RefreshHandle {
            shutdown: Some(shutdown_tx),
            task,
        }
    }
}

/// Owner of a running scheduler task.
pub struct RefreshHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Cancels the timer and waits for the task to finish.
    pub async fn stop(mut self) -> Result<()> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        (&mut self.task).await?;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        // Not stopped explicitly.
        if self.shutdown.is_some() {
            self.task.abort();
        }
    }
}
