//! Detached-job spawning.

use std::future::Future;
use tokio_util::task::TaskTracker;

/// Spawner for fire-and-forget pipeline jobs.
///
/// The submit-side contract hands back no handle: callers cannot await,
/// cancel, or bound the work (one unbounded task per accepted upload).
/// Internally every job is still registered with a [`TaskTracker`], so
/// shutdown and tests can wait for in-flight jobs, and bounded concurrency
/// could be added here later without touching the external contract.
#[derive(Debug, Clone, Default)]
pub struct JobSpawner {
    tracker: TaskTracker,
}

impl JobSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detach a job. Returns nothing by contract.
    pub fn spawn<F>(&self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tracker.spawn(job);
    }

    /// Number of jobs currently in flight.
    pub fn active(&self) -> usize {
        self.tracker.len()
    }

    /// Stop accepting new work for the purpose of waiting, then wait for
    /// every in-flight job to finish.
    pub async fn shutdown(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }
}
