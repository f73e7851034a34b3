//! debounce.rs — cancellable scheduled tasks for the refresh boundary.
//!
//! Each keystroke-style trigger schedules a task behind a fixed delay; a new
//! schedule supersedes any pending one, and a superseded task that reaches its
//! deadline anyway is a no-op. The pipeline itself stays pure; coalescing
//! triggers and discarding stale in-flight results is this boundary object's
//! whole job.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    // Monotonic schedule counter. A task only runs if it still holds the
    // latest generation once its delay elapses; abort() covers the common
    // case, the generation guard covers the abort/deadline race.
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `fut` to run after the configured delay, superseding any
    /// pending schedule. The superseded task never runs its payload.
    pub fn schedule<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if latest.load(Ordering::SeqCst) != generation {
                // Superseded while waiting; completing now would surface
                // stale results.
                return;
            }
            fut.await;
        });

        let mut pending = self.pending.lock().expect("debouncer mutex poisoned");
        if let Some(prev) = pending.replace(handle) {
            prev.abort();
        }
    }

    /// Drop any pending schedule without replacement.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut pending = self.pending.lock().expect("debouncer mutex poisoned");
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test]
    async fn runs_after_the_delay() {
        let hits = Arc::new(AtomicUsize::new(0));
        let d = Debouncer::new(Duration::from_millis(20));
        let h = Arc::clone(&hits);
        d.schedule(async move {
            h.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn new_schedule_supersedes_the_pending_one() {
        let hits = Arc::new(AtomicUsize::new(0));
        let d = Debouncer::new(Duration::from_millis(40));
        for i in 1..=3 {
            let h = Arc::clone(&hits);
            d.schedule(async move {
                h.store(i, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        tokio::time::sleep(Duration::from_millis(120)).await;
        // Only the last scheduled payload ran.
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn cancel_discards_the_pending_task() {
        let hits = Arc::new(AtomicUsize::new(0));
        let d = Debouncer::new(Duration::from_millis(20));
        let h = Arc::clone(&hits);
        d.schedule(async move {
            h.fetch_add(1, Ordering::SeqCst);
        });
        d.cancel();

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
