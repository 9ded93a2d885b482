//! View-scoped polling orchestrator.
//!
//! A poller runs exactly while the view that owns it is mounted: pages
//! start theirs in the component body and stop them in `on_cleanup`, so
//! switching views stops the old poller before the next view starts its
//! own, and switching back re-fetches immediately instead of waiting for
//! the interval.
//!
//! The loop awaits each run of the action before sleeping, so a slow
//! response delays the next tick rather than overlapping it; state is only
//! ever updated from a completed response and a stale poll can never
//! overwrite a fresher one.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

/// Handle to a repeating fetch bound to a view's lifetime.
///
/// Clones share the underlying flags, so the clone captured by
/// `on_cleanup` stops the loop started from the page body. The browser
/// runtime is single-threaded, but `on_cleanup` takes a thread-safe
/// closure, so the flags are atomics behind `Arc`; relaxed ordering is
/// enough with no cross-thread contention.
#[derive(Clone, Debug, Default)]
pub struct Poller {
    running: Arc<AtomicBool>,
    epoch: Arc<AtomicU64>,
}

impl Poller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the poller currently has an active loop.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Start polling: run the action once immediately, then once per
    /// `interval`. Starting an already-running poller is a no-op.
    pub fn start<F, Fut>(&self, interval: Duration, action: F)
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        if self.running.swap(true, Ordering::Relaxed) {
            return;
        }
        // A loop outlives `stop` until its next wakeup; the epoch keeps a
        // superseded loop from running on after a quick stop/start.
        let epoch = self.epoch.load(Ordering::Relaxed) + 1;
        self.epoch.store(epoch, Ordering::Relaxed);

        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(poll_loop(
            Arc::clone(&self.running),
            Arc::clone(&self.epoch),
            epoch,
            interval,
            action,
            gloo_timers::future::sleep,
        ));
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (interval, action);
        }
    }

    /// Stop polling. Stopping an already-stopped poller is a no-op.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// One polling run: the action fires immediately, then once per `interval`,
/// until the running flag drops or a newer loop takes over the epoch. The
/// flag and epoch are re-checked after each action so a stop issued during
/// a fetch ends the loop without another sleep.
///
/// Generic over the sleep constructor rather than hard-wired to the
/// browser timer; [`Poller::start`] supplies `gloo_timers::future::sleep`.
pub async fn poll_loop<F, Fut, S, SFut>(
    running: Arc<AtomicBool>,
    epoch: Arc<AtomicU64>,
    my_epoch: u64,
    interval: Duration,
    mut action: F,
    sleep: S,
) where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
    S: Fn(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    while running.load(Ordering::Relaxed) && epoch.load(Ordering::Relaxed) == my_epoch {
        action().await;
        if !running.load(Ordering::Relaxed) || epoch.load(Ordering::Relaxed) != my_epoch {
            break;
        }
        sleep(interval).await;
    }
}
