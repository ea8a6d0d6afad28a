//! Cancellable debounce timer.
//!
//! At most one timer exists at a time. Scheduling a new callback releases
//! the previous timer, so only the last schedule within an idle window
//! fires. Cancellation stops pending timers only; whatever a fired callback
//! kicked off is never affected.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct Debouncer {
    handle: Handle,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(handle: Handle, delay: Duration) -> Self {
        Self {
            handle,
            delay,
            pending: None,
        }
    }

    /// Run `callback` after the idle delay, cancelling any timer that has
    /// not fired yet.
    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
