//! Store teardown signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Cancellation handle shared by a store, its fold loop and its in-flight
/// mutation producers.
#[derive(Clone, Default)]
pub struct DisposeBag {
    disposed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl DisposeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Mark disposed and wake every waiter. Returns true on the first call.
    pub fn dispose(&self) -> bool {
        if !self.disposed.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
            return true;
        }
        false
    }

    /// Resolve once [`dispose`](Self::dispose) has been called.
    pub async fn disposed(&self) {
        // Register with Notify before checking the flag, otherwise a dispose()
        // between the check and the await would be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_disposed() {
            return;
        }
        notified.await;
    }
}
