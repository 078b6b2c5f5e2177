use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tracing::info;

/// Coordinates shutdown between the view loop and background tasks.
pub struct ShutdownCoordinator {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Signal shutdown start
    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            info!("shutdown initiated");
            self.notify.notify_waiters();
        }
    }

    /// Create a handle for sharing
    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown: Arc::clone(&self.shutdown),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle for checking shutdown state
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag to avoid TOCTOU race:
        // without this, signal() could fire between the check and the await,
        // and notify_waiters() would have no subscribers, losing the notification.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::ShutdownCoordinator;

    #[tokio::test]
    async fn wait_returns_after_signal() {
        let coordinator = ShutdownCoordinator::new();
        let handle = coordinator.handle();
        coordinator.signal();
        // Must not hang even though the signal fired before the wait.
        handle.wait().await;
        assert!(handle.is_shutting_down());
    }

    #[tokio::test]
    async fn signal_is_idempotent() {
        let coordinator = ShutdownCoordinator::new();
        coordinator.signal();
        coordinator.signal();
        assert!(coordinator.handle().is_shutting_down());
    }
}
