//! Single-slot input signals.
//!
//! A signal holds at most one undelivered value. Sending while a value is still
//! pending replaces it, so a burst of key presses collapses into the latest one
//! instead of queueing up behind a slow consumer.
//!
//! Built on `tokio::sync::watch`, whose `changed()` is cancel-safe and can sit
//! in a `select!` branch.

use tokio::sync::watch;

/// Create a connected sender/receiver pair.
pub fn channel<T: Clone>() -> (SignalSender<T>, SignalReceiver<T>) {
    let (tx, rx) = watch::channel(None);
    (SignalSender { tx }, SignalReceiver { rx })
}

/// Producer side.
#[derive(Debug)]
pub struct SignalSender<T> {
    tx: watch::Sender<Option<T>>,
}

impl<T: Clone> SignalSender<T> {
    /// Store `value`, replacing any value not yet received.
    pub fn send(&self, value: T) {
        self.tx.send_replace(Some(value));
    }
}

/// Consumer side.
#[derive(Debug)]
pub struct SignalReceiver<T> {
    rx: watch::Receiver<Option<T>>,
}

impl<T: Clone> SignalReceiver<T> {
    /// Wait for the next undelivered value.
    ///
    /// Returns `None` once every sender is dropped and nothing is pending.
    /// Cancel-safe: dropping the future never loses a value.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            self.rx.changed().await.ok()?;
            if let Some(value) = self.rx.borrow_and_update().clone() {
                return Some(value);
            }
        }
    }

    /// Take the pending value without waiting.
    pub fn try_recv(&mut self) -> Option<T> {
        if !self.rx.has_changed().unwrap_or(false) {
            return None;
        }
        self.rx.borrow_and_update().clone()
    }
}
