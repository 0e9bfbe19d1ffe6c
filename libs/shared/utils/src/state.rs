use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

/// Observable state holder: one current value, last write wins, any number of subscribers.
pub struct Slot<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> Slot<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replaces the value and notifies subscribers. Works with no subscribers attached.
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Updates in place; subscribers are notified only when `modify` returns `true`.
    pub fn modify<F>(&self, modify: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        self.sender.send_if_modified(modify)
    }

    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.sender.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

impl<T: Clone> Slot<T> {
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }
}

impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&*self.sender.borrow()).finish()
    }
}
