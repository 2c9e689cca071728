//! Observable state container.
//!
//! A [`Store`] owns one value and notifies subscribers whenever it
//! changes. It is backed by a `tokio::sync::watch` channel, so renderers
//! can await changes while controllers mutate from other tasks.

use std::sync::Arc;

use tokio::sync::watch;

/// Cloneable handle to a shared, observable value
pub struct Store<S> {
    tx: Arc<watch::Sender<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<S: Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Inspect the current value without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Mutate the value and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        self.tx.send_modify(f);
    }

    /// Mutate the value; subscribers are notified only if `f` returns true.
    ///
    /// The check and the mutation happen under one lock, which makes this
    /// the place for check-and-set guards.
    pub fn update_if(&self, f: impl FnOnce(&mut S) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }

    /// Discard the current value (screen torn down)
    pub fn reset(&self)
    where
        S: Default,
    {
        self.tx.send_replace(S::default());
    }
}

#[cfg(test)]
impl<S> Store<S> {
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Receiver that wakes on every change
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }
}
