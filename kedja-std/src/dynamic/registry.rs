//! Live registry of currently active middleware.

use kedja_core::{ArcMiddleware, Store};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The mutable ordered collection of currently active middleware.
///
/// A `Registry` is a cheap handle: clones share the same underlying
/// sequence, which is how the enhancer and the code mutating the set stay in
/// sync. Ordering is insertion order, duplicates are permitted (each
/// occurrence runs as a distinct chain position), and identity is `Arc`
/// pointer identity: hold on to the clone you registered to remove it
/// later.
pub struct Registry<S: Store> {
    entries: Arc<RwLock<Vec<ArcMiddleware<S>>>>,
}

impl<S: Store> Registry<S> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append one middleware to the end of the sequence.
    ///
    /// Takes effect on the next dispatch through any enhancer bound to this
    /// registry.
    pub fn add(&self, middleware: ArcMiddleware<S>) {
        self.write().push(middleware);
    }

    /// Append several middleware, preserving the order given.
    pub fn extend<I>(&self, middlewares: I)
    where
        I: IntoIterator<Item = ArcMiddleware<S>>,
    {
        self.write().extend(middlewares);
    }

    /// Remove every occurrence of the given middleware.
    ///
    /// Matching is by pointer identity, not structural equality. Removing a
    /// middleware that was never added is a no-op.
    pub fn remove(&self, middleware: &ArcMiddleware<S>) {
        self.write().retain(|entry| !Arc::ptr_eq(entry, middleware));
    }

    /// Clear the sequence. Idempotent, never an error.
    pub fn reset(&self) {
        self.write().clear();
    }

    /// The current ordered sequence, fresh at call time.
    ///
    /// Returns clones of the shared handles. The lock is released before the
    /// caller runs anything, so a chain composed from this snapshot never
    /// blocks registry mutation and never observes mutation mid-dispatch.
    pub fn snapshot(&self) -> Vec<ArcMiddleware<S>> {
        self.read().clone()
    }

    /// Number of registered middleware, counting duplicates.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the registry is currently empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Registry operations are idempotent, so a poisoned lock is safe to
    // recover by taking the inner value.
    fn read(&self) -> RwLockReadGuard<'_, Vec<ArcMiddleware<S>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ArcMiddleware<S>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: Store> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Store> Clone for Registry<S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}
