//! The dynamic middleware enhancer.

use crate::dynamic::registry::Registry;
use kedja_core::{DispatchResult, Middleware, Next, Store, compose};

/// A middleware whose chain is recomputed from a [`Registry`] on every
/// dispatch.
///
/// Install one of these wherever the host pipeline accepts a single
/// middleware value. Middleware added to the bound registry afterwards are
/// honored on the very next dispatch; removed middleware are excluded the
/// same way. With an empty registry it is a transparent pass-through.
///
/// Clones share the registry binding; the enhancer holds no other state.
pub struct DynamicMiddleware<S: Store> {
    registry: Registry<S>,
}

impl<S: Store> DynamicMiddleware<S> {
    /// Create a fresh (registry, enhancer) pair, isolated from every other
    /// pair.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Bind an enhancer to an existing registry.
    pub fn with_registry(registry: Registry<S>) -> Self {
        Self { registry }
    }

    /// The registry this enhancer reads on every dispatch.
    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }
}

impl<S: Store> Middleware<S> for DynamicMiddleware<S> {
    fn handle(
        &self,
        store: &S,
        action: S::Action,
        next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action> {
        // Snapshot at dispatch start: an in-flight dispatch keeps the chain
        // it was composed with even if a middleware mutates the registry.
        let snapshot = self.registry.snapshot();
        compose(&snapshot, store, next).call(action)
    }
}

impl<S: Store> Default for DynamicMiddleware<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Store> Clone for DynamicMiddleware<S> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}
