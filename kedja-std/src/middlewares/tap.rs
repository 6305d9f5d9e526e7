//! Observation middleware.

use kedja_core::{DispatchResult, Middleware, Next, Store};

/// A middleware that invokes a callback with each action, then forwards it.
///
/// The callback sees the action before the rest of the chain does and cannot
/// alter it; wrap a closure with `from_fn` when you need to substitute or
/// swallow actions.
pub struct Tap<F> {
    callback: F,
}

impl<F> Tap<F> {
    /// Create a tap around the given callback.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<S, F> Middleware<S> for Tap<F>
where
    S: Store,
    F: Fn(&S::Action) + Send + Sync + 'static,
{
    fn handle(
        &self,
        _store: &S,
        action: S::Action,
        next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action> {
        (self.callback)(&action);
        next.call(action)
    }
}
