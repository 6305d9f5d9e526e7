//! Predicate gate middleware.

use kedja_core::{DispatchResult, Middleware, Next, Store};

/// A middleware that only forwards actions matching a predicate.
///
/// Non-matching actions are swallowed: the chain below, and therefore the
/// reducer, never sees them, and the action is returned to the dispatch
/// caller unchanged.
pub struct Gate<F> {
    predicate: F,
}

impl<F> Gate<F> {
    /// Create a gate around the given predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<S, F> Middleware<S> for Gate<F>
where
    S: Store,
    F: Fn(&S::Action) -> bool + Send + Sync + 'static,
{
    fn handle(
        &self,
        _store: &S,
        action: S::Action,
        next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action> {
        if (self.predicate)(&action) {
            next.call(action)
        } else {
            Ok(action)
        }
    }
}
