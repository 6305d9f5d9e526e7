//! Tracing middleware for action observation.

use kedja_core::{DispatchResult, Middleware, Next, Store};

/// A middleware that logs every action passing through, then forwards it.
///
/// Emits nothing unless the `tracing` feature is enabled.
pub struct Trace;

impl<S> Middleware<S> for Trace
where
    S: Store,
    S::Action: std::fmt::Debug,
{
    fn handle(
        &self,
        _store: &S,
        action: S::Action,
        next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(?action, "dispatching action");
        }
        next.call(action)
    }
}
