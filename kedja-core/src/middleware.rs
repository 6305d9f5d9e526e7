//! Middleware trait and closure adapter.

use crate::{error::DispatchResult, next::Next, store::Store};
use std::sync::Arc;

/// One processing step in the dispatch pipeline.
///
/// A middleware receives the store-facing API, the action being dispatched,
/// and the continuation covering the rest of the pipeline. It decides what
/// to do with all three: forward the action unchanged, substitute it, swallow
/// it, observe it, or fail the dispatch. Whatever it returns becomes the
/// result of the step above it.
///
/// Middleware own no registry state; registries hold shared handles
/// ([`ArcMiddleware`]) and compare them by pointer identity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Middleware<{S}>`",
    label = "missing `Middleware` implementation",
    note = "Middleware must implement `handle` for the specific store type `{S}`."
)]
pub trait Middleware<S: Store>: Send + Sync + 'static {
    /// Process one action, forwarding it to `next` zero or more times.
    fn handle(
        &self,
        store: &S,
        action: S::Action,
        next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action>;
}

/// A shared, identity-comparable middleware handle.
///
/// Registries store and match these by pointer identity (`Arc::ptr_eq`), not
/// structural equality: hold on to the clone you registered if you intend to
/// remove it later.
pub type ArcMiddleware<S> = Arc<dyn Middleware<S>>;

// Allow shared handles to be used directly where a middleware is expected.
impl<S: Store, M: Middleware<S> + ?Sized> Middleware<S> for Arc<M> {
    fn handle(
        &self,
        store: &S,
        action: S::Action,
        next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action> {
        (**self).handle(store, action, next)
    }
}

/// Wrapper turning a closure into a [`Middleware`].
///
/// Built with [`from_fn`]. A wrapper struct rather than a blanket impl so
/// concrete middleware types and closures can coexist under one trait.
pub struct FnMiddleware<F> {
    f: F,
}

/// Wrap a closure as a [`Middleware`].
///
/// # Example
///
/// ```rust,ignore
/// let logger = from_fn(|_store: &MyStore, action, next: &dyn Next<MyAction>| {
///     println!("dispatching {action:?}");
///     next.call(action)
/// });
/// ```
pub fn from_fn<S, F>(f: F) -> FnMiddleware<F>
where
    S: Store,
    F: Fn(&S, S::Action, &dyn Next<S::Action>) -> DispatchResult<S::Action>
        + Send
        + Sync
        + 'static,
{
    FnMiddleware { f }
}

impl<S, F> Middleware<S> for FnMiddleware<F>
where
    S: Store,
    F: Fn(&S, S::Action, &dyn Next<S::Action>) -> DispatchResult<S::Action>
        + Send
        + Sync
        + 'static,
{
    fn handle(
        &self,
        store: &S,
        action: S::Action,
        next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action> {
        (self.f)(store, action, next)
    }
}
