//! Static chain composition.

use crate::{error::DispatchResult, middleware::ArcMiddleware, next::Next, store::Store};

/// A composed view over an ordered middleware slice.
///
/// `Chain` implements [`Next`]: calling it runs the first middleware in the
/// slice with the remainder of the slice as its continuation, so the
/// first-registered middleware occupies the outermost position. An empty
/// slice forwards straight to the terminal continuation.
pub struct Chain<'a, S: Store> {
    middlewares: &'a [ArcMiddleware<S>],
    store: &'a S,
    terminal: &'a dyn Next<S::Action>,
}

/// Compose an ordered middleware slice around a terminal continuation.
///
/// This is the same composition a host applies to a static middleware list.
/// The dynamic enhancer re-runs it per dispatch over a fresh registry
/// snapshot; nothing about `Chain` itself is dynamic.
pub fn compose<'a, S: Store>(
    middlewares: &'a [ArcMiddleware<S>],
    store: &'a S,
    terminal: &'a dyn Next<S::Action>,
) -> Chain<'a, S> {
    Chain {
        middlewares,
        store,
        terminal,
    }
}

impl<S: Store> Next<S::Action> for Chain<'_, S> {
    fn call(&self, action: S::Action) -> DispatchResult<S::Action> {
        match self.middlewares.split_first() {
            Some((head, rest)) => head.handle(
                self.store,
                action,
                &Chain {
                    middlewares: rest,
                    store: self.store,
                    terminal: self.terminal,
                },
            ),
            None => self.terminal.call(action),
        }
    }
}
