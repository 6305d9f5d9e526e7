//! Continuation trait for middleware chains.

use crate::{action::Action, error::DispatchResult};

/// The continuation a middleware forwards an action to.
///
/// Inside a composed chain, calling it runs the next middleware in line; at
/// the end of the chain it runs the true next handler supplied by the host
/// pipeline at the installation point (typically the reducer boundary).
///
/// A middleware may call its continuation zero times (swallowing the
/// action), once (the usual case), or several times.
pub trait Next<A: Action> {
    /// Forward the action to the rest of the pipeline.
    fn call(&self, action: A) -> DispatchResult<A>;
}
