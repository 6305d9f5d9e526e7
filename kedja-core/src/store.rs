//! Store-facing API handed to middleware.

use crate::{action::Action, error::DispatchResult};

/// The store-facing surface the host pipeline exposes to each middleware.
///
/// This is the outermost of the protocol's three levels: the host hands a
/// `&S` to every middleware on every dispatch. A middleware can read the
/// current state or re-enter dispatch from the top of the pipeline; how
/// either is carried out is a host concern, this crate only defines the
/// seam.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Store`",
    label = "missing `Store` implementation",
    note = "Hosts implement `Store` on the value handed to middleware (state access plus re-entrant dispatch)."
)]
pub trait Store: Send + Sync + 'static {
    /// The action type this store dispatches.
    type Action: Action;

    /// The state snapshot type returned by [`Store::state`].
    type State;

    /// A snapshot of the current state.
    fn state(&self) -> Self::State;

    /// Re-entrant dispatch: sends `action` through the full pipeline,
    /// starting at the outermost middleware.
    fn dispatch(&self, action: Self::Action) -> DispatchResult<Self::Action>;
}
