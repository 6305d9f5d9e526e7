//! Action marker trait.

/// A marker trait for values dispatched through the pipeline.
///
/// Actions must be `Send + Sync + 'static` so composed chains can run on any
/// thread.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Debug)]
/// enum AppAction { Increment, Decrement }
///
/// impl Action for AppAction {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Action",
    label = "must be `Send + Sync + 'static`",
    note = "Implement `Action` for every type dispatched through the pipeline."
)]
pub trait Action: Send + Sync + 'static {}

// Common Action implementations
impl Action for () {}
impl Action for String {}
impl Action for &'static str {}
impl<T: Action> Action for Box<T> {}
impl<T: Action> Action for std::sync::Arc<T> {}
impl<T: Action> Action for Vec<T> {}
impl<T: Action> Action for Option<T> {}
