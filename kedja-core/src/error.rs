//! Error types for the dispatch pipeline.
//!
//! The pipeline is a transparent pass-through: whatever a middleware or the
//! terminal step raises travels to the dispatch caller unmodified. There is
//! no crate-level error enum here; fallible stock middleware define their
//! error types next to their implementation.

/// A boxed error type carried through the dispatch pipeline.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The result of sending one action through a middleware chain.
///
/// `Ok` carries the action as it emerged from the chain; a middleware may
/// substitute a different value. `Err` is whatever some step raised,
/// unmodified.
pub type DispatchResult<A> = Result<A, BoxError>;
