//! # kedja-core
//!
//! Core traits for the Kedja dynamic middleware library.
//!
//! This crate has no dependencies and is designed to be imported by
//! middleware authors and host pipelines that don't need the full
//! `kedja-std` implementation.
//!
//! # Protocol
//!
//! A dispatch pipeline is built from four seams, composed in dependency
//! order:
//!
//! ## [`Action`]
//!
//! The marker trait for values sent through the pipeline. The host defines
//! what an action is; this crate only requires it to be thread-safe.
//!
//! ## [`Store`]
//!
//! The store-facing surface the host hands to each middleware: a state
//! snapshot and re-entrant dispatch. Hosts implement this on their store (or
//! on a narrowed view of it); this crate never constructs one.
//!
//! ## [`Middleware`]
//!
//! One processing step: receives the store, the action, and the continuation
//! ([`Next`]), and returns the pipeline's result value. Middleware are held
//! and compared by shared handle ([`ArcMiddleware`]); closures participate
//! through [`from_fn`].
//!
//! ## [`compose`]
//!
//! Folds an ordered middleware slice into a single [`Chain`] around a
//! terminal continuation. The first middleware in the slice occupies the
//! outermost position, exactly as a host composes a static middleware list.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod chain;
mod error;
mod middleware;
mod next;
mod store;

// Re-exports
pub use action::Action;
pub use chain::{Chain, compose};
pub use error::{BoxError, DispatchResult};
pub use middleware::{ArcMiddleware, FnMiddleware, Middleware, from_fn};
pub use next::Next;
pub use store::Store;
