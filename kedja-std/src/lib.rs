//! # kedja-std
//!
//! Standard implementations for the Kedja dynamic middleware library.
//!
//! This crate provides:
//! - **Dynamic dispatch**: [`Registry`], [`DynamicMiddleware`]
//! - **Process-wide default pair**: [`global`]
//! - **Stock middlewares**: Trace, Tap, Gate, Throttle
//! - **Testing toolkit**: [`testing`]
//!
//! [`Registry`]: dynamic::Registry
//! [`DynamicMiddleware`]: dynamic::DynamicMiddleware

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use kedja_core;

// Modules
pub mod dynamic;
pub mod global;
pub mod middlewares;
pub mod testing;
