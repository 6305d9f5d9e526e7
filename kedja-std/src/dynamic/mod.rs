//! Dynamic dispatch support.
//!
//! The registry holds the live middleware list; the enhancer re-reads it on
//! every dispatch. Use when the middleware set is determined (and changed)
//! at runtime rather than fixed at store construction.

pub mod enhancer;
pub mod registry;

pub use enhancer::DynamicMiddleware;
pub use registry::Registry;
