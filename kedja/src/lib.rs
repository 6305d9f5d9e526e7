//! # kedja - Runtime-Mutable Middleware Chains
//!
//! `kedja` extends a reducer/action-dispatch pipeline with middleware that
//! can be added and removed **after** the store has been created. The host
//! installs a single [`DynamicMiddleware`] value through its ordinary
//! "apply middleware" mechanism; from then on the middleware set behind it
//! is live: additions are honored on the very next dispatch, removals are
//! excluded the same way.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kedja::{DynamicMiddleware, from_fn, Next};
//! use std::sync::Arc;
//!
//! let enhancer: DynamicMiddleware<MyStore> = DynamicMiddleware::new();
//! let registry = enhancer.registry().clone();
//! // install `enhancer` into the host store, then at any later point:
//! registry.add(Arc::new(from_fn(|_store: &MyStore, action, next: &dyn Next<MyAction>| {
//!     println!("dispatching {action:?}");
//!     next.call(action)
//! })));
//! ```
//!
//! For single-store applications the process-wide default pair is exposed as
//! free functions: install [`enhancer()`](enhancer) and steer it with
//! [`add`] / [`remove`] / [`reset`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use kedja_core::{
    // Action marker
    Action,
    // Middleware
    ArcMiddleware,
    // Error types
    BoxError,
    // Composition
    Chain,
    DispatchResult,
    FnMiddleware,
    Middleware,
    // Continuation
    Next,
    // Store-facing API
    Store,
    compose,
    from_fn,
};

// Dynamic dispatch
pub use kedja_std::dynamic::{DynamicMiddleware, Registry};

// Process-wide default pair
pub use kedja_std::global::{add, enhancer, extend, remove, reset};

/// Stock middleware implementations.
pub mod middlewares {
    #![allow(clippy::wildcard_imports)]
    pub use kedja_std::middlewares::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use kedja_std::testing::*;
}

/// Prelude module - common imports for Kedja.
///
/// # Usage
///
/// ```rust,ignore
/// use kedja::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Action marker
        Action,
        ArcMiddleware,
        // Errors
        BoxError,
        DispatchResult,
        // Dynamic dispatch
        DynamicMiddleware,
        // Core traits
        Middleware,
        Next,
        Registry,
        Store,
        // Composition
        compose,
        from_fn,
    };
}
