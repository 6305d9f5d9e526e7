//! Process-wide default (registry, enhancer) pairs.
//!
//! For single-store applications it is convenient to steer the middleware
//! set through free functions without threading a registry handle around.
//! Statics cannot be generic, so the default pairs live in a map keyed by
//! store type: each store type gets exactly one default pair, constructed on
//! first use and alive for the rest of the process.
//!
//! Tests, and anything else wanting isolation, should prefer fresh
//! [`DynamicMiddleware::new`] pairs; the default pair is deliberately shared
//! state with no teardown beyond [`reset`].

use crate::dynamic::{DynamicMiddleware, Registry};
use kedja_core::{ArcMiddleware, Store};
use once_cell::sync::Lazy;
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

static PAIRS: Lazy<RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// The default enhancer for store type `S`.
///
/// Every call returns a clone bound to the same default registry, so the
/// value can be installed into a store while [`add`] / [`remove`] /
/// [`reset`] keep steering it.
pub fn enhancer<S: Store>() -> DynamicMiddleware<S> {
    let key = TypeId::of::<S>();
    {
        let pairs = PAIRS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(pair) = pairs
            .get(&key)
            .and_then(|entry| entry.downcast_ref::<DynamicMiddleware<S>>())
        {
            return pair.clone();
        }
    }
    let mut pairs = PAIRS.write().unwrap_or_else(PoisonError::into_inner);
    pairs
        .entry(key)
        .or_insert_with(|| Box::new(DynamicMiddleware::<S>::new()))
        .downcast_ref::<DynamicMiddleware<S>>()
        .expect("default pair entry is keyed by its own store type")
        .clone()
}

/// Append one middleware to the default registry for `S`.
pub fn add<S: Store>(middleware: ArcMiddleware<S>) {
    registry::<S>().add(middleware);
}

/// Append several middleware to the default registry for `S`, preserving
/// the order given.
pub fn extend<S, I>(middlewares: I)
where
    S: Store,
    I: IntoIterator<Item = ArcMiddleware<S>>,
{
    registry::<S>().extend(middlewares);
}

/// Remove every occurrence of the given middleware from the default
/// registry for `S`.
pub fn remove<S: Store>(middleware: &ArcMiddleware<S>) {
    registry::<S>().remove(middleware);
}

/// Clear the default registry for `S`. Idempotent, never an error.
pub fn reset<S: Store>() {
    registry::<S>().reset();
}

fn registry<S: Store>() -> Registry<S> {
    enhancer::<S>().registry().clone()
}
