//! Testing utilities for Kedja.
//!
//! This module provides utilities to make testing middleware chains easier.
//!
//! # Features
//!
//! - [`TestStore`]: a minimal in-memory host store with a reducer and one
//!   middleware slot
//! - [`RecordingMiddleware`]: a middleware that records every action it sees
//! - [`CountingMiddleware`]: a middleware that counts invocations
//! - [`FailingMiddleware`]: a middleware that fails every dispatch

use kedja_core::{Action, ArcMiddleware, DispatchResult, Middleware, Next, Store};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Store
// ============================================================================

type Reducer<A, St> = Box<dyn Fn(&St, &A) -> St + Send + Sync>;

/// A minimal in-memory host store for exercising middleware chains.
///
/// Holds a state value, a reducer, and at most one installed middleware
/// (the slot a host's "apply middleware" mechanism represents). `dispatch`
/// routes the action through the installed middleware (if any) into the
/// terminal reduce step.
///
/// # Example
///
/// ```rust,ignore
/// let enhancer = DynamicMiddleware::new();
/// let registry = enhancer.registry().clone();
/// let store = TestStore::with_middleware(State::default(), reducer, enhancer);
///
/// registry.add(middleware);
/// store.dispatch(action)?;
/// ```
pub struct TestStore<A: Action, St> {
    state: Mutex<St>,
    reducer: Reducer<A, St>,
    middleware: Option<ArcMiddleware<Self>>,
}

impl<A, St> TestStore<A, St>
where
    A: Action,
    St: Clone + Send + Sync + 'static,
{
    /// Create a store with no middleware installed.
    pub fn new(initial: St, reducer: impl Fn(&St, &A) -> St + Send + Sync + 'static) -> Self {
        Self {
            state: Mutex::new(initial),
            reducer: Box::new(reducer),
            middleware: None,
        }
    }

    /// Create a store with a single middleware value installed, the way a
    /// host installs an enhancer at construction time.
    pub fn with_middleware(
        initial: St,
        reducer: impl Fn(&St, &A) -> St + Send + Sync + 'static,
        middleware: impl Middleware<Self>,
    ) -> Self {
        Self {
            state: Mutex::new(initial),
            reducer: Box::new(reducer),
            middleware: Some(Arc::new(middleware)),
        }
    }
}

// The terminal reduce step: the "true next" of this store's pipeline.
struct Reduce<'a, A: Action, St> {
    store: &'a TestStore<A, St>,
}

impl<A, St> Next<A> for Reduce<'_, A, St>
where
    A: Action,
    St: Clone + Send + Sync + 'static,
{
    fn call(&self, action: A) -> DispatchResult<A> {
        let mut state = self.store.state.lock().unwrap();
        *state = (self.store.reducer)(&state, &action);
        Ok(action)
    }
}

impl<A, St> Store for TestStore<A, St>
where
    A: Action,
    St: Clone + Send + Sync + 'static,
{
    type Action = A;
    type State = St;

    fn state(&self) -> St {
        self.state.lock().unwrap().clone()
    }

    fn dispatch(&self, action: A) -> DispatchResult<A> {
        let reduce = Reduce { store: self };
        match &self.middleware {
            Some(middleware) => middleware.handle(self, action, &reduce),
            None => reduce.call(action),
        }
    }
}

// ============================================================================
// Recording Middleware
// ============================================================================

/// A middleware that records every action it sees, then forwards it.
///
/// Useful for verifying which actions reached a given chain position.
/// Clones share the record.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingMiddleware::new();
/// registry.add(Arc::new(recorder.clone()));
///
/// store.dispatch(action)?;
///
/// assert_eq!(recorder.actions(), vec![action]);
/// ```
pub struct RecordingMiddleware<A> {
    actions: Arc<Mutex<Vec<A>>>,
}

impl<A: Clone> RecordingMiddleware<A> {
    /// Create a new recording middleware.
    pub fn new() -> Self {
        Self {
            actions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded actions.
    pub fn actions(&self) -> Vec<A> {
        self.actions.lock().unwrap().clone()
    }

    /// Get the number of recorded actions.
    pub fn count(&self) -> usize {
        self.actions.lock().unwrap().len()
    }

    /// Clear all recorded actions.
    pub fn clear(&self) {
        self.actions.lock().unwrap().clear();
    }
}

impl<A: Clone> Default for RecordingMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for RecordingMiddleware<A> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<A, S> Middleware<S> for RecordingMiddleware<A>
where
    A: Action + Clone,
    S: Store<Action = A>,
{
    fn handle(&self, _store: &S, action: A, next: &dyn Next<A>) -> DispatchResult<A> {
        self.actions.lock().unwrap().push(action.clone());
        next.call(action)
    }
}

// ============================================================================
// Counting Middleware
// ============================================================================

/// A middleware that counts how many dispatches passed through it.
///
/// Clones share the count.
pub struct CountingMiddleware {
    count: Arc<AtomicUsize>,
}

impl CountingMiddleware {
    /// Create a new counting middleware.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingMiddleware {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<S: Store> Middleware<S> for CountingMiddleware {
    fn handle(
        &self,
        _store: &S,
        action: S::Action,
        next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action> {
        self.count.fetch_add(1, Ordering::SeqCst);
        next.call(action)
    }
}

// ============================================================================
// Failing Middleware
// ============================================================================

/// A middleware that fails every dispatch with a fixed message, without
/// calling `next`.
///
/// Useful for verifying that middleware errors reach the dispatch caller
/// unmodified.
pub struct FailingMiddleware {
    message: String,
}

impl FailingMiddleware {
    /// Create a failing middleware with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<S: Store> Middleware<S> for FailingMiddleware {
    fn handle(
        &self,
        _store: &S,
        _action: S::Action,
        _next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action> {
        Err(self.message.clone().into())
    }
}
