//! Rate limiting middleware.

use kedja_core::{DispatchResult, Middleware, Next, Store};
use std::{
    sync::{Mutex, PoisonError},
    time::{Duration, Instant},
};
use thiserror::Error;

/// Error returned when a dispatch exceeds the throttle budget.
#[derive(Debug, Error)]
#[error("throttled: more than {budget} actions within {window:?}")]
pub struct ThrottleError {
    /// The budget that was exceeded.
    pub budget: usize,
    /// The window the budget applies to.
    pub window: Duration,
}

/// A middleware that caps how many actions pass per time window.
///
/// Actions beyond the budget fail the dispatch with [`ThrottleError`]; a new
/// window opens once `window` has elapsed since the current one started.
pub struct Throttle {
    budget: usize,
    window: Duration,
    state: Mutex<WindowState>,
}

struct WindowState {
    opened_at: Option<Instant>,
    passed: usize,
}

impl Throttle {
    /// Allow at most `budget` actions per `window`.
    pub fn new(budget: usize, window: Duration) -> Self {
        Self {
            budget,
            window,
            state: Mutex::new(WindowState {
                opened_at: None,
                passed: 0,
            }),
        }
    }

    fn admit(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let window_open = state
            .opened_at
            .is_some_and(|opened| now.duration_since(opened) < self.window);
        if !window_open {
            state.opened_at = Some(now);
            state.passed = 0;
        }
        if state.passed < self.budget {
            state.passed += 1;
            true
        } else {
            false
        }
    }
}

impl<S: Store> Middleware<S> for Throttle {
    fn handle(
        &self,
        _store: &S,
        action: S::Action,
        next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action> {
        if self.admit() {
            next.call(action)
        } else {
            Err(Box::new(ThrottleError {
                budget: self.budget,
                window: self.window,
            }))
        }
    }
}
