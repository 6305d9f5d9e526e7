use kedja::{Action, DispatchResult, Middleware, Next, Store, testing::TestStore};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Action and State Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum TestAction {
    Foo,
    Other,
}

impl Action for TestAction {}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub foo: Option<String>,
}

pub fn reducer(state: &AppState, action: &TestAction) -> AppState {
    match action {
        TestAction::Foo => AppState {
            foo: Some("bar".to_string()),
        },
        TestAction::Other => state.clone(),
    }
}

pub type FooStore = TestStore<TestAction, AppState>;

// ============================================================================
// Test Middleware
// ============================================================================

pub struct OrderRecordingMiddleware {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl<S: Store> Middleware<S> for OrderRecordingMiddleware {
    fn handle(
        &self,
        _store: &S,
        action: S::Action,
        next: &dyn Next<S::Action>,
    ) -> DispatchResult<S::Action> {
        self.order.lock().unwrap().push(self.id);
        next.call(action)
    }
}
