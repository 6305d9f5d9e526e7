//! Dispatch-time behavior of the dynamic enhancer.

use kedja::{
    ArcMiddleware, DynamicMiddleware, Next, Store, from_fn,
    testing::{CountingMiddleware, FailingMiddleware, RecordingMiddleware, TestStore},
};
use std::sync::{Arc, Mutex};

mod common;
use common::{AppState, FooStore, OrderRecordingMiddleware, TestAction, reducer};

fn store_with_fresh_pair() -> (FooStore, kedja::Registry<FooStore>) {
    let enhancer: DynamicMiddleware<FooStore> = DynamicMiddleware::new();
    let registry = enhancer.registry().clone();
    let store = TestStore::with_middleware(AppState::default(), reducer, enhancer);
    (store, registry)
}

#[test]
fn store_works_without_error_when_registry_is_empty() {
    let (store, _registry) = store_with_fresh_pair();

    assert_eq!(store.state(), AppState::default());

    store.dispatch(TestAction::Foo).unwrap();

    assert_eq!(
        store.state(),
        AppState {
            foo: Some("bar".to_string())
        }
    );
}

#[test]
fn middleware_added_after_store_creation_is_called() {
    let (store, registry) = store_with_fresh_pair();

    let recorder = RecordingMiddleware::new();
    registry.add(Arc::new(recorder.clone()));

    store.dispatch(TestAction::Foo).unwrap();

    assert_eq!(recorder.actions(), vec![TestAction::Foo]);
}

#[test]
fn all_middlewares_from_a_single_extend_are_called() {
    let (store, registry) = store_with_fresh_pair();

    let first = RecordingMiddleware::new();
    let second = RecordingMiddleware::new();
    registry.extend([
        Arc::new(first.clone()) as ArcMiddleware<FooStore>,
        Arc::new(second.clone()),
    ]);

    store.dispatch(TestAction::Foo).unwrap();

    assert_eq!(first.actions(), vec![TestAction::Foo]);
    assert_eq!(second.actions(), vec![TestAction::Foo]);
}

#[test]
fn all_middlewares_from_separate_adds_are_called() {
    let (store, registry) = store_with_fresh_pair();

    let first = RecordingMiddleware::new();
    let second = RecordingMiddleware::new();
    registry.add(Arc::new(first.clone()));
    registry.add(Arc::new(second.clone()));

    store.dispatch(TestAction::Foo).unwrap();

    assert_eq!(first.actions(), vec![TestAction::Foo]);
    assert_eq!(second.actions(), vec![TestAction::Foo]);
}

#[test]
fn removed_middleware_is_not_called() {
    let (store, registry) = store_with_fresh_pair();

    let first = RecordingMiddleware::new();
    let second = RecordingMiddleware::new();
    let second_handle: ArcMiddleware<FooStore> = Arc::new(second.clone());
    registry.add(Arc::new(first.clone()));
    registry.add(second_handle.clone());
    registry.remove(&second_handle);

    store.dispatch(TestAction::Foo).unwrap();

    assert_eq!(first.actions(), vec![TestAction::Foo]);
    assert_eq!(second.count(), 0);
}

#[test]
fn reset_clears_all_middleware() {
    let (store, registry) = store_with_fresh_pair();

    let first = RecordingMiddleware::new();
    let second = RecordingMiddleware::new();
    registry.extend([
        Arc::new(first.clone()) as ArcMiddleware<FooStore>,
        Arc::new(second.clone()),
    ]);
    registry.reset();
    // Resetting an already-empty registry stays a no-op.
    registry.reset();

    store.dispatch(TestAction::Foo).unwrap();

    assert_eq!(first.count(), 0);
    assert_eq!(second.count(), 0);
    assert_eq!(
        store.state(),
        AppState {
            foo: Some("bar".to_string())
        }
    );
}

#[test]
fn duplicate_handle_runs_once_per_occurrence_and_remove_drops_all() {
    let (store, registry) = store_with_fresh_pair();

    let counter = CountingMiddleware::new();
    let handle: ArcMiddleware<FooStore> = Arc::new(counter.clone());
    registry.add(handle.clone());
    registry.add(handle.clone());

    store.dispatch(TestAction::Foo).unwrap();
    assert_eq!(counter.count(), 2, "each occurrence is a chain position");

    registry.remove(&handle);
    store.dispatch(TestAction::Foo).unwrap();
    assert_eq!(counter.count(), 2, "remove drops every occurrence at once");
}

#[test]
fn dispatch_observes_registry_contents_at_dispatch_time() {
    let (store, registry) = store_with_fresh_pair();

    let recorder = RecordingMiddleware::new();

    store.dispatch(TestAction::Foo).unwrap();
    registry.add(Arc::new(recorder.clone()));
    store.dispatch(TestAction::Other).unwrap();

    // Only the dispatch after the add went through the middleware.
    assert_eq!(recorder.actions(), vec![TestAction::Other]);
}

#[test]
fn middlewares_execute_in_registration_order() {
    let (store, registry) = store_with_fresh_pair();

    let order = Arc::new(Mutex::new(Vec::new()));
    for id in 1..=3 {
        registry.add(Arc::new(OrderRecordingMiddleware {
            id,
            order: order.clone(),
        }));
    }

    store.dispatch(TestAction::Foo).unwrap();

    assert_eq!(
        *order.lock().unwrap(),
        vec![1, 2, 3],
        "middleware should execute in registration order"
    );
}

#[test]
fn first_registered_middleware_wraps_outermost() {
    let (store, registry) = store_with_fresh_pair();

    let marks: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let outer_marks = marks.clone();
    registry.add(Arc::new(from_fn(
        move |_store: &FooStore, action: TestAction, next: &dyn Next<TestAction>| {
            outer_marks.lock().unwrap().push("outer-enter");
            let result = next.call(action);
            outer_marks.lock().unwrap().push("outer-exit");
            result
        },
    )));

    let inner_marks = marks.clone();
    registry.add(Arc::new(from_fn(
        move |_store: &FooStore, action: TestAction, next: &dyn Next<TestAction>| {
            inner_marks.lock().unwrap().push("inner-enter");
            let result = next.call(action);
            inner_marks.lock().unwrap().push("inner-exit");
            result
        },
    )));

    store.dispatch(TestAction::Foo).unwrap();

    assert_eq!(
        *marks.lock().unwrap(),
        vec!["outer-enter", "inner-enter", "inner-exit", "outer-exit"]
    );
}

#[test]
fn in_flight_dispatch_keeps_its_snapshot() {
    let (store, registry) = store_with_fresh_pair();

    let counter = CountingMiddleware::new();
    let late: ArcMiddleware<FooStore> = Arc::new(counter.clone());

    let mutating_registry = registry.clone();
    registry.add(Arc::new(from_fn(
        move |_store: &FooStore, action: TestAction, next: &dyn Next<TestAction>| {
            mutating_registry.add(late.clone());
            next.call(action)
        },
    )));

    store.dispatch(TestAction::Foo).unwrap();
    assert_eq!(counter.count(), 0, "mid-dispatch add must not join this chain");

    store.dispatch(TestAction::Foo).unwrap();
    assert_eq!(counter.count(), 1, "the next dispatch observes the addition");
}

#[test]
fn middleware_errors_reach_the_dispatch_caller_unmodified() {
    let (store, registry) = store_with_fresh_pair();

    let downstream = RecordingMiddleware::new();
    registry.extend([
        Arc::new(FailingMiddleware::new("boom")) as ArcMiddleware<FooStore>,
        Arc::new(downstream.clone()),
    ]);

    let err = store.dispatch(TestAction::Foo).unwrap_err();

    assert_eq!(err.to_string(), "boom");
    assert_eq!(downstream.count(), 0, "the chain stops at the failure");
    assert_eq!(store.state(), AppState::default(), "the reducer never ran");
}

struct LoggingTerminal {
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl Next<TestAction> for LoggingTerminal {
    fn call(&self, action: TestAction) -> kedja::DispatchResult<TestAction> {
        self.log.lock().unwrap().push("terminal");
        Ok(action)
    }
}

#[test]
fn compose_runs_a_static_slice_the_same_way() {
    let store = TestStore::new(AppState::default(), reducer);

    let order = Arc::new(Mutex::new(Vec::new()));
    let slice: Vec<ArcMiddleware<FooStore>> = vec![
        Arc::new(OrderRecordingMiddleware {
            id: 1,
            order: order.clone(),
        }),
        Arc::new(OrderRecordingMiddleware {
            id: 2,
            order: order.clone(),
        }),
    ];

    let log = Arc::new(Mutex::new(Vec::new()));
    let terminal = LoggingTerminal { log: log.clone() };

    let result = kedja::compose(&slice, &store, &terminal)
        .call(TestAction::Foo)
        .unwrap();

    assert_eq!(result, TestAction::Foo);
    assert_eq!(*order.lock().unwrap(), vec![1, 2]);
    assert_eq!(*log.lock().unwrap(), vec!["terminal"]);
}

#[test]
fn middleware_may_substitute_the_result() {
    let (store, registry) = store_with_fresh_pair();

    registry.add(Arc::new(from_fn(
        |_store: &FooStore, _action: TestAction, _next: &dyn Next<TestAction>| {
            Ok(TestAction::Other)
        },
    )));

    let result = store.dispatch(TestAction::Foo).unwrap();

    assert_eq!(result, TestAction::Other);
    assert_eq!(store.state(), AppState::default(), "next was never called");
}
