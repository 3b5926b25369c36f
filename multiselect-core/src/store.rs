//! State container driven by a reducer

use crate::Action;
use std::marker::PhantomData;

/// A reducer applies one action to state
///
/// Returns `true` when the state changed and the view should be redrawn.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// State plus the only function allowed to change it
///
/// ```ignore
/// #[derive(Default)]
/// struct PickerState { selected: Vec<String> }
///
/// #[derive(Clone, Debug)]
/// enum PickerAction { SelectionDidChange(Vec<String>) }
///
/// fn reducer(state: &mut PickerState, action: PickerAction) -> bool {
///     match action {
///         PickerAction::SelectionDidChange(selected) => {
///             state.selected = selected;
///             true
///         }
///     }
/// }
///
/// let mut store = Store::new(PickerState::default(), reducer);
/// store.dispatch(PickerAction::SelectionDidChange(vec!["a".into()]));
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Run the reducer; returns whether the state changed
    pub fn dispatch(&mut self, action: A) -> bool {
        (self.reducer)(&mut self.state, action)
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

/// A [`Store`] whose dispatches pass through a [`Middleware`]
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = self.store.dispatch(action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

/// Hook around every dispatch
pub trait Middleware<A: Action> {
    /// Called before the reducer sees the action
    fn before(&mut self, action: &A);

    /// Called after the reducer ran
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that records actions through `tracing`
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    /// Component or store name attached to every record
    pub scope: &'static str,
    pub log_before: bool,
    pub log_after: bool,
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new("store")
    }
}

impl LoggingMiddleware {
    /// Log after dispatch only
    pub fn new(scope: &'static str) -> Self {
        Self {
            scope,
            log_before: false,
            log_after: true,
        }
    }

    /// Log both before and after dispatch
    pub fn verbose(scope: &'static str) -> Self {
        Self {
            scope,
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(scope = self.scope, action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                scope = self.scope,
                action = %action.name(),
                summary = %action.summary(),
                state_changed,
                "Action processed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestState {
        query: String,
        edits: usize,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        SetQuery(String),
        Noop,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::SetQuery(_) => "SetQuery",
                TestAction::Noop => "Noop",
            }
        }
    }

    fn test_reducer(state: &mut TestState, action: TestAction) -> bool {
        match action {
            TestAction::SetQuery(query) => {
                if state.query == query {
                    return false;
                }
                state.query = query;
                state.edits += 1;
                true
            }
            TestAction::Noop => false,
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(TestState::default(), test_reducer);

        assert!(store.dispatch(TestAction::SetQuery("ap".into())));
        assert_eq!(store.state().query, "ap");

        // same value reports no change
        assert!(!store.dispatch(TestAction::SetQuery("ap".into())));
        assert_eq!(store.state().edits, 1);
    }

    #[test]
    fn test_store_noop() {
        let mut store = Store::new(TestState::default(), test_reducer);
        assert!(!store.dispatch(TestAction::Noop));
    }

    #[derive(Default)]
    struct RecordingMiddleware {
        seen: Vec<(&'static str, bool)>,
        before_count: usize,
    }

    impl<A: Action> Middleware<A> for RecordingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, action: &A, state_changed: bool) {
            self.seen.push((action.name(), state_changed));
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store = StoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            RecordingMiddleware::default(),
        );

        store.dispatch(TestAction::SetQuery("x".into()));
        store.dispatch(TestAction::Noop);

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(
            store.middleware().seen,
            vec![("SetQuery", true), ("Noop", false)]
        );
        assert_eq!(store.state().query, "x");
    }

    #[test]
    fn test_logging_middleware_without_subscriber() {
        let mut store = StoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            LoggingMiddleware::verbose("test"),
        );
        assert!(store.dispatch(TestAction::SetQuery("quiet".into())));
        assert_eq!(store.middleware().scope, "test");
    }
}
