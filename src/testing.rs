//! Test double for presenter tests.

use std::collections::VecDeque;

use crate::nav::{CoreNavigator, GoToNavigator, Navigator, StateOptions};
use crate::screen::{PopResult, Screen};
use crate::stack::{NavStack, NavStackList};

/// A [`Navigator`] that records every call while delegating to a real
/// engine, so tests can assert what a presenter asked for.
///
/// ```
/// use wayfinder::testing::FakeNavigator;
/// use wayfinder::{GoToNavigator, Screen};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum AppScreen { Favorites, AddFavorite }
/// impl Screen for AppScreen {}
///
/// let mut navigator = FakeNavigator::new(AppScreen::Favorites);
/// navigator.go_to(AppScreen::AddFavorite);
/// assert_eq!(navigator.take_next_screen(), AppScreen::AddFavorite);
/// navigator.expect_no_go_to_events();
/// ```
pub struct FakeNavigator<S: Screen> {
    delegate: CoreNavigator<S>,
    go_to_events: VecDeque<GoToEvent<S>>,
    pop_events: VecDeque<PopEvent<S>>,
    reset_root_events: VecDeque<ResetRootEvent<S>>,
}

/// A recorded [`go_to`](GoToNavigator::go_to) or
/// [`go_to_for_result`](Navigator::go_to_for_result) call.
#[derive(Debug, Clone, PartialEq)]
pub struct GoToEvent<S: Screen> {
    pub screen: S,
    pub accepted: bool,
    /// Set when the navigation expects an answer.
    pub result_key: Option<String>,
}

/// A recorded [`pop`](Navigator::pop) call.
#[derive(Debug, Clone, PartialEq)]
pub struct PopEvent<S: Screen> {
    pub popped: Option<S>,
    pub carried_result: bool,
}

/// A recorded [`reset_root`](Navigator::reset_root) call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetRootEvent<S: Screen> {
    pub new_root: S,
    pub displaced: Vec<S>,
    pub options: StateOptions,
}

impl<S: Screen> FakeNavigator<S> {
    /// Fake over a fresh stack rooted at `root`. Root pops are swallowed.
    pub fn new(root: S) -> Self {
        Self::with_stack(NavStack::new(root))
    }

    /// Fake over a prepared stack, for tests that start mid-flow.
    pub fn with_stack(stack: NavStack<S>) -> Self {
        Self {
            delegate: CoreNavigator::new(stack, |_| {}),
            go_to_events: VecDeque::new(),
            pop_events: VecDeque::new(),
            reset_root_events: VecDeque::new(),
        }
    }

    /// Next screen navigated to. Panics when nothing was navigated to or
    /// the push was rejected.
    pub fn take_next_screen(&mut self) -> S {
        let event = self.take_go_to();
        assert!(
            event.accepted,
            "navigation to {:?} was rejected",
            event.screen
        );
        event.screen
    }

    /// Next recorded go_to, panicking when none happened.
    pub fn take_go_to(&mut self) -> GoToEvent<S> {
        self.go_to_events
            .pop_front()
            .expect("no go_to events recorded")
    }

    /// Next recorded pop, panicking when none happened.
    pub fn take_pop(&mut self) -> PopEvent<S> {
        self.pop_events.pop_front().expect("no pop events recorded")
    }

    /// Next recorded reset_root, panicking when none happened.
    pub fn take_reset_root(&mut self) -> ResetRootEvent<S> {
        self.reset_root_events
            .pop_front()
            .expect("no reset_root events recorded")
    }

    /// Assert every recorded go_to was consumed.
    pub fn expect_no_go_to_events(&self) {
        assert!(
            self.go_to_events.is_empty(),
            "unconsumed go_to events: {:?}",
            self.go_to_events
        );
    }

    /// Assert every recorded pop was consumed.
    pub fn expect_no_pop_events(&self) {
        assert!(
            self.pop_events.is_empty(),
            "unconsumed pop events: {:?}",
            self.pop_events
        );
    }

    /// Assert every recorded reset_root was consumed.
    pub fn expect_no_reset_root_events(&self) {
        assert!(
            self.reset_root_events.is_empty(),
            "unconsumed reset_root events: {:?}",
            self.reset_root_events
        );
    }
}

impl<S: Screen> GoToNavigator<S> for FakeNavigator<S> {
    fn go_to(&mut self, screen: S) -> bool {
        let accepted = self.delegate.go_to(screen.clone());
        self.go_to_events.push_back(GoToEvent {
            screen,
            accepted,
            result_key: None,
        });
        accepted
    }
}

impl<S: Screen> Navigator<S> for FakeNavigator<S> {
    fn pop_with_result(&mut self, result: Option<Box<dyn PopResult>>) -> Option<S> {
        let carried_result = result.is_some();
        let popped = self.delegate.pop_with_result(result);
        self.pop_events.push_back(PopEvent {
            popped: popped.clone(),
            carried_result,
        });
        popped
    }

    fn go_to_for_result(&mut self, screen: S, result_key: &str) -> bool {
        let accepted = self.delegate.go_to_for_result(screen.clone(), result_key);
        self.go_to_events.push_back(GoToEvent {
            screen,
            accepted,
            result_key: Some(result_key.to_string()),
        });
        accepted
    }

    fn take_result(&mut self, result_key: &str) -> Option<Box<dyn PopResult>> {
        self.delegate.take_result(result_key)
    }

    fn forward(&mut self) -> bool {
        self.delegate.forward()
    }

    fn backward(&mut self) -> bool {
        self.delegate.backward()
    }

    fn peek(&self) -> Option<S> {
        self.delegate.peek()
    }

    fn peek_back_stack(&self) -> Vec<S> {
        self.delegate.peek_back_stack()
    }

    fn peek_nav_stack(&self) -> Option<NavStackList<S>> {
        self.delegate.peek_nav_stack()
    }

    fn reset_root(&mut self, new_root: S, options: StateOptions) -> Vec<S> {
        let displaced = self.delegate.reset_root(new_root.clone(), options);
        self.reset_root_events.push_back(ResetRootEvent {
            new_root,
            displaced: displaced.clone(),
            options,
        });
        displaced
    }
}
