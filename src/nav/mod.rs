//! The navigation contract: traits, options, and combinators.
//!
//! [`Navigator`] is the seam between UI code that triggers navigation and
//! the engine that owns the stack. UI code pushes with
//! [`go_to`](GoToNavigator::go_to), pops with [`pop`](Navigator::pop), and
//! wipes the stack with [`reset_root`](Navigator::reset_root); the engine
//! decides what the stack looks like afterwards.

mod core;
mod event;
mod result;
mod shared;

pub use event::NavEvent;
pub use result::ResultHandler;
pub use self::core::{CoreNavigator, RootPopHook};
pub use shared::SharedNavigator;

use crate::screen::{PopResult, Screen};
use crate::stack::NavStackList;

/// Minimal forward-only navigation seam, for callers that only ever push.
pub trait GoToNavigator<S: Screen> {
    /// Navigate to `screen`. Returns false when the engine rejected the
    /// push because `screen` is already active.
    fn go_to(&mut self, screen: S) -> bool;
}

/// Full navigation surface over a stack of screens.
///
/// Object safe: presenters receive `&mut dyn Navigator<S>`.
pub trait Navigator<S: Screen>: GoToNavigator<S> {
    /// Remove the current screen and return it, revealing the one beneath.
    ///
    /// At root this returns None and the engine's root-pop hook runs
    /// instead; the stack never becomes empty.
    fn pop(&mut self) -> Option<S> {
        self.pop_with_result(None)
    }

    /// [`pop`](Navigator::pop) that delivers `result` to the revealed
    /// screen, if it registered interest through
    /// [`go_to_for_result`](Navigator::go_to_for_result). A result nobody
    /// registered for is dropped.
    fn pop_with_result(&mut self, result: Option<Box<dyn PopResult>>) -> Option<S>;

    /// Navigate to `screen`, tagging the current screen as awaiting an
    /// answer under `result_key`.
    fn go_to_for_result(&mut self, screen: S, result_key: &str) -> bool;

    /// Consume an answer delivered to the active screen under
    /// `result_key`. Yields at most once per delivery.
    fn take_result(&mut self, result_key: &str) -> Option<Box<dyn PopResult>>;

    /// Step toward the newest record in history. False at top.
    fn forward(&mut self) -> bool;

    /// Step toward the root. False at root.
    fn backward(&mut self) -> bool;

    /// The active screen, if the engine has one.
    fn peek(&self) -> Option<S>;

    /// The visible back stack, root first. Empty only for engines without
    /// a stack, such as [`NoOpNavigator`].
    fn peek_back_stack(&self) -> Vec<S>;

    /// Snapshot of the full history around the active position.
    fn peek_nav_stack(&self) -> Option<NavStackList<S>>;

    /// Replace the stack with `new_root`, returning the displaced screens
    /// root first. Useful when a completed flow (login, onboarding) must
    /// not be navigable back into; the returned screens let the caller run
    /// cleanup on what was discarded.
    ///
    /// `options` control the saved-stack store, which is what makes
    /// per-tab back stacks work:
    ///
    /// ```
    /// use wayfinder::{CoreNavigator, GoToNavigator, Navigator, StateOptions};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// enum Tab { Feed, Search, Detail(u32) }
    /// impl wayfinder::Screen for Tab {}
    ///
    /// let mut nav = CoreNavigator::with_root(Tab::Feed, |_| {});
    /// nav.go_to(Tab::Detail(7));
    ///
    /// // Switch tabs, keeping Feed's stack around.
    /// nav.reset_root(Tab::Search, StateOptions::SAVE_AND_RESTORE);
    ///
    /// // Switching back restores Detail(7) on top of Feed.
    /// nav.reset_root(Tab::Feed, StateOptions::SAVE_AND_RESTORE);
    /// assert_eq!(nav.peek(), Some(Tab::Detail(7)));
    /// ```
    fn reset_root(&mut self, new_root: S, options: StateOptions) -> Vec<S>;
}

/// Saved-stack handling for [`Navigator::reset_root`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateOptions {
    /// Stash the outgoing stack, keyed by its root screen.
    pub save: bool,
    /// Bring back a previously saved stack for the new root instead of
    /// starting fresh.
    pub restore: bool,
    /// Drop any saved stack for the new root. Applied after `restore`, so
    /// a one-shot restore-and-forget is `restore: true, clear: true`.
    pub clear: bool,
}

impl StateOptions {
    /// Single back stack: nothing saved, nothing restored.
    pub const DEFAULT: Self = Self {
        save: false,
        restore: false,
        clear: false,
    };

    /// Multiple back stacks: save the outgoing stack and restore the
    /// incoming root's, when one exists.
    pub const SAVE_AND_RESTORE: Self = Self {
        save: true,
        restore: true,
        clear: false,
    };
}

/// Combinators available on every [`Navigator`].
pub trait NavigatorExt<S: Screen>: Navigator<S> {
    /// Pop until `predicate` matches the active screen or the root stops
    /// the run. Returns the popped screens, newest first.
    fn pop_until(&mut self, mut predicate: impl FnMut(&S) -> bool) -> Vec<S>
    where
        Self: Sized,
    {
        let mut popped = Vec::new();
        loop {
            match self.peek() {
                Some(screen) if !predicate(&screen) => match self.pop() {
                    Some(screen) => popped.push(screen),
                    None => break,
                },
                _ => break,
            }
        }
        popped
    }

    /// Pop as if from the root. The active screen is promoted to root
    /// first so it stays visible while the root-pop hook runs.
    fn pop_root(&mut self, result: Option<Box<dyn PopResult>>) {
        if let Some(active) = self.peek() {
            if self.peek_back_stack().len() > 1 {
                self.reset_root(active, StateOptions::DEFAULT);
            }
        }
        self.pop_with_result(result);
    }

    /// Apply a [`NavEvent`] forwarded from a nested presenter.
    fn on_nav_event(&mut self, event: NavEvent<S>) {
        match event {
            NavEvent::GoTo { screen } => {
                self.go_to(screen);
            }
            NavEvent::Pop { result } => {
                self.pop_with_result(result);
            }
            NavEvent::ResetRoot { new_root, options } => {
                self.reset_root(new_root, options);
            }
            NavEvent::Forward => {
                self.forward();
            }
            NavEvent::Backward => {
                self.backward();
            }
        }
    }
}

impl<S: Screen, N: Navigator<S> + ?Sized> NavigatorExt<S> for N {}

/// A [`Navigator`] that accepts every call and navigates nowhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpNavigator;

impl<S: Screen> GoToNavigator<S> for NoOpNavigator {
    fn go_to(&mut self, _screen: S) -> bool {
        true
    }
}

impl<S: Screen> Navigator<S> for NoOpNavigator {
    fn pop_with_result(&mut self, _result: Option<Box<dyn PopResult>>) -> Option<S> {
        None
    }

    fn go_to_for_result(&mut self, _screen: S, _result_key: &str) -> bool {
        true
    }

    fn take_result(&mut self, _result_key: &str) -> Option<Box<dyn PopResult>> {
        None
    }

    fn forward(&mut self) -> bool {
        false
    }

    fn backward(&mut self) -> bool {
        false
    }

    fn peek(&self) -> Option<S> {
        None
    }

    fn peek_back_stack(&self) -> Vec<S> {
        Vec::new()
    }

    fn peek_nav_stack(&self) -> Option<NavStackList<S>> {
        None
    }

    fn reset_root(&mut self, _new_root: S, _options: StateOptions) -> Vec<S> {
        Vec::new()
    }
}
