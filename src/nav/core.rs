//! The stack-backed navigation engine.

use tracing::debug;

use crate::nav::{GoToNavigator, Navigator, ResultHandler, StateOptions};
use crate::screen::{PopResult, Screen};
use crate::stack::{NavStack, NavStackList, Record};

/// Hook invoked when [`pop`](Navigator::pop) is called at root. The stack
/// is left untouched; the hook decides what a root pop means (quit the
/// app, hand off to an outer navigator, ignore it).
pub type RootPopHook = Box<dyn FnMut(Option<Box<dyn PopResult>>) + Send>;

/// [`Navigator`] engine owning a [`NavStack`].
pub struct CoreNavigator<S: Screen> {
    stack: NavStack<S>,
    results: ResultHandler,
    on_root_pop: RootPopHook,
}

impl<S: Screen> CoreNavigator<S> {
    /// Engine over an existing stack.
    pub fn new(
        stack: NavStack<S>,
        on_root_pop: impl FnMut(Option<Box<dyn PopResult>>) + Send + 'static,
    ) -> Self {
        Self {
            stack,
            results: ResultHandler::new(),
            on_root_pop: Box::new(on_root_pop),
        }
    }

    /// Engine over a fresh stack containing only `root`.
    pub fn with_root(
        root: S,
        on_root_pop: impl FnMut(Option<Box<dyn PopResult>>) + Send + 'static,
    ) -> Self {
        Self::new(NavStack::new(root), on_root_pop)
    }

    pub fn stack(&self) -> &NavStack<S> {
        &self.stack
    }

    /// Hand the stack back, e.g. to snapshot it on shutdown.
    pub fn into_stack(self) -> NavStack<S> {
        self.stack
    }

    fn forget_records(&mut self, records: &[Record<S>]) {
        for record in records {
            self.results.forget(record.key());
        }
    }
}

impl<S: Screen> GoToNavigator<S> for CoreNavigator<S> {
    fn go_to(&mut self, screen: S) -> bool {
        let accepted = self.stack.push(screen);
        debug!(accepted, depth = self.stack.depth(), "go_to");
        accepted
    }
}

impl<S: Screen> Navigator<S> for CoreNavigator<S> {
    fn pop_with_result(&mut self, result: Option<Box<dyn PopResult>>) -> Option<S> {
        if self.stack.is_at_root() {
            debug!("pop at root, invoking root-pop hook");
            (self.on_root_pop)(result);
            return None;
        }
        let popped = self.stack.pop()?;
        if let Some(result) = result {
            let revealed = self.stack.active().key();
            self.results.deliver(revealed, result);
        }
        debug!(depth = self.stack.depth(), "pop");
        Some(popped.into_screen())
    }

    fn go_to_for_result(&mut self, screen: S, result_key: &str) -> bool {
        let awaiting = self.stack.active().key();
        let accepted = self.stack.push(screen);
        if accepted {
            self.results.prepare(awaiting, result_key);
        }
        debug!(accepted, result_key, "go_to_for_result");
        accepted
    }

    fn take_result(&mut self, result_key: &str) -> Option<Box<dyn PopResult>> {
        let active = self.stack.active().key();
        self.results.take(active, result_key)
    }

    fn forward(&mut self) -> bool {
        self.stack.forward().is_some()
    }

    fn backward(&mut self) -> bool {
        self.stack.backward().is_some()
    }

    fn peek(&self) -> Option<S> {
        Some(self.stack.active().screen().clone())
    }

    fn peek_back_stack(&self) -> Vec<S> {
        self.stack.screens().cloned().collect()
    }

    fn peek_nav_stack(&self) -> Option<NavStackList<S>> {
        Some(self.stack.snapshot().map(|record| record.screen().clone()))
    }

    fn reset_root(&mut self, new_root: S, options: StateOptions) -> Vec<S> {
        if options.save {
            self.stack.save_state();
        }
        let displaced = if options.restore {
            match self.stack.restore_state(&new_root) {
                Some(displaced) => displaced,
                None => self.stack.reset_root(new_root.clone()),
            }
        } else {
            self.stack.reset_root(new_root.clone())
        };
        if options.clear {
            self.stack.remove_state(&new_root);
        }
        self.forget_records(&displaced);
        debug!(
            displaced = displaced.len(),
            save = options.save,
            restore = options.restore,
            "reset_root"
        );
        displaced.into_iter().map(Record::into_screen).collect()
    }
}
