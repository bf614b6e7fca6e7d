//! A clone-able navigator handle for UI code.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::nav::{CoreNavigator, GoToNavigator, Navigator, StateOptions};
use crate::screen::{PopResult, Screen};
use crate::stack::NavStackList;

/// Shared handle over a [`CoreNavigator`].
///
/// UI layers trigger navigation from more than one place: key handlers,
/// timers, background completions. Clones of this handle share one engine
/// behind a mutex; each call locks for just that operation. The stack is
/// mutated strictly in lock-acquisition order.
#[derive(Clone)]
pub struct SharedNavigator<S: Screen> {
    inner: Arc<Mutex<CoreNavigator<S>>>,
}

impl<S: Screen> SharedNavigator<S> {
    pub fn new(navigator: CoreNavigator<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(navigator)),
        }
    }

    /// Run `f` with exclusive access to the engine, for multi-step
    /// sequences that must not interleave with other handles.
    pub fn with<R>(&self, f: impl FnOnce(&mut CoreNavigator<S>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<S: Screen> GoToNavigator<S> for SharedNavigator<S> {
    fn go_to(&mut self, screen: S) -> bool {
        self.inner.lock().go_to(screen)
    }
}

impl<S: Screen> Navigator<S> for SharedNavigator<S> {
    fn pop_with_result(&mut self, result: Option<Box<dyn PopResult>>) -> Option<S> {
        self.inner.lock().pop_with_result(result)
    }

    fn go_to_for_result(&mut self, screen: S, result_key: &str) -> bool {
        self.inner.lock().go_to_for_result(screen, result_key)
    }

    fn take_result(&mut self, result_key: &str) -> Option<Box<dyn PopResult>> {
        self.inner.lock().take_result(result_key)
    }

    fn forward(&mut self) -> bool {
        self.inner.lock().forward()
    }

    fn backward(&mut self) -> bool {
        self.inner.lock().backward()
    }

    fn peek(&self) -> Option<S> {
        self.inner.lock().peek()
    }

    fn peek_back_stack(&self) -> Vec<S> {
        self.inner.lock().peek_back_stack()
    }

    fn peek_nav_stack(&self) -> Option<NavStackList<S>> {
        self.inner.lock().peek_nav_stack()
    }

    fn reset_root(&mut self, new_root: S, options: StateOptions) -> Vec<S> {
        self.inner.lock().reset_root(new_root, options)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum S {
        Root,
        Item(u32),
    }
    impl Screen for S {}

    #[test]
    fn clones_share_one_stack() {
        let mut a = SharedNavigator::new(CoreNavigator::with_root(S::Root, |_| {}));
        let mut b = a.clone();

        a.go_to(S::Item(1));
        assert_eq!(b.peek(), Some(S::Item(1)));
        assert_eq!(b.pop(), Some(S::Item(1)));
        assert_eq!(a.peek(), Some(S::Root));
    }

    #[test]
    fn concurrent_pushes_all_land() {
        let shared = SharedNavigator::new(CoreNavigator::with_root(S::Root, |_| {}));

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let mut nav = shared.clone();
                thread::spawn(move || {
                    nav.go_to(S::Item(n));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Every push targeted a distinct screen, so none were rejected.
        assert_eq!(shared.with(|nav| nav.stack().depth()), 5);
    }

    #[test]
    fn with_runs_multi_step_sequences_atomically() {
        let shared = SharedNavigator::new(CoreNavigator::with_root(S::Root, |_| {}));
        let depth = shared.with(|nav| {
            nav.go_to(S::Item(1));
            nav.go_to(S::Item(2));
            nav.stack().depth()
        });
        assert_eq!(depth, 3);
    }
}
