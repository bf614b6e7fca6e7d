//! Navigation requests expressed as data.
//!
//! Nested presenters often cannot hold the navigator directly; they hand a
//! [`NavEvent`] upward instead and the owner applies it with
//! [`on_nav_event`](crate::nav::NavigatorExt::on_nav_event).

use crate::nav::StateOptions;
use crate::presenter::ScreenEvent;
use crate::screen::{PopResult, Screen};

/// One navigation request.
#[derive(Debug)]
pub enum NavEvent<S: Screen> {
    /// Corresponds to [`go_to`](crate::nav::GoToNavigator::go_to).
    GoTo { screen: S },

    /// Corresponds to
    /// [`pop_with_result`](crate::nav::Navigator::pop_with_result).
    Pop {
        result: Option<Box<dyn PopResult>>,
    },

    /// Corresponds to [`reset_root`](crate::nav::Navigator::reset_root).
    ResetRoot {
        new_root: S,
        options: StateOptions,
    },

    /// Corresponds to [`forward`](crate::nav::Navigator::forward).
    Forward,

    /// Corresponds to [`backward`](crate::nav::Navigator::backward).
    Backward,
}

impl<S: Screen> NavEvent<S> {
    /// Plain pop carrying no result.
    pub fn pop() -> Self {
        Self::Pop { result: None }
    }

    /// Reset with default (single back stack) options.
    pub fn reset_root(new_root: S) -> Self {
        Self::ResetRoot {
            new_root,
            options: StateOptions::DEFAULT,
        }
    }
}

impl<S: Screen> ScreenEvent for NavEvent<S> {}
