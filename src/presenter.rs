//! The seam between screens and the UI layer.
//!
//! One presenter per screen variant: it computes the state the view
//! renders and turns view events into navigation or state changes.
//!
//! ```text
//! event ──→ Presenter::on_event ──→ Navigator
//!                                       │
//!   view ←── Presenter::present ←── active screen
//! ```
//!
//! States are immutable values compared for change detection; events flow
//! one way.

use crate::nav::Navigator;
use crate::screen::Screen;

/// Marker for per-screen view state.
///
/// States should be self-contained (everything the view needs to render)
/// and cheap to compare.
pub trait ScreenState: Clone + PartialEq + Send + 'static {}

/// Marker for events a view emits: key presses, selections, completions.
pub trait ScreenEvent: Send + 'static {}

/// Presentation logic for one screen variant.
pub trait Presenter<S: Screen> {
    /// The state type this presenter produces.
    type State: ScreenState;

    /// The event type this presenter handles.
    type Event: ScreenEvent;

    /// Compute the state for `screen` as it currently stands. Runs with
    /// the navigator in scope so the presenter can collect answers
    /// delivered to its screen.
    fn present(&mut self, screen: &S, navigator: &mut dyn Navigator<S>) -> Self::State;

    /// Handle one view event, navigating through `navigator` as needed.
    fn on_event(&mut self, event: Self::Event, navigator: &mut dyn Navigator<S>);
}
