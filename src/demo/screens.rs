//! Demo screen set.

use serde::{Deserialize, Serialize};

use crate::screen::{PopResult, Screen};

/// Destinations of the demo app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoScreen {
    /// Landing screen listing destinations.
    Home,
    /// Number picker opened from Home; answers with [`CounterPicked`].
    Counter { start: i64 },
    /// Live view of the navigation history.
    Inspector,
}

impl Screen for DemoScreen {}

/// Answer the counter hands back to Home when a value is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterPicked(pub i64);

impl PopResult for CounterPicked {}

/// Result key Home registers when opening the counter.
pub const COUNTER_RESULT: &str = "counter.picked";
