//! Shared test fixtures.

#![allow(dead_code)]

use wayfinder::{PopResult, Screen};

/// Screen set used across the integration suites.
#[derive(Debug, Clone, PartialEq)]
pub enum TestScreen {
    A,
    B,
    C,
    D,
    Tab(u8),
}

impl Screen for TestScreen {}

/// Answer type for result-passing tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestAnswer(pub i32);

impl PopResult for TestAnswer {}
