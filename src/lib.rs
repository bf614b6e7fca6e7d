//! Screen navigation runtime for terminal UIs.
//!
//! # Architecture
//!
//! ```text
//! view events ──→ Presenter ──→ Navigator ──→ NavStack
//!      ↑                                         │
//!      └───────────── active screen ─────────────┘
//! ```
//!
//! The [`Navigator`] trait is the contract between UI code that triggers
//! navigation and the engine that owns the stack: push a screen, pop the
//! current one, or reset to a new root. [`CoreNavigator`] is the
//! stack-backed engine; [`NavStack`] keeps browser-style back/forward
//! history; a popped screen can answer the screen beneath it through a
//! [`PopResult`].
//!
//! Applications model destinations as an enum implementing [`Screen`] and
//! drive one [`presenter::Presenter`] per variant. The [`demo`] module is a
//! complete reference app.

pub mod demo;
pub mod nav;
pub mod presenter;
pub mod screen;
pub mod stack;
pub mod testing;

pub use nav::{
    CoreNavigator, GoToNavigator, NavEvent, Navigator, NavigatorExt, NoOpNavigator,
    SharedNavigator, StateOptions,
};
pub use screen::{PopResult, Screen};
pub use stack::persist::{PersistError, StackSnapshot};
pub use stack::{NavStack, NavStackList, Record};
