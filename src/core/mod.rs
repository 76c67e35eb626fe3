//! Core statechart value types.
//!
//! This module contains the pure values a chart is built from:
//! - Named events via [`Event`]
//! - Edges between states via [`Transition`]
//! - The five state variants via [`State`]
//!
//! Everything here is a plain value with no side effects; the registry and
//! hierarchy algorithms live in [`crate::chart`].

mod event;
mod state;
mod transition;

pub use event::Event;
pub use state::State;
pub use transition::Transition;
