//! Registration and query errors.

use thiserror::Error;

/// Errors raised while registering states and transitions, or by hierarchy
/// queries given an unregistered name.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChartError {
    /// A state with this name is already registered; allowing it would
    /// silently overwrite the record and corrupt the parent index.
    #[error("State '{0}' is already registered")]
    DuplicateState(String),

    /// A parent reference, transition endpoint or query named a state that
    /// is not registered.
    #[error("Unknown state '{0}'")]
    UnknownState(String),

    /// The requested parent is registered but is not a composite state.
    #[error("State '{0}' cannot hold child states")]
    InvalidParent(String),

    /// The transition's source state cannot hold outgoing transitions
    /// (history and final states).
    #[error("State '{0}' cannot hold outgoing transitions")]
    InvalidTransitionSource(String),
}
