//! Transitions between states.
//!
//! A transition is a pure value: an edge from a source state to an optional
//! target, optionally triggered by an event and guarded by a condition.
//! Guard and action are opaque text for an external evaluator; this core
//! only stores and forwards them.

use super::event::Event;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An edge between two states of a chart.
///
/// Two derived properties matter to an interpreter:
///
/// - a transition is *internal* when it has no target state: it fires
///   without leaving (or re-entering) its source state;
/// - a transition is *eventless* when it has no trigger: it is considered
///   on every step and fires purely on its guard.
///
/// A transition that is internal, eventless *and* guardless would fire
/// unconditionally on every step with no observable effect; validation
/// rejects that combination.
///
/// # Example
///
/// ```rust
/// use strata::core::{Event, Transition};
///
/// let edge = Transition::new("idle")
///     .to("busy")
///     .on(Event::new("work"))
///     .with_action("start_job()");
///
/// assert!(!edge.is_internal());
/// assert!(!edge.is_eventless());
///
/// let watchdog = Transition::new("busy").guarded_by("elapsed > 30");
/// assert!(watchdog.is_internal());
/// assert!(watchdog.is_eventless());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Name of the source state.
    pub from_state: String,
    /// Name of the target state; `None` makes the transition internal.
    pub to_state: Option<String>,
    /// Triggering event; `None` makes the transition eventless.
    pub event: Option<Event>,
    /// Guard condition, as opaque text for the evaluator.
    pub guard: Option<String>,
    /// Action to run when the transition fires, as opaque text.
    pub action: Option<String>,
}

impl Transition {
    /// Create a transition out of the given source state.
    ///
    /// Without further configuration this is an internal eventless
    /// transition; add a target, trigger or guard with the builder methods.
    pub fn new(from_state: impl Into<String>) -> Self {
        Transition {
            from_state: from_state.into(),
            to_state: None,
            event: None,
            guard: None,
            action: None,
        }
    }

    /// Set the target state.
    pub fn to(mut self, to_state: impl Into<String>) -> Self {
        self.to_state = Some(to_state.into());
        self
    }

    /// Set the triggering event.
    pub fn on(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the guard condition.
    pub fn guarded_by(mut self, guard: impl Into<String>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    /// Set the action to run when the transition fires.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// An internal transition has no target: it fires without exiting its
    /// source state.
    pub fn is_internal(&self) -> bool {
        self.to_state.is_none()
    }

    /// An eventless transition has no trigger: it is checked on every step.
    pub fn is_eventless(&self) -> bool {
        self.event.is_none()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transition({}, {}, {})",
            self.from_state,
            self.to_state.as_deref().unwrap_or("-"),
            self.event
                .as_ref()
                .map(|e| e.name.as_str())
                .unwrap_or("-")
        )
    }
}
