//! State variants of a statechart.
//!
//! The five kinds of state form one closed tagged union, each variant
//! carrying only the fields its capabilities require. Capability queries
//! (`is_composite`, `holds_transitions`, ...) let the registry and the
//! hierarchy algorithms branch generically without matching every variant
//! themselves.

use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single state of a chart.
///
/// - `Basic` is a plain leaf: it holds transitions and entry/exit actions.
/// - `Compound` is a composite with exactly one active child at a time,
///   starting at `initial`.
/// - `Orthogonal` is a composite whose children are independent regions,
///   all active simultaneously.
/// - `History` is a pseudo-state remembering the last active child(ren) of
///   its parent; `deep` selects recursive resumption.
/// - `Final` is a terminal leaf signalling completion of its container.
///
/// States reference each other by name only; the owning [`StateChart`]
/// holds every record and the parent/child index.
///
/// [`StateChart`]: crate::chart::StateChart
///
/// # Example
///
/// ```rust
/// use strata::core::State;
///
/// let lamp = State::compound("lamp", "off").with_entry("log('powered')");
/// assert!(lamp.is_composite());
/// assert_eq!(lamp.initial(), Some("off"));
///
/// let recall = State::history("lamp_memory").deep();
/// assert!(!recall.holds_transitions());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum State {
    /// Plain leaf state.
    Basic {
        name: String,
        on_entry: Option<String>,
        on_exit: Option<String>,
        transitions: Vec<Transition>,
    },
    /// Composite with a single active child, starting at `initial`.
    Compound {
        name: String,
        initial: String,
        on_entry: Option<String>,
        on_exit: Option<String>,
        transitions: Vec<Transition>,
        children: Vec<String>,
    },
    /// Composite whose children are concurrently active regions.
    Orthogonal {
        name: String,
        on_entry: Option<String>,
        on_exit: Option<String>,
        transitions: Vec<Transition>,
        children: Vec<String>,
    },
    /// Pseudo-state that resumes the last active child(ren) of its parent.
    History {
        name: String,
        /// Default child to resume when no memory has been recorded yet.
        initial: Option<String>,
        /// Last active child(ren), written by the interpreter on exit.
        memory: Vec<String>,
        /// Deep history resumes the whole nested configuration.
        deep: bool,
    },
    /// Terminal leaf; reaching it signals completion of the container.
    Final {
        name: String,
        on_entry: Option<String>,
        on_exit: Option<String>,
    },
}

impl State {
    /// Create a basic leaf state.
    pub fn basic(name: impl Into<String>) -> Self {
        State::Basic {
            name: name.into(),
            on_entry: None,
            on_exit: None,
            transitions: Vec::new(),
        }
    }

    /// Create a compound state with the given initial child.
    pub fn compound(name: impl Into<String>, initial: impl Into<String>) -> Self {
        State::Compound {
            name: name.into(),
            initial: initial.into(),
            on_entry: None,
            on_exit: None,
            transitions: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an orthogonal state; its children become parallel regions.
    pub fn orthogonal(name: impl Into<String>) -> Self {
        State::Orthogonal {
            name: name.into(),
            on_entry: None,
            on_exit: None,
            transitions: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a shallow history pseudo-state with no default.
    pub fn history(name: impl Into<String>) -> Self {
        State::History {
            name: name.into(),
            initial: None,
            memory: Vec::new(),
            deep: false,
        }
    }

    /// Create a final state.
    pub fn final_state(name: impl Into<String>) -> Self {
        State::Final {
            name: name.into(),
            on_entry: None,
            on_exit: None,
        }
    }

    /// Turn a history state into a deep one. No effect on other variants.
    pub fn deep(mut self) -> Self {
        if let State::History { deep, .. } = &mut self {
            *deep = true;
        }
        self
    }

    /// Set the default memory of a history state. The memory slot is seeded
    /// with the default so a first entry has something to resume. No effect
    /// on other variants.
    pub fn defaulting_to(mut self, default: impl Into<String>) -> Self {
        if let State::History {
            initial, memory, ..
        } = &mut self
        {
            let default = default.into();
            *memory = vec![default.clone()];
            *initial = Some(default);
        }
        self
    }

    /// Set the entry action. No effect on history states, which cannot
    /// hold actions.
    pub fn with_entry(mut self, code: impl Into<String>) -> Self {
        match &mut self {
            State::Basic { on_entry, .. }
            | State::Compound { on_entry, .. }
            | State::Orthogonal { on_entry, .. }
            | State::Final { on_entry, .. } => *on_entry = Some(code.into()),
            State::History { .. } => {}
        }
        self
    }

    /// Set the exit action. No effect on history states.
    pub fn with_exit(mut self, code: impl Into<String>) -> Self {
        match &mut self {
            State::Basic { on_exit, .. }
            | State::Compound { on_exit, .. }
            | State::Orthogonal { on_exit, .. }
            | State::Final { on_exit, .. } => *on_exit = Some(code.into()),
            State::History { .. } => {}
        }
        self
    }

    /// The state's name, unique within its chart.
    pub fn name(&self) -> &str {
        match self {
            State::Basic { name, .. }
            | State::Compound { name, .. }
            | State::Orthogonal { name, .. }
            | State::History { name, .. }
            | State::Final { name, .. } => name,
        }
    }

    /// Whether this state can hold child states.
    pub fn is_composite(&self) -> bool {
        matches!(self, State::Compound { .. } | State::Orthogonal { .. })
    }

    /// Whether this state can hold outgoing transitions.
    pub fn holds_transitions(&self) -> bool {
        matches!(
            self,
            State::Basic { .. } | State::Compound { .. } | State::Orthogonal { .. }
        )
    }

    /// Whether this state can hold entry/exit actions.
    pub fn holds_actions(&self) -> bool {
        !matches!(self, State::History { .. })
    }

    /// Whether this is a history pseudo-state.
    pub fn is_history(&self) -> bool {
        matches!(self, State::History { .. })
    }

    /// Whether this is a final state.
    pub fn is_final_state(&self) -> bool {
        matches!(self, State::Final { .. })
    }

    /// Child state names, in registration order. Empty for non-composite
    /// states.
    pub fn children(&self) -> &[String] {
        match self {
            State::Compound { children, .. } | State::Orthogonal { children, .. } => children,
            _ => &[],
        }
    }

    /// Outgoing transitions, in registration order. Empty for history and
    /// final states.
    pub fn transitions(&self) -> &[Transition] {
        match self {
            State::Basic { transitions, .. }
            | State::Compound { transitions, .. }
            | State::Orthogonal { transitions, .. } => transitions,
            _ => &[],
        }
    }

    /// The designated initial child of a compound state, or the memory
    /// default of a history state.
    pub fn initial(&self) -> Option<&str> {
        match self {
            State::Compound { initial, .. } => Some(initial),
            State::History { initial, .. } => initial.as_deref(),
            _ => None,
        }
    }

    /// Entry action, if any.
    pub fn on_entry(&self) -> Option<&str> {
        match self {
            State::Basic { on_entry, .. }
            | State::Compound { on_entry, .. }
            | State::Orthogonal { on_entry, .. }
            | State::Final { on_entry, .. } => on_entry.as_deref(),
            State::History { .. } => None,
        }
    }

    /// Exit action, if any.
    pub fn on_exit(&self) -> Option<&str> {
        match self {
            State::Basic { on_exit, .. }
            | State::Compound { on_exit, .. }
            | State::Orthogonal { on_exit, .. }
            | State::Final { on_exit, .. } => on_exit.as_deref(),
            State::History { .. } => None,
        }
    }

    /// Record the last active child(ren) in a history state's memory.
    ///
    /// This is the single field an interpreter mutates after validation.
    /// Returns `false` when called on a non-history state.
    pub fn remember(&mut self, states: Vec<String>) -> bool {
        if let State::History { memory, .. } = self {
            *memory = states;
            true
        } else {
            false
        }
    }

    /// The remembered child(ren) of a history state; the seeded default
    /// until an interpreter writes to it. Empty for other variants.
    pub fn memory(&self) -> &[String] {
        match self {
            State::History { memory, .. } => memory,
            _ => &[],
        }
    }

    /// Append a child name. Returns `false` when the state is not
    /// composite.
    pub(crate) fn add_child(&mut self, child: String) -> bool {
        match self {
            State::Compound { children, .. } | State::Orthogonal { children, .. } => {
                children.push(child);
                true
            }
            _ => false,
        }
    }

    /// Append an outgoing transition. Returns `false` when the state
    /// cannot hold transitions.
    pub(crate) fn add_transition(&mut self, transition: Transition) -> bool {
        match self {
            State::Basic { transitions, .. }
            | State::Compound { transitions, .. }
            | State::Orthogonal { transitions, .. } => {
                transitions.push(transition);
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            State::Basic { .. } => "Basic",
            State::Compound { .. } => "Compound",
            State::Orthogonal { .. } => "Orthogonal",
            State::History { .. } => "History",
            State::Final { .. } => "Final",
        };
        write!(f, "{}({})", kind, self.name())
    }
}
