//! The chart registry and its hierarchy algorithms.
//!
//! A [`StateChart`] owns every [`State`] and [`Transition`] record plus the
//! parent/child index. A builder collaborator populates it through the
//! `register_*` operations, validates it once, and an interpreter then
//! queries the hierarchy on every step: ancestor chains and the least
//! common ancestor bound the region a transition exits and re-enters,
//! descendant lists drive entry ordering, and leaf filtering picks the
//! deepest representatives out of a candidate set.
//!
//! The chart is single-writer-then-many-readers: all registration happens
//! before [`StateChart::validate`], which freezes precomputed hierarchy
//! tables. The only legitimate mutation afterwards is history-state
//! memory, which no hierarchy table consults. Sharing one chart across
//! concurrent interpreter instances is unsafe for that same memory slot;
//! give each instance its own chart (or move memory out) if you need that.

mod error;
mod hierarchy;

pub use error::ChartError;

use crate::core::{State, Transition};
use crate::validation::{self, ValidationReport};
use hierarchy::Hierarchy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use stillwater::validation::Validation;

/// Registry of one statechart: its states, transitions and hierarchy.
///
/// # Example
///
/// ```rust
/// use strata::core::{Event, State, Transition};
/// use strata::chart::StateChart;
///
/// let mut chart = StateChart::new("door", "root");
/// chart.register_state(State::compound("root", "closed"), None)?;
/// chart.register_state(State::basic("closed"), Some("root"))?;
/// chart.register_state(State::basic("open"), Some("root"))?;
/// chart.register_transition(
///     Transition::new("closed").to("open").on(Event::new("open_door")),
/// )?;
/// chart.validate().expect("structurally sound");
///
/// assert_eq!(chart.ancestors_of("closed")?, ["root"]);
/// assert_eq!(chart.least_common_ancestor("closed", "open")?.as_deref(), Some("root"));
/// # Ok::<(), strata::chart::ChartError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateChart {
    /// Name of this chart.
    pub name: String,
    /// Name of the initial state.
    pub initial: String,
    /// Code to execute before execution starts, as opaque text.
    pub on_entry: Option<String>,
    pub(crate) states: HashMap<String, State>,
    pub(crate) transitions: Vec<Transition>,
    pub(crate) parent: HashMap<String, Option<String>>,
    pub(crate) children: Vec<String>,
    #[serde(skip)]
    pub(crate) hierarchy: Option<Hierarchy>,
}

impl StateChart {
    /// Create an empty chart with the given name and initial state.
    pub fn new(name: impl Into<String>, initial: impl Into<String>) -> Self {
        StateChart {
            name: name.into(),
            initial: initial.into(),
            on_entry: None,
            states: HashMap::new(),
            transitions: Vec::new(),
            parent: HashMap::new(),
            children: Vec::new(),
            hierarchy: None,
        }
    }

    /// Set the code to execute before the chart starts.
    pub fn with_entry(mut self, code: impl Into<String>) -> Self {
        self.on_entry = Some(code.into());
        self
    }

    /// Register a state under the given parent, or at the top level when
    /// `parent` is `None`.
    ///
    /// Fails with [`ChartError::DuplicateState`] on a name collision, with
    /// [`ChartError::UnknownState`] when the parent is not registered, and
    /// with [`ChartError::InvalidParent`] when the parent cannot hold
    /// children. Parents must therefore be registered before their
    /// children.
    pub fn register_state(&mut self, state: State, parent: Option<&str>) -> Result<(), ChartError> {
        let name = state.name().to_string();
        if self.states.contains_key(&name) {
            return Err(ChartError::DuplicateState(name));
        }

        match parent {
            Some(parent_name) => {
                let parent_state = self
                    .states
                    .get_mut(parent_name)
                    .ok_or_else(|| ChartError::UnknownState(parent_name.to_string()))?;
                if !parent_state.add_child(name.clone()) {
                    return Err(ChartError::InvalidParent(parent_name.to_string()));
                }
                self.parent.insert(name.clone(), Some(parent_name.to_string()));
            }
            None => {
                self.children.push(name.clone());
                self.parent.insert(name.clone(), None);
            }
        }

        self.states.insert(name, state);
        // Structural edit; precomputed tables are stale.
        self.hierarchy = None;
        Ok(())
    }

    /// Register a transition on its source state.
    ///
    /// Fails with [`ChartError::UnknownState`] when the source is not
    /// registered and [`ChartError::InvalidTransitionSource`] when the
    /// source is a history or final state.
    pub fn register_transition(&mut self, transition: Transition) -> Result<(), ChartError> {
        let source = self
            .states
            .get_mut(&transition.from_state)
            .ok_or_else(|| ChartError::UnknownState(transition.from_state.clone()))?;
        if !source.add_transition(transition.clone()) {
            return Err(ChartError::InvalidTransitionSource(transition.from_state.clone()));
        }
        self.transitions.push(transition);
        self.hierarchy = None;
        Ok(())
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    /// Mutable lookup, for interpreters writing history memory.
    pub fn state_mut(&mut self, name: &str) -> Option<&mut State> {
        self.states.get_mut(name)
    }

    /// Whether a state with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Iterate over every registered state, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    /// Every registered transition, in registration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The outgoing transitions of one state, in registration order.
    pub fn transitions_from(&self, state: &str) -> Result<&[Transition], ChartError> {
        self.states
            .get(state)
            .map(State::transitions)
            .ok_or_else(|| ChartError::UnknownState(state.to_string()))
    }

    /// Names of the top-level states, in registration order.
    pub fn top_level(&self) -> &[String] {
        &self.children
    }

    /// The parent of a state, or `None` for a top-level state.
    pub fn parent_of(&self, state: &str) -> Result<Option<&str>, ChartError> {
        self.parent
            .get(state)
            .map(|p| p.as_deref())
            .ok_or_else(|| ChartError::UnknownState(state.to_string()))
    }

    /// Ancestors of a state, root-ward: its parent first, the deepest
    /// top-level ancestor last. The state itself and the synthetic root
    /// are never included.
    pub fn ancestors_of(&self, state: &str) -> Result<Vec<String>, ChartError> {
        self.ensure_registered(state)?;
        match &self.hierarchy {
            Some(tables) => Ok(tables.ancestors(state).unwrap_or(&[]).to_vec()),
            None => Ok(hierarchy::ancestors_walk(state, &self.parent)),
        }
    }

    /// Descendants of a state, breadth-first: direct children precede
    /// their own descendants. Empty for non-composite states.
    pub fn descendants_of(&self, state: &str) -> Result<Vec<String>, ChartError> {
        self.ensure_registered(state)?;
        match &self.hierarchy {
            Some(tables) => Ok(tables.descendants(state).unwrap_or(&[]).to_vec()),
            None => Ok(hierarchy::descendants_walk(state, &self.states)),
        }
    }

    /// Depth of a state: top-level states have depth 1, their children
    /// depth 2, and so on.
    pub fn depth_of(&self, state: &str) -> Result<usize, ChartError> {
        Ok(self.ancestors_of(state)?.len() + 1)
    }

    /// The deepest state that is an ancestor-or-self of both arguments,
    /// or `None` when they only share the implicit root.
    ///
    /// The result is symmetric: a state that contains the other is their
    /// least common ancestor (so `lca(s, s) == s`). Interpreters use this
    /// to bound the region a transition exits and re-enters.
    pub fn least_common_ancestor(
        &self,
        first: &str,
        second: &str,
    ) -> Result<Option<String>, ChartError> {
        let mut chain = vec![first.to_string()];
        chain.extend(self.ancestors_of(first)?);
        let mut other = vec![second.to_string()];
        other.extend(self.ancestors_of(second)?);

        // Both chains run root-ward, so the first hit is the deepest.
        Ok(chain.into_iter().find(|name| other.contains(name)))
    }

    /// Filter a set of states down to those with no other input state
    /// among their descendants.
    ///
    /// Interpreters use this to pick the deepest representatives from a
    /// set of entered or exited candidates. The result preserves input
    /// order and the operation is idempotent.
    pub fn leaves_of(&self, states: &[&str]) -> Result<Vec<String>, ChartError> {
        for state in states {
            self.ensure_registered(state)?;
        }
        let mut leaves = Vec::new();
        for state in states {
            let descendants = self.descendants_of(state)?;
            let covers_another = descendants
                .iter()
                .any(|descendant| states.iter().any(|other| other == descendant));
            if !covers_another {
                leaves.push((*state).to_string());
            }
        }
        Ok(leaves)
    }

    /// Check the six structural invariants, accumulating every violation,
    /// and freeze the hierarchy tables on success.
    ///
    /// A chart that fails validation must not be executed; there is no
    /// partial mode. Registering anything afterwards drops the tables and
    /// requires a fresh `validate` call.
    pub fn validate(&mut self) -> Result<(), ValidationReport> {
        match validation::check(self) {
            Validation::Success(()) => {
                self.hierarchy = Some(Hierarchy::build(&self.states, &self.parent));
                Ok(())
            }
            Validation::Failure(violations) => Err(ValidationReport::new(&violations)),
        }
    }

    /// Whether the chart currently passes validation, without freezing it.
    pub fn is_valid(&self) -> bool {
        validation::check(self).is_success()
    }

    /// Whether the hierarchy tables are frozen, i.e. `validate` succeeded
    /// and nothing has been registered since.
    pub fn is_finalized(&self) -> bool {
        self.hierarchy.is_some()
    }

    fn ensure_registered(&self, state: &str) -> Result<(), ChartError> {
        if self.states.contains_key(state) {
            Ok(())
        } else {
            Err(ChartError::UnknownState(state.to_string()))
        }
    }
}

impl fmt::Display for StateChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateChart({})", self.name)
    }
}
