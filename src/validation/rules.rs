//! The six structural invariants.
//!
//! Each rule is a small pure function returning a `Validation`; `check`
//! runs all of them over the fully registered chart and accumulates every
//! failure instead of stopping at the first.

use crate::chart::StateChart;
use crate::core::{State, Transition};
use crate::validation::ValidationError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Checked = Validation<(), NonEmptyVec<ValidationError>>;

/// Evaluate every invariant over the chart, accumulating all violations.
pub fn check(chart: &StateChart) -> Checked {
    let mut checks: Vec<Checked> = Vec::new();

    for transition in &chart.transitions {
        checks.push(endpoint_exists(chart, transition, &transition.from_state));
        if let Some(target) = &transition.to_state {
            checks.push(endpoint_exists(chart, transition, target));
        }
        checks.push(no_unconditional_internal(transition));
    }

    for state in chart.states.values() {
        if state.is_history() {
            checks.push(history_parent_is_compound(chart, state));
            checks.push(history_memory_is_sibling(chart, state));
        }
        if state.is_composite() {
            checks.push(composite_has_children(state));
        }
        if matches!(state, State::Compound { .. }) {
            checks.push(compound_initial_is_child(chart, state));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// C1: both endpoints of a transition must be registered.
fn endpoint_exists(chart: &StateChart, transition: &Transition, endpoint: &str) -> Checked {
    if chart.states.contains_key(endpoint) {
        Validation::success(())
    } else {
        Validation::fail(ValidationError::UnknownTransitionTarget {
            transition: transition.to_string(),
            state: endpoint.to_string(),
        })
    }
}

/// C6: an internal, eventless, guardless transition is forbidden.
fn no_unconditional_internal(transition: &Transition) -> Checked {
    if transition.is_internal() && transition.is_eventless() && transition.guard.is_none() {
        Validation::fail(ValidationError::InvalidInternalTransition {
            transition: transition.to_string(),
        })
    } else {
        Validation::success(())
    }
}

/// C2: a history state's parent must be a compound state.
fn history_parent_is_compound(chart: &StateChart, state: &State) -> Checked {
    let parent = chart
        .parent
        .get(state.name())
        .and_then(|p| p.as_deref())
        .and_then(|name| chart.states.get(name));
    match parent {
        Some(State::Compound { .. }) => Validation::success(()),
        _ => Validation::fail(ValidationError::InvalidHistoryParent {
            state: state.name().to_string(),
        }),
    }
}

/// C3: a history state's memory default must be a child of the history
/// state's parent.
fn history_memory_is_sibling(chart: &StateChart, state: &State) -> Checked {
    let Some(memory) = state.initial() else {
        return Validation::success(());
    };
    let own_parent = chart.parent.get(state.name()).and_then(|p| p.as_deref());
    let memory_parent = chart.parent.get(memory).and_then(|p| p.as_deref());

    // An unregistered default has no parent entry at all and fails too.
    if chart.states.contains_key(memory) && memory_parent == own_parent {
        Validation::success(())
    } else {
        Validation::fail(ValidationError::InvalidHistoryMemory {
            state: state.name().to_string(),
            memory: memory.to_string(),
        })
    }
}

/// C4: a compound state's initial child must be one of its own children.
/// A top-level compound (no parent) is exempt, matching the structural
/// contract for the chart's own initial state.
fn compound_initial_is_child(chart: &StateChart, state: &State) -> Checked {
    let Some(initial) = state.initial() else {
        return Validation::success(());
    };
    let nested = chart
        .parent
        .get(state.name())
        .map(|p| p.is_some())
        .unwrap_or(false);
    if !nested {
        return Validation::success(());
    }

    let initial_parent = chart.parent.get(initial).and_then(|p| p.as_deref());
    if initial_parent == Some(state.name()) {
        Validation::success(())
    } else {
        Validation::fail(ValidationError::InvalidInitialState {
            state: state.name().to_string(),
            initial: initial.to_string(),
        })
    }
}

/// C5: composite states must declare at least one child.
fn composite_has_children(state: &State) -> Checked {
    if state.children().is_empty() {
        Validation::fail(ValidationError::EmptyCompositeState {
            state: state.name().to_string(),
        })
    } else {
        Validation::success(())
    }
}
