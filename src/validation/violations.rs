//! Structural violation errors and the validation report.

use stillwater::NonEmptyVec;
use thiserror::Error;

/// One violation of the chart's structural invariants.
///
/// Every variant carries the offending state or transition, so a report
/// can be acted on without re-deriving which element broke which rule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A transition endpoint names an unregistered state.
    #[error("Transition {transition} refers to unknown state '{state}'")]
    UnknownTransitionTarget { transition: String, state: String },

    /// An internal, eventless, guardless transition would fire
    /// unconditionally on every step with no observable effect.
    #[error("Transition {transition} is internal, eventless and guardless")]
    InvalidInternalTransition { transition: String },

    /// History states only make sense under a compound parent.
    #[error("History state '{state}' must be defined under a compound state")]
    InvalidHistoryParent { state: String },

    /// A history state's memory default must be a sibling, i.e. a child
    /// of the history state's parent.
    #[error("Initial memory '{memory}' of history state '{state}' must refer to a sibling")]
    InvalidHistoryMemory { state: String, memory: String },

    /// A compound state's initial child must be one of its own children.
    #[error("Initial child '{initial}' of compound state '{state}' must be one of its children")]
    InvalidInitialState { state: String, initial: String },

    /// Composite states must declare at least one child.
    #[error("Composite state '{state}' must declare at least one child")]
    EmptyCompositeState { state: String },
}

/// The complete set of violations found by one validation pass.
///
/// Validation never stops at the first problem; the report lists every
/// violation so a chart can be fixed in a single round.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    violations: Vec<ValidationError>,
}

impl ValidationReport {
    pub(crate) fn new(violations: &NonEmptyVec<ValidationError>) -> Self {
        ValidationReport {
            violations: violations.iter().cloned().collect(),
        }
    }

    /// Every violation found, in discovery order. Never empty.
    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} violation(s): ", self.violations.len())?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}
