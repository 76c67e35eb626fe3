//! Strata: the structural core of a statechart engine
//!
//! Strata represents the tree of states and the set of transitions of a
//! hierarchical, possibly-parallel state machine, and provides the
//! hierarchy algorithms an execution interpreter needs on every step:
//! ancestor chains, descendant sets, least common ancestors and leaf
//! filtering. It deliberately stops there — event dispatch, guard/action
//! evaluation and the active configuration belong to an interpreter built
//! on top of this crate.
//!
//! # Core Concepts
//!
//! - **State variants**: `Basic`, `Compound`, `Orthogonal`, `History` and
//!   `Final` states as one closed tagged union
//! - **StateChart**: the registry owning all states and transitions plus
//!   the parent/child index and hierarchy queries
//! - **Validation**: six structural invariants, checked in one pass that
//!   accumulates every violation
//!
//! # Example
//!
//! ```rust
//! use strata::{Event, State, StateChart, Transition};
//!
//! let mut chart = StateChart::new("job", "root");
//! chart.register_state(State::compound("root", "idle"), None)?;
//! chart.register_state(State::basic("idle"), Some("root"))?;
//! chart.register_state(State::basic("busy"), Some("root"))?;
//! chart.register_state(State::final_state("done"), Some("root"))?;
//! chart.register_transition(
//!     Transition::new("idle").to("busy").on(Event::new("work")),
//! )?;
//! chart.register_transition(
//!     Transition::new("busy").to("done").on(Event::new("finish")),
//! )?;
//!
//! chart.validate().expect("chart is structurally sound");
//!
//! assert_eq!(chart.ancestors_of("busy")?, ["root"]);
//! assert_eq!(chart.descendants_of("root")?, ["idle", "busy", "done"]);
//! assert_eq!(
//!     chart.least_common_ancestor("idle", "done")?.as_deref(),
//!     Some("root"),
//! );
//! # Ok::<(), strata::ChartError>(())
//! ```

pub mod chart;
pub mod core;
pub mod testing;
pub mod validation;

// Re-export commonly used types
pub use crate::chart::{ChartError, StateChart};
pub use crate::core::{Event, State, Transition};
pub use crate::validation::{ValidationError, ValidationReport};
