//! Structural validation of a chart.
//!
//! Six invariants make the hierarchy algorithms meaningful:
//!
//! - **C1** transition endpoints reference registered states
//! - **C2** history states live under a compound parent
//! - **C3** a history memory default is a sibling of the history state
//! - **C4** a nested compound's initial child is one of its own children
//! - **C5** composite states declare at least one child
//! - **C6** no transition is internal, eventless and guardless at once
//!
//! Validation accumulates every violation into one report rather than
//! failing fast, so a broken chart can be fixed in a single round. The
//! accumulation uses `stillwater`'s `Validation` type: don't stop at the
//! first error — collect them all.

mod rules;
mod violations;

pub use rules::check;
pub use violations::{ValidationError, ValidationReport};
