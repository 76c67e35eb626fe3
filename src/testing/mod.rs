//! Assertion helpers over interpreter step records.
//!
//! An interpreter responds to an event with a *macrostep*: the set of
//! states it entered and exited, the events it sent, and the transitions
//! it processed. These helpers are read-only consumers of such records,
//! meant for tests that inspect interpreter output. No hierarchy algorithm
//! is involved; everything here is a scan over one or more steps.

use crate::core::{Event, Transition};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One full response of an interpreter to an event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroStep {
    /// Names of the states entered during the step, in entry order.
    pub entered_states: Vec<String>,
    /// Names of the states exited during the step, in exit order.
    pub exited_states: Vec<String>,
    /// Events sent during the step.
    pub sent_events: Vec<Event>,
    /// Transitions processed during the step.
    pub transitions: Vec<Transition>,
}

/// Holds if the named state was entered during any of the given steps.
pub fn state_is_entered(steps: &[MacroStep], name: &str) -> bool {
    steps
        .iter()
        .any(|step| step.entered_states.iter().any(|entered| entered == name))
}

/// Holds if the named state was exited during any of the given steps.
pub fn state_is_exited(steps: &[MacroStep], name: &str) -> bool {
    steps
        .iter()
        .any(|step| step.exited_states.iter().any(|exited| exited == name))
}

/// Holds if a matching event was sent during any of the given steps.
///
/// With `name` as `None` any event matches. Only the parameters that are
/// provided are compared against the event's payload; an event with extra
/// payload entries still matches.
pub fn event_is_fired(
    steps: &[MacroStep],
    name: Option<&str>,
    parameters: &[(&str, Value)],
) -> bool {
    steps.iter().any(|step| {
        step.sent_events.iter().any(|event| {
            let name_matches = name.is_none_or(|wanted| event.name == wanted);
            name_matches
                && parameters
                    .iter()
                    .all(|(key, value)| event.param(key) == Some(value))
        })
    })
}

/// Holds if a matching transition was processed during any of the given
/// steps. With `transition` as `None` any processed transition matches.
pub fn transition_is_processed(steps: &[MacroStep], transition: Option<&Transition>) -> bool {
    match transition {
        None => steps.iter().any(|step| !step.transitions.is_empty()),
        Some(wanted) => steps
            .iter()
            .any(|step| step.transitions.iter().any(|processed| processed == wanted)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_steps() -> Vec<MacroStep> {
        vec![
            MacroStep {
                entered_states: vec!["busy".to_string()],
                exited_states: vec!["idle".to_string()],
                sent_events: vec![Event::new("started").with_param("job", json!(7))],
                transitions: vec![Transition::new("idle").to("busy").on(Event::new("work"))],
            },
            MacroStep {
                entered_states: vec!["idle".to_string()],
                exited_states: vec!["busy".to_string()],
                sent_events: vec![],
                transitions: vec![],
            },
        ]
    }

    #[test]
    fn entered_and_exited_scan_all_steps() {
        let steps = sample_steps();

        assert!(state_is_entered(&steps, "busy"));
        assert!(state_is_entered(&steps, "idle")); // second step
        assert!(!state_is_entered(&steps, "ghost"));

        assert!(state_is_exited(&steps, "idle"));
        assert!(state_is_exited(&steps, "busy"));
        assert!(!state_is_exited(&steps, "ghost"));
    }

    #[test]
    fn event_matches_by_name() {
        let steps = sample_steps();
        assert!(event_is_fired(&steps, Some("started"), &[]));
        assert!(!event_is_fired(&steps, Some("stopped"), &[]));
    }

    #[test]
    fn event_name_none_matches_any_event() {
        let steps = sample_steps();
        assert!(event_is_fired(&steps, None, &[]));
        assert!(!event_is_fired(&[MacroStep::default()], None, &[]));
    }

    #[test]
    fn event_parameters_are_compared_when_provided() {
        let steps = sample_steps();

        assert!(event_is_fired(&steps, Some("started"), &[("job", json!(7))]));
        assert!(!event_is_fired(&steps, Some("started"), &[("job", json!(8))]));
        assert!(!event_is_fired(
            &steps,
            Some("started"),
            &[("missing", json!(1))]
        ));
        // Unlisted parameters are not compared.
        assert!(event_is_fired(&steps, None, &[("job", json!(7))]));
    }

    #[test]
    fn transition_matches_by_field_equality() {
        let steps = sample_steps();
        let processed = Transition::new("idle").to("busy").on(Event::new("work"));
        let other = Transition::new("busy").to("idle").on(Event::new("rest"));

        assert!(transition_is_processed(&steps, Some(&processed)));
        assert!(!transition_is_processed(&steps, Some(&other)));
    }

    #[test]
    fn transition_none_matches_any_processed_transition() {
        let steps = sample_steps();
        assert!(transition_is_processed(&steps, None));
        assert!(!transition_is_processed(&[MacroStep::default()], None));
    }

    #[test]
    fn macrostep_serializes_correctly() {
        let steps = sample_steps();
        let json = serde_json::to_string(&steps).unwrap();
        let decoded: Vec<MacroStep> = serde_json::from_str(&json).unwrap();
        assert_eq!(steps, decoded);
    }
}
