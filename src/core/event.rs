//! Named event signals.
//!
//! Events are immutable values identified by name alone. Any payload they
//! carry is opaque to the structural core and is only forwarded to the
//! interpreter and evaluator collaborators.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named signal, optionally carrying some data.
///
/// Two events are equal iff their names match; the payload is not part of
/// the event's identity. This mirrors how an interpreter matches a queued
/// event against a transition's trigger.
///
/// # Example
///
/// ```rust
/// use strata::core::Event;
/// use serde_json::json;
///
/// let plain = Event::new("door_opened");
/// let with_payload = Event::new("door_opened").with_param("floor", json!(3));
///
/// // Identity is by name only.
/// assert_eq!(plain, with_payload);
/// assert_eq!(with_payload.param("floor"), Some(&json!(3)));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    /// Name of the event; its sole identity key.
    pub name: String,
    /// Opaque payload forwarded to the interpreter, if any.
    pub data: Option<Map<String, Value>>,
}

impl Event {
    /// Create an event with no payload.
    pub fn new(name: impl Into<String>) -> Self {
        Event {
            name: name.into(),
            data: None,
        }
    }

    /// Create an event carrying the given payload mapping.
    pub fn with_data(name: impl Into<String>, data: Map<String, Value>) -> Self {
        Event {
            name: name.into(),
            data: Some(data),
        }
    }

    /// Attach a single payload entry, creating the mapping if needed.
    pub fn with_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    /// Look up a payload entry by key.
    ///
    /// Returns `None` when the event carries no data or the key is absent.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(key))
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equality_ignores_data() {
        let bare = Event::new("tick");
        let loaded = Event::new("tick").with_param("count", json!(42));

        assert_eq!(bare, loaded);
        assert_ne!(bare, Event::new("tock"));
    }

    #[test]
    fn hash_matches_equality() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(Event::new("tick"));

        assert!(seen.contains(&Event::new("tick").with_param("count", json!(1))));
        assert!(!seen.contains(&Event::new("tock")));
    }

    #[test]
    fn param_lookup_on_bare_event_is_none() {
        let event = Event::new("tick");
        assert_eq!(event.param("anything"), None);
    }

    #[test]
    fn param_lookup_finds_payload_entries() {
        let event = Event::new("keypress")
            .with_param("key", json!("a"))
            .with_param("shift", json!(false));

        assert_eq!(event.param("key"), Some(&json!("a")));
        assert_eq!(event.param("shift"), Some(&json!(false)));
        assert_eq!(event.param("ctrl"), None);
    }

    #[test]
    fn display_shows_name() {
        assert_eq!(Event::new("go").to_string(), "Event(go)");
    }

    #[test]
    fn event_serializes_correctly() {
        let event = Event::new("submit").with_param("attempt", json!(2));
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
        assert_eq!(deserialized.param("attempt"), Some(&json!(2)));
    }
}
