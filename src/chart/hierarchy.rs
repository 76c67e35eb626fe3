//! Precomputed hierarchy tables.
//!
//! Ancestor chains and descendant lists are computed once, when the chart
//! is validated, and kept as immutable tables afterwards. Any registration
//! drops the tables, so a stale answer can never be served; before
//! finalization the same walks run uncached.

use crate::core::State;
use std::collections::{HashMap, VecDeque};

/// Immutable ancestor/descendant tables for a finalized chart.
#[derive(Clone, Debug)]
pub(crate) struct Hierarchy {
    ancestors: HashMap<String, Vec<String>>,
    descendants: HashMap<String, Vec<String>>,
}

impl Hierarchy {
    /// Compute the tables for every registered state.
    pub(crate) fn build(
        states: &HashMap<String, State>,
        parent: &HashMap<String, Option<String>>,
    ) -> Self {
        let mut ancestors = HashMap::with_capacity(states.len());
        let mut descendants = HashMap::with_capacity(states.len());
        for name in states.keys() {
            ancestors.insert(name.clone(), ancestors_walk(name, parent));
            descendants.insert(name.clone(), descendants_walk(name, states));
        }
        Hierarchy {
            ancestors,
            descendants,
        }
    }

    pub(crate) fn ancestors(&self, state: &str) -> Option<&[String]> {
        self.ancestors.get(state).map(Vec::as_slice)
    }

    pub(crate) fn descendants(&self, state: &str) -> Option<&[String]> {
        self.descendants.get(state).map(Vec::as_slice)
    }
}

/// Walk the parent index root-ward, excluding the state itself. The
/// synthetic root (an absent parent) terminates the chain and is never
/// part of it.
pub(crate) fn ancestors_walk(state: &str, parent: &HashMap<String, Option<String>>) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = parent.get(state).and_then(|p| p.as_deref());
    while let Some(name) = current {
        chain.push(name.to_string());
        current = parent.get(name).and_then(|p| p.as_deref());
    }
    chain
}

/// Breadth-first walk over child lists: direct children first, then their
/// children, so every parent precedes its own descendants. Non-composite
/// states yield nothing.
pub(crate) fn descendants_walk(state: &str, states: &HashMap<String, State>) -> Vec<String> {
    let mut found = Vec::new();
    let mut queue = VecDeque::from([state]);
    while let Some(name) = queue.pop_front() {
        if let Some(node) = states.get(name) {
            for child in node.children() {
                found.push(child.clone());
                queue.push_back(child.as_str());
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_fixture() -> (HashMap<String, State>, HashMap<String, Option<String>>) {
        // root > middle > leaf
        let mut states = HashMap::new();
        let mut parent = HashMap::new();

        let mut root = State::compound("root", "middle");
        root.add_child("middle".to_string());
        let mut middle = State::compound("middle", "leaf");
        middle.add_child("leaf".to_string());

        states.insert("root".to_string(), root);
        states.insert("middle".to_string(), middle);
        states.insert("leaf".to_string(), State::basic("leaf"));

        parent.insert("root".to_string(), None);
        parent.insert("middle".to_string(), Some("root".to_string()));
        parent.insert("leaf".to_string(), Some("middle".to_string()));

        (states, parent)
    }

    #[test]
    fn ancestors_walk_is_root_ward() {
        let (_, parent) = nested_fixture();
        assert_eq!(ancestors_walk("leaf", &parent), ["middle", "root"]);
        assert_eq!(ancestors_walk("middle", &parent), ["root"]);
        assert!(ancestors_walk("root", &parent).is_empty());
    }

    #[test]
    fn descendants_walk_puts_children_before_grandchildren() {
        let (states, _) = nested_fixture();
        assert_eq!(descendants_walk("root", &states), ["middle", "leaf"]);
        assert_eq!(descendants_walk("middle", &states), ["leaf"]);
        assert!(descendants_walk("leaf", &states).is_empty());
    }

    #[test]
    fn tables_agree_with_direct_walks() {
        let (states, parent) = nested_fixture();
        let tables = Hierarchy::build(&states, &parent);

        for name in states.keys() {
            assert_eq!(
                tables.ancestors(name).unwrap(),
                ancestors_walk(name, &parent).as_slice()
            );
            assert_eq!(
                tables.descendants(name).unwrap(),
                descendants_walk(name, &states).as_slice()
            );
        }
    }

    #[test]
    fn unknown_state_has_no_table_entry() {
        let (states, parent) = nested_fixture();
        let tables = Hierarchy::build(&states, &parent);
        assert!(tables.ancestors("ghost").is_none());
        assert!(tables.descendants("ghost").is_none());
    }
}
