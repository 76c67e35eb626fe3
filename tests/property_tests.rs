//! Property-based tests for the hierarchy algorithms.
//!
//! These tests use proptest to verify the structural properties hold
//! across many randomly generated state trees.

use proptest::prelude::*;
use strata::{State, StateChart};

/// Build a chart from a parent table: node `i + 1` is a child of
/// `parents[i] % (i + 1)`, node 0 is the single top-level state. Internal
/// nodes become orthogonal states, leaves basic ones, so the chart also
/// passes validation.
fn chart_from_parents(parents: &[usize]) -> (StateChart, Vec<String>) {
    let count = parents.len() + 1;
    let names: Vec<String> = (0..count).map(|i| format!("s{}", i)).collect();

    let mut has_children = vec![false; count];
    for (i, raw) in parents.iter().enumerate() {
        has_children[raw % (i + 1)] = true;
    }

    let mut chart = StateChart::new("prop", "s0");
    for (i, name) in names.iter().enumerate() {
        let state = if has_children[i] {
            State::orthogonal(name.as_str())
        } else {
            State::basic(name.as_str())
        };
        let parent = if i == 0 {
            None
        } else {
            Some(names[parents[i - 1] % i].clone())
        };
        chart.register_state(state, parent.as_deref()).unwrap();
    }
    (chart, names)
}

prop_compose! {
    fn arbitrary_tree()(parents in prop::collection::vec(0usize..64, 0..12)) -> (StateChart, Vec<String>) {
        chart_from_parents(&parents)
    }
}

proptest! {
    #[test]
    fn depth_is_ancestor_count_plus_one((chart, names) in arbitrary_tree()) {
        for name in &names {
            let ancestors = chart.ancestors_of(name).unwrap();
            prop_assert_eq!(chart.depth_of(name).unwrap(), ancestors.len() + 1);
        }
        prop_assert_eq!(chart.depth_of("s0").unwrap(), 1);
    }

    #[test]
    fn no_state_is_its_own_ancestor((chart, names) in arbitrary_tree()) {
        for name in &names {
            let ancestors = chart.ancestors_of(name).unwrap();
            prop_assert!(!ancestors.contains(name));
        }
    }

    #[test]
    fn ancestor_chain_is_strictly_shallower((chart, names) in arbitrary_tree()) {
        for name in &names {
            let mut last_depth = chart.depth_of(name).unwrap();
            for ancestor in chart.ancestors_of(name).unwrap() {
                let depth = chart.depth_of(&ancestor).unwrap();
                prop_assert_eq!(depth, last_depth - 1);
                last_depth = depth;
            }
        }
    }

    #[test]
    fn lca_is_symmetric((chart, names) in arbitrary_tree()) {
        for a in &names {
            for b in &names {
                prop_assert_eq!(
                    chart.least_common_ancestor(a, b).unwrap(),
                    chart.least_common_ancestor(b, a).unwrap()
                );
            }
        }
    }

    #[test]
    fn lca_with_a_descendant_is_the_container((chart, names) in arbitrary_tree()) {
        for name in &names {
            for descendant in chart.descendants_of(name).unwrap() {
                let lca = chart.least_common_ancestor(name, &descendant).unwrap();
                prop_assert_eq!(lca.as_deref(), Some(name.as_str()));
            }
        }
    }

    #[test]
    fn descendants_preserve_parent_before_child_order((chart, names) in arbitrary_tree()) {
        for name in &names {
            let descendants = chart.descendants_of(name).unwrap();
            for (position, descendant) in descendants.iter().enumerate() {
                if let Some(parent) = chart.parent_of(descendant).unwrap() {
                    if parent != name {
                        let parent_position = descendants
                            .iter()
                            .position(|other| other == parent)
                            .unwrap();
                        prop_assert!(parent_position < position);
                    }
                }
            }
        }
    }

    #[test]
    fn leaf_filter_is_idempotent((chart, names) in arbitrary_tree(), mask in any::<u16>()) {
        let subset: Vec<&str> = names
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << (i % 16)) != 0)
            .map(|(_, name)| name.as_str())
            .collect();

        let once = chart.leaves_of(&subset).unwrap();
        let once_refs: Vec<&str> = once.iter().map(String::as_str).collect();
        let twice = chart.leaves_of(&once_refs).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn leaves_of_a_subtree_share_no_ancestry((chart, names) in arbitrary_tree()) {
        for name in &names {
            let mut subtree = chart.descendants_of(name).unwrap();
            subtree.push(name.clone());
            let subtree_refs: Vec<&str> = subtree.iter().map(String::as_str).collect();

            let leaves = chart.leaves_of(&subtree_refs).unwrap();
            prop_assert!(!leaves.is_empty());

            // No leaf may cover another input state, so in particular no
            // ancestor-descendant pair survives the filter.
            for leaf in &leaves {
                let below = chart.descendants_of(leaf).unwrap();
                for member in &subtree {
                    prop_assert!(!below.contains(member));
                }
            }
        }
    }

    #[test]
    fn frozen_tables_answer_like_uncached_walks((chart, names) in arbitrary_tree()) {
        let mut frozen = chart.clone();
        frozen.validate().unwrap();
        prop_assert!(frozen.is_finalized());

        for name in &names {
            prop_assert_eq!(
                chart.ancestors_of(name).unwrap(),
                frozen.ancestors_of(name).unwrap()
            );
            prop_assert_eq!(
                chart.descendants_of(name).unwrap(),
                frozen.descendants_of(name).unwrap()
            );
        }
    }
}
