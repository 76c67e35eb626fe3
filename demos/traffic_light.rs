//! Traffic Light Statechart
//!
//! This example demonstrates a compound state with a history pseudo-state:
//! the light cycles red -> green -> yellow, a "power_cut" event leaves the
//! operating mode, and the history state lets a later "power_restored"
//! resume the phase that was active.
//!
//! Key concepts:
//! - Compound states and initial children
//! - Shallow history with a seeded default
//! - Structural validation before execution
//!
//! Run with: cargo run --example traffic_light

use strata::{Event, State, StateChart, Transition};

fn main() {
    println!("=== Traffic Light Statechart ===\n");

    let mut chart = StateChart::new("traffic_light", "operating");

    chart
        .register_state(State::compound("operating", "red"), None)
        .unwrap();
    chart.register_state(State::basic("broken"), None).unwrap();
    chart
        .register_state(State::basic("red"), Some("operating"))
        .unwrap();
    chart
        .register_state(State::basic("green"), Some("operating"))
        .unwrap();
    chart
        .register_state(State::basic("yellow"), Some("operating"))
        .unwrap();
    chart
        .register_state(
            State::history("phase_memory").defaulting_to("red"),
            Some("operating"),
        )
        .unwrap();

    for (from, to, event) in [
        ("red", "green", "tick"),
        ("green", "yellow", "tick"),
        ("yellow", "red", "tick"),
        ("operating", "broken", "power_cut"),
        ("broken", "phase_memory", "power_restored"),
    ] {
        chart
            .register_transition(Transition::new(from).to(to).on(Event::new(event)))
            .unwrap();
    }

    chart.validate().expect("traffic light chart is sound");
    println!("Chart validated: {} states registered\n", chart.states().count());

    println!("Hierarchy:");
    println!("  descendants of 'operating': {:?}", chart.descendants_of("operating").unwrap());
    println!("  ancestors of 'green':      {:?}", chart.ancestors_of("green").unwrap());
    println!(
        "  lca(green, broken):        {:?}\n",
        chart.least_common_ancestor("green", "broken").unwrap()
    );

    // An interpreter exiting "operating" while "yellow" is active would
    // record the phase in the history state's memory slot.
    chart
        .state_mut("phase_memory")
        .unwrap()
        .remember(vec!["yellow".to_string()]);
    println!(
        "After a power cut during yellow, memory holds: {:?}",
        chart.state("phase_memory").unwrap().memory()
    );
    println!("Power restored -> the interpreter resumes that phase.");

    println!("\n=== Example Complete ===");
}
