//! Media Player Statechart
//!
//! This example demonstrates orthogonal regions: while the player is on,
//! its playback region and its display region are active simultaneously
//! and evolve independently.
//!
//! Key concepts:
//! - Orthogonal states with parallel regions
//! - Leaf filtering to find the deepest active representatives
//! - Eventless guarded transitions
//!
//! Run with: cargo run --example media_player

use strata::{Event, State, StateChart, Transition};

fn main() {
    println!("=== Media Player Statechart ===\n");

    let mut chart = StateChart::new("media_player", "on");

    chart.register_state(State::orthogonal("on"), None).unwrap();
    chart.register_state(State::final_state("off"), None).unwrap();

    // Playback region
    chart
        .register_state(State::compound("playback", "stopped"), Some("on"))
        .unwrap();
    chart
        .register_state(State::basic("stopped"), Some("playback"))
        .unwrap();
    chart
        .register_state(State::basic("playing"), Some("playback"))
        .unwrap();
    chart
        .register_state(State::basic("paused"), Some("playback"))
        .unwrap();

    // Display region
    chart
        .register_state(State::compound("display", "track_view"), Some("on"))
        .unwrap();
    chart
        .register_state(State::basic("track_view"), Some("display"))
        .unwrap();
    chart
        .register_state(State::basic("queue_view"), Some("display"))
        .unwrap();

    for (from, to, event) in [
        ("stopped", "playing", "play"),
        ("playing", "paused", "pause"),
        ("paused", "playing", "play"),
        ("playing", "stopped", "stop"),
        ("track_view", "queue_view", "toggle_view"),
        ("queue_view", "track_view", "toggle_view"),
        ("on", "off", "shutdown"),
    ] {
        chart
            .register_transition(Transition::new(from).to(to).on(Event::new(event)))
            .unwrap();
    }

    // Eventless transition: stop automatically once the queue drains.
    chart
        .register_transition(Transition::new("playing").to("stopped").guarded_by("queue.is_empty"))
        .unwrap();

    chart.validate().expect("media player chart is sound");
    println!("Chart validated\n");

    println!("Both regions are active while 'on' is active:");
    println!("  children of 'on': {:?}\n", chart.state("on").unwrap().children());

    // A configuration contains states at every depth; the leaf filter
    // keeps only the deepest representatives.
    let configuration = ["on", "playback", "playing", "display", "queue_view"];
    println!("Active configuration: {:?}", configuration);
    println!(
        "Deepest active states: {:?}",
        chart.leaves_of(&configuration).unwrap()
    );

    println!(
        "\nlca(playing, queue_view) = {:?} bounds a cross-region transition.",
        chart.least_common_ancestor("playing", "queue_view").unwrap()
    );

    println!("\n=== Example Complete ===");
}
