//! Traffic Light State Machine
//!
//! This demo drives a traffic light with a pedestrian button.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Action chaining: one button press cascades through amber to red
//! - Per-machine diagnostic names rendered through `tracing`
//!
//! Run with: cargo run --example traffic_light

use spindle::{no_action, outcomes, Input, Machine, State, StateId};
use std::collections::HashMap;
use std::sync::Arc;

const RED: StateId = StateId(0);
const AMBER: StateId = StateId(1);
const GREEN: StateId = StateId(2);

const TICK: Input = Input(0);
const BUTTON: Input = Input(1);
const SETTLE: Input = Input(2);

#[derive(Default)]
struct Crossing {
    stops_served: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut machine = Machine::define(vec![
        State::new(RED).with_outcomes(outcomes! {
            TICK => (GREEN, no_action()),
        }),
        State::new(AMBER).with_outcomes(outcomes! {
            TICK => (RED, no_action()),
            // A press while amber chains straight through to red.
            SETTLE => (RED, Arc::new(|crossing: &mut Crossing| {
                crossing.stops_served += 1;
                None
            })),
        }),
        State::new(GREEN).with_outcomes(outcomes! {
            TICK => (AMBER, no_action()),
            BUTTON => (AMBER, Arc::new(|_: &mut Crossing| Some(SETTLE))),
        }),
    ])
    .expect("light definition has unique states");

    machine.attach_diagnostics(
        HashMap::from([
            (RED, "red".to_string()),
            (AMBER, "amber".to_string()),
            (GREEN, "green".to_string()),
        ]),
        HashMap::from([
            (TICK, "tick".to_string()),
            (BUTTON, "button".to_string()),
            (SETTLE, "settle".to_string()),
        ]),
    );

    let mut crossing = Crossing::default();

    println!("=== Traffic Light ===");
    println!("initial: red");

    // A normal cycle: red -> green -> amber -> red.
    for _ in 0..3 {
        machine.spin(&mut crossing, TICK).expect("tick is always valid");
        println!("tick -> state {}", machine.current());
    }

    // Back to green, then a pedestrian press. One spin chains
    // green -> amber -> red.
    machine.spin(&mut crossing, TICK).expect("tick is always valid");
    machine
        .spin(&mut crossing, BUTTON)
        .expect("button is valid while green");
    println!("button -> state {} (chained through amber)", machine.current());
    println!("pedestrian stops served: {}", crossing.stops_served);

    // An input the current state does not accept is a structured error.
    if let Err(err) = machine.spin(&mut crossing, BUTTON) {
        println!("pressing again while red: {err}");
    }
}
