//! Black-box tests for the spin loop: concurrency and diagnostics.

use spindle::{Input, Machine, State, StateId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

const IDLE: StateId = StateId(0);
const HALFWAY: StateId = StateId(1);

const GO: Input = Input(0);
const STEP: Input = Input(1);

/// A machine whose only external input triggers a two-transition chain:
/// IDLE --GO--> HALFWAY --STEP--> IDLE, counting each transition.
fn round_trip_machine(transitions: Arc<AtomicUsize>) -> Machine<()> {
    let first = Arc::clone(&transitions);
    let second = transitions;

    Machine::define(vec![
        State::new(IDLE).on(
            GO,
            HALFWAY,
            Arc::new(move |_: &mut ()| {
                first.fetch_add(1, Ordering::SeqCst);
                Some(STEP)
            }),
        ),
        State::new(HALFWAY).on(
            STEP,
            IDLE,
            Arc::new(move |_: &mut ()| {
                second.fetch_add(1, Ordering::SeqCst);
                None
            }),
        ),
    ])
    .unwrap()
}

#[test]
fn concurrent_spins_never_interleave_mid_chain() {
    const THREADS: usize = 8;
    const SPINS_PER_THREAD: usize = 200;

    let transitions = Arc::new(AtomicUsize::new(0));
    let machine = Arc::new(round_trip_machine(Arc::clone(&transitions)));

    // HALFWAY does not accept GO, so if a chain were ever visible to another
    // caller before finishing, that caller's spin would fail with
    // InvalidInput. Every spin succeeding proves each chain ran atomically.
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let machine = Arc::clone(&machine);
            thread::spawn(move || {
                for _ in 0..SPINS_PER_THREAD {
                    machine.spin(&mut (), GO).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(machine.current(), IDLE);
    // Two transitions per chain, one chain per spin.
    assert_eq!(
        transitions.load(Ordering::SeqCst),
        THREADS * SPINS_PER_THREAD * 2
    );
}

#[test]
fn machines_are_independent() {
    let counter_a = Arc::new(AtomicUsize::new(0));
    let counter_b = Arc::new(AtomicUsize::new(0));
    let machine_a = round_trip_machine(Arc::clone(&counter_a));
    let machine_b = round_trip_machine(Arc::clone(&counter_b));

    machine_a.spin(&mut (), GO).unwrap();
    machine_a.spin(&mut (), GO).unwrap();
    machine_b.spin(&mut (), GO).unwrap();

    assert_eq!(counter_a.load(Ordering::SeqCst), 4);
    assert_eq!(counter_b.load(Ordering::SeqCst), 2);
}

#[test]
fn tracing_subscriber_does_not_change_behavior() {
    let transitions = Arc::new(AtomicUsize::new(0));
    let mut machine = round_trip_machine(Arc::clone(&transitions));
    machine.attach_diagnostics(
        HashMap::from([(IDLE, "idle".to_string()), (HALFWAY, "halfway".to_string())]),
        HashMap::from([(GO, "go".to_string()), (STEP, "step".to_string())]),
    );

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        machine.spin(&mut (), GO).unwrap();
    });

    assert_eq!(machine.current(), IDLE);
    assert_eq!(transitions.load(Ordering::SeqCst), 2);
}
