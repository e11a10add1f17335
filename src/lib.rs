//! Spindle: a general-purpose finite state machine engine.
//!
//! Spindle lets a caller declare a set of states, the inputs each state
//! accepts, and the transitions those inputs cause, then drive the machine
//! forward safely and deterministically from any number of threads.
//!
//! # Core Concepts
//!
//! - **State**: an identified node holding its own input-to-outcome mapping
//! - **Input**: an event identifier driving a transition
//! - **Outcome**: the (target state, action) pair an input selects
//! - **Action**: a callable run during a transition; it may return a
//!   follow-up input, so one external event can cascade through a chain of
//!   internal transitions within a single [`Machine::spin`] call
//!
//! Definitions are validated up front: [`Machine::define`] rejects clashing
//! state identifiers before any machine exists. At run time, an input a
//! state does not accept or a cursor pointing at an undefined state comes
//! back as a structured [`SpinError`], never a panic.
//!
//! # Example
//!
//! ```rust
//! use spindle::{Input, Machine, State, StateId};
//! use std::sync::Arc;
//!
//! const DISARMED: StateId = StateId(0);
//! const ARMED: StateId = StateId(1);
//! const FIRING: StateId = StateId(2);
//!
//! const ARM: Input = Input(0);
//! const TRIGGER: Input = Input(1);
//! const SETTLE: Input = Input(2);
//!
//! #[derive(Default)]
//! struct Counters {
//!     shots: u32,
//! }
//!
//! let machine = Machine::define(vec![
//!     State::new(DISARMED).goes_to(ARM, ARMED),
//!     State::new(ARMED).on(
//!         TRIGGER,
//!         FIRING,
//!         // Fire, then immediately chain into settling back down.
//!         Arc::new(|ctx: &mut Counters| {
//!             ctx.shots += 1;
//!             Some(SETTLE)
//!         }),
//!     ),
//!     State::new(FIRING).goes_to(SETTLE, DISARMED),
//! ])
//! .unwrap();
//!
//! let mut ctx = Counters::default();
//! machine.spin(&mut ctx, ARM).unwrap();
//! machine.spin(&mut ctx, TRIGGER).unwrap();
//!
//! // TRIGGER cascaded through FIRING and settled in one call.
//! assert_eq!(machine.current(), DISARMED);
//! assert_eq!(ctx.shots, 1);
//! ```
//!
//! # Diagnostics
//!
//! The engine emits `tracing` events at `TRACE` level as it resolves each
//! transition. Hosts that want them install a subscriber; with none
//! installed, diagnostics cost nothing and print nothing. Human-readable
//! state and input names can be attached per machine with
//! [`Machine::attach_diagnostics`].

pub mod core;
pub mod error;
pub mod machine;

mod macros;

pub use crate::core::{no_action, Action, Input, Outcome, State, StateId};
pub use crate::error::{DefineError, SpinError};
pub use crate::machine::Machine;
