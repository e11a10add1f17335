//! Core data model for machine definitions.
//!
//! This module contains the pure data the engine executes:
//! - Opaque identifiers via [`StateId`] and [`Input`]
//! - Transition actions via the [`Action`] callable type
//! - Per-state transition tables via [`State`] and [`Outcome`]
//!
//! Nothing here has behavior of its own; the [`Machine`](crate::machine::Machine)
//! interprets these values.

mod input;
mod state;

pub use input::{no_action, Action, Input};
pub use state::{Outcome, State, StateId};
