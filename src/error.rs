//! Definition-time and execution-time errors.

use crate::core::{Input, StateId};
use thiserror::Error;

/// Errors that can occur while defining a machine.
///
/// Validation runs before any machine is returned, so a failed definition
/// never leaves a partially built machine in the caller's hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DefineError {
    /// Two states in the definition share the same identifier.
    #[error("attempt to define machine with clashing states (index: {0})")]
    ClashingState(StateId),

    /// The definition contained no states at all.
    #[error("machine definition needs at least one state")]
    NoStates,
}

/// Errors that can occur while spinning a machine.
///
/// Both variants leave the cursor at whatever value it held when the failure
/// was detected; transitions already applied earlier in the chain are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpinError {
    /// The cursor refers to a state identifier absent from the table. Either
    /// the definition is wrong, or someone overwrote the cursor manually.
    #[error("machine in impossible state: {0}")]
    ImpossibleState(StateId),

    /// The current state's outcome mapping has no entry for the supplied
    /// input.
    #[error("input invalid in current state (state: {state}, input: {input})")]
    InvalidInput {
        /// State the machine was in when the input was rejected.
        state: StateId,
        /// The rejected input.
        input: Input,
    },
}
