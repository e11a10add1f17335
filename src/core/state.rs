//! States and the outcomes their inputs select.

use crate::core::input::{no_action, Action, Input};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identifies one state within a machine's transition table.
///
/// Identifiers are caller-defined integers, unique within a single machine.
/// Uniqueness is checked when the machine is defined, not here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StateId(pub i64);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The result of accepting an input: which state to move to and what to run
/// on the way there.
pub struct Outcome<C> {
    /// State the machine moves to when this outcome is selected.
    pub target: StateId,
    /// Action invoked with the caller's context during the transition.
    pub action: Action<C>,
}

impl<C> Outcome<C> {
    /// Create an outcome that moves to `target` and runs `action`.
    pub fn new(target: StateId, action: Action<C>) -> Self {
        Self { target, action }
    }

    /// Create an outcome that is a pure state change: move to `target`
    /// running [`no_action`].
    pub fn to(target: StateId) -> Self {
        Self {
            target,
            action: no_action(),
        }
    }
}

impl<C> Clone for Outcome<C> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            action: Arc::clone(&self.action),
        }
    }
}

impl<C> fmt::Debug for Outcome<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outcome")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// One possible state of a machine: an identifier plus the mapping from every
/// input this state accepts to the outcome it causes.
///
/// Inputs absent from the mapping are rejected at spin time with
/// [`SpinError::InvalidInput`](crate::error::SpinError::InvalidInput).
///
/// # Example
///
/// ```rust
/// use spindle::{Input, State, StateId};
///
/// const IDLE: StateId = StateId(0);
/// const BUSY: StateId = StateId(1);
/// const START: Input = Input(0);
/// const DONE: Input = Input(1);
///
/// let idle: State<()> = State::new(IDLE)
///     .goes_to(START, BUSY)
///     .goes_to(DONE, IDLE);
///
/// assert_eq!(idle.index, IDLE);
/// assert_eq!(idle.outcomes.len(), 2);
/// ```
pub struct State<C> {
    /// Identifier unique within one machine.
    pub index: StateId,
    /// Every input this state accepts, keyed uniquely; order is irrelevant.
    pub outcomes: HashMap<Input, Outcome<C>>,
}

impl<C> State<C> {
    /// Create a state with an empty outcome mapping.
    pub fn new(index: StateId) -> Self {
        Self {
            index,
            outcomes: HashMap::new(),
        }
    }

    /// Accept `input`, moving to `target` and running `action`.
    ///
    /// Registering the same input twice replaces the earlier outcome.
    pub fn on(mut self, input: Input, target: StateId, action: Action<C>) -> Self {
        self.outcomes.insert(input, Outcome::new(target, action));
        self
    }

    /// Accept `input` as a pure state change to `target`.
    pub fn goes_to(self, input: Input, target: StateId) -> Self {
        self.on(input, target, no_action())
    }

    /// Use a pre-built outcome mapping, replacing any outcomes registered so
    /// far. Pairs with the [`outcomes!`](crate::outcomes) macro.
    pub fn with_outcomes(mut self, outcomes: HashMap<Input, Outcome<C>>) -> Self {
        self.outcomes = outcomes;
        self
    }
}

impl<C> Clone for State<C> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            outcomes: self.outcomes.clone(),
        }
    }
}

impl<C> fmt::Debug for State<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("index", &self.index)
            .field("outcomes", &self.outcomes)
            .finish()
    }
}
