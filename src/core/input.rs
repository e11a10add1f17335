//! Inputs and the actions they trigger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An event identifier driving a transition.
///
/// Inputs are opaque, caller-defined integers; the engine only ever compares
/// them against the keys of a state's outcome table. "No further input" is
/// expressed as `Option<Input>`: actions return `None` to terminate a chain,
/// which leaves every integer value free for callers to use.
///
/// # Example
///
/// ```rust
/// use spindle::Input;
///
/// const BUTTON_PRESSED: Input = Input(0);
/// const TIMER_EXPIRED: Input = Input(1);
///
/// assert_ne!(BUTTON_PRESSED, TIMER_EXPIRED);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Input(pub i64);

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A callable run as part of a transition.
///
/// Actions receive the caller's execution context and may mutate it. The
/// return value decides whether the chain continues: `Some(input)` feeds the
/// next input straight back into the machine's resolution loop, `None` stops
/// the chain and returns control to the caller.
///
/// Actions run while the machine's lock is held. They must not call back into
/// [`spin`](crate::machine::Machine::spin) on the same machine, which would
/// deadlock.
pub type Action<C> = Arc<dyn Fn(&mut C) -> Option<Input> + Send + Sync>;

/// An action that leaves the context untouched and terminates the chain.
///
/// Useful for outcomes that are pure state changes.
///
/// # Example
///
/// ```rust
/// use spindle::no_action;
///
/// let action = no_action::<u32>();
/// let mut ctx = 7;
/// assert_eq!(action(&mut ctx), None);
/// assert_eq!(ctx, 7);
/// ```
pub fn no_action<C>() -> Action<C> {
    Arc::new(|_| None)
}
