//! The machine: a validated transition table plus a guarded cursor.

use crate::core::{Input, State, StateId};
use crate::error::{DefineError, SpinError};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// A finite state machine.
///
/// A machine owns an immutable transition table built by [`define`] and a
/// single mutable cursor naming the current state. [`spin`] is the only
/// operation that moves the cursor; it is safe to call from any number of
/// threads at once.
///
/// `C` is the caller's execution context, passed through untouched to the
/// actions of every resolved outcome.
///
/// # Example
///
/// ```rust
/// use spindle::{Input, Machine, State, StateId};
///
/// const CLOSED: StateId = StateId(0);
/// const OPEN: StateId = StateId(1);
/// const TOGGLE: Input = Input(0);
///
/// let machine = Machine::define(vec![
///     State::new(CLOSED).goes_to(TOGGLE, OPEN),
///     State::new(OPEN).goes_to(TOGGLE, CLOSED),
/// ])
/// .unwrap();
///
/// machine.spin(&mut (), TOGGLE).unwrap();
/// assert_eq!(machine.current(), OPEN);
/// ```
///
/// [`define`]: Machine::define
/// [`spin`]: Machine::spin
pub struct Machine<C> {
    states: HashMap<StateId, State<C>>,
    cursor: Mutex<StateId>,
    state_names: HashMap<StateId, String>,
    input_names: HashMap<Input, String>,
}

impl<C> Machine<C> {
    /// Define a machine from a list of states.
    ///
    /// The first state in the list becomes the initial current state; list
    /// order has no other meaning. Fails with
    /// [`DefineError::ClashingState`] if two states share an identifier and
    /// [`DefineError::NoStates`] if the list is empty.
    pub fn define(states: Vec<State<C>>) -> Result<Self, DefineError> {
        let initial = states.first().ok_or(DefineError::NoStates)?.index;

        let mut table = HashMap::with_capacity(states.len());
        for state in states {
            if table.contains_key(&state.index) {
                return Err(DefineError::ClashingState(state.index));
            }
            table.insert(state.index, state);
        }

        Ok(Self {
            states: table,
            cursor: Mutex::new(initial),
            state_names: HashMap::new(),
            input_names: HashMap::new(),
        })
    }

    /// Spin the machine one time.
    ///
    /// Resolves the outcome for `input` in the current state, runs its
    /// action, and moves the cursor to the outcome's target. If the action
    /// returns `Some(next)`, resolution repeats with `next` in the new
    /// current state; the chain ends when an action returns `None`. However
    /// many internal transitions that takes, they happen atomically with
    /// respect to other callers: the machine's lock is held for the whole
    /// chain.
    ///
    /// On error the cursor stays wherever the chain had moved it, and `ctx`
    /// reflects every action that ran before the failure. Those transitions
    /// genuinely occurred; nothing is rolled back.
    ///
    /// A definition whose actions feed each other inputs forever never
    /// returns and never releases the lock. Bounding chains is the caller's
    /// responsibility.
    pub fn spin(&self, ctx: &mut C, input: Input) -> Result<(), SpinError> {
        let mut cursor = self.lock_cursor();

        trace!(input = %input, name = self.input_name(input), "spin");

        let mut pending = Some(input);
        while let Some(i) = pending {
            trace!(input = %i, name = self.input_name(i), "process input");

            let Some(state) = self.states.get(&*cursor) else {
                trace!(state = %*cursor, "impossible state");
                return Err(SpinError::ImpossibleState(*cursor));
            };

            let Some(outcome) = state.outcomes.get(&i) else {
                trace!(
                    input = %i,
                    state = %*cursor,
                    name = self.state_name(*cursor),
                    "invalid input in current state"
                );
                return Err(SpinError::InvalidInput {
                    state: *cursor,
                    input: i,
                });
            };

            pending = (outcome.action)(ctx);
            *cursor = outcome.target;
            trace!(
                state = %*cursor,
                name = self.state_name(*cursor),
                next = ?pending,
                "set current state"
            );
        }

        Ok(())
    }

    /// The current state identifier.
    pub fn current(&self) -> StateId {
        *self.lock_cursor()
    }

    /// Overwrite the cursor without consulting the table.
    ///
    /// The identifier is not validated; pointing the cursor at a state that
    /// was never defined makes the next [`spin`](Machine::spin) fail with
    /// [`SpinError::ImpossibleState`].
    pub fn set_current(&self, state: StateId) {
        *self.lock_cursor() = state;
    }

    /// Attach display names for states and inputs, replacing any attached
    /// earlier.
    ///
    /// Names are used only to render trace events; they never affect
    /// control flow. Trace output goes to whatever `tracing` subscriber the
    /// host installed, so with no subscriber diagnostics are suppressed
    /// entirely. Identifiers without a name render as an empty label.
    pub fn attach_diagnostics(
        &mut self,
        state_names: HashMap<StateId, String>,
        input_names: HashMap<Input, String>,
    ) {
        self.state_names = state_names;
        self.input_names = input_names;
    }

    // A panicking action poisons the mutex, but the cursor it guards is a
    // plain identifier and always valid, so recover the guard.
    fn lock_cursor(&self) -> MutexGuard<'_, StateId> {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_name(&self, state: StateId) -> &str {
        self.state_names.get(&state).map_or("", String::as_str)
    }

    fn input_name(&self, input: Input) -> &str {
        self.input_names.get(&input).map_or("", String::as_str)
    }
}

impl<C> fmt::Debug for Machine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("states", &self.states)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
