//! Macros for declaring outcome tables.

/// Build an outcome mapping without `HashMap::insert` boilerplate.
///
/// Each entry reads `input => (target, action)`. Pairs with
/// [`State::with_outcomes`](crate::core::State::with_outcomes).
///
/// # Example
///
/// ```rust
/// use spindle::{no_action, outcomes, Input, State, StateId};
///
/// const LOCKED: StateId = StateId(0);
/// const UNLOCKED: StateId = StateId(1);
/// const COIN: Input = Input(0);
/// const PUSH: Input = Input(1);
///
/// let locked: State<()> = State::new(LOCKED).with_outcomes(outcomes! {
///     COIN => (UNLOCKED, no_action()),
///     PUSH => (LOCKED, no_action()),
/// });
///
/// assert_eq!(locked.outcomes.len(), 2);
/// ```
#[macro_export]
macro_rules! outcomes {
    (
        $($input:expr => ($target:expr, $action:expr)),* $(,)?
    ) => {
        ::std::collections::HashMap::from([
            $(($input, $crate::core::Outcome::new($target, $action))),*
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{no_action, Input, State, StateId};
    use std::sync::Arc;

    const STATE_A: StateId = StateId(0);
    const STATE_B: StateId = StateId(1);
    const INPUT_X: Input = Input(0);
    const INPUT_Y: Input = Input(1);

    #[test]
    fn macro_matches_the_builder() {
        let from_macro: State<()> = State::new(STATE_A).with_outcomes(outcomes! {
            INPUT_X => (STATE_B, no_action()),
            INPUT_Y => (STATE_A, no_action()),
        });
        let from_builder: State<()> = State::new(STATE_A)
            .goes_to(INPUT_X, STATE_B)
            .goes_to(INPUT_Y, STATE_A);

        assert_eq!(from_macro.outcomes.len(), from_builder.outcomes.len());
        for (input, outcome) in &from_macro.outcomes {
            assert_eq!(outcome.target, from_builder.outcomes[input].target);
        }
    }

    #[test]
    fn macro_accepts_closures() {
        let state: State<u32> = State::new(STATE_A).with_outcomes(outcomes! {
            INPUT_X => (STATE_B, Arc::new(|ctx: &mut u32| { *ctx += 1; None })),
        });

        let mut ctx = 0;
        assert_eq!((state.outcomes[&INPUT_X].action)(&mut ctx), None);
        assert_eq!(ctx, 1);
    }

    #[test]
    fn empty_mapping_is_allowed() {
        let state: State<()> = State::new(STATE_A).with_outcomes(outcomes! {});
        assert!(state.outcomes.is_empty());
    }
}
