//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// The reducer is the only place screen transitions happen, and it must
/// be a pure function: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
