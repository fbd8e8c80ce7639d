//! Minimal MVI (Model-View-Intent) contract.
//!
//! State is an immutable snapshot, intents are the user action surface, and
//! the reducer is the single place transitions happen. The render layer is a
//! pure projection of the current state and keeps no state of its own.

/// UI state snapshot: self-contained, cloneable, comparable for change
/// detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or navigation event, consumed by a reducer.
pub trait Intent: Send + 'static {}

/// Pure transition function `(State, Intent) -> State`. No side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
