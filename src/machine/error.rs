//! Machine error types.

use thiserror::Error;

/// Error a listener may return. Any `std::error::Error` boxes into it, and
/// so does a plain `&str` or `String`.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by [`FiniteStateMachine`](super::FiniteStateMachine) operations.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The state is not a member of the registered set.
    #[error("State '{state}' is not registered")]
    InvalidState { state: String },

    /// The transition table has no edge from the current state to `to`.
    /// The current state is unchanged.
    #[error("No transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    /// A listener failed after the machine had already entered `state`.
    /// Listeners after `index` were not invoked.
    #[error("Listener #{index} for state '{state}' failed: {source}")]
    ListenerFailed {
        state: String,
        index: usize,
        #[source]
        source: ListenerError,
    },
}

impl MachineError {
    /// True when the machine's state changed despite the error.
    pub fn state_changed(&self) -> bool {
        matches!(self, Self::ListenerFailed { .. })
    }
}
