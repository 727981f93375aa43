//! The finite state machine engine.

use super::error::{ListenerError, MachineError};
use super::listeners::CallbackRegistry;
use super::registry::StateRegistry;
use super::table::TransitionTable;
use crate::core::State;
use tracing::{debug, warn};

/// A data-driven finite state machine.
///
/// Owns its registered states, transition table, entry listeners and the
/// current-state cell; nothing is shared between instances.
///
/// Lifecycle: construct empty, [`set_states`](Self::set_states),
/// [`set_transitions`](Self::set_transitions),
/// [`set_initial_state`](Self::set_initial_state), then any number of
/// [`transition_to`](Self::transition_to) calls.
/// [`MachineBuilder`](crate::builder::MachineBuilder) runs the same steps in
/// one chain.
///
/// The machine provides no internal locking. Owners driving one instance
/// from several threads must serialize access themselves.
///
/// # Example
///
/// ```rust
/// use statecraft::FiniteStateMachine;
/// use std::sync::{Arc, Mutex};
///
/// let mut machine = FiniteStateMachine::new();
/// machine.set_states(["pending", "scheduled", "done"]);
/// machine.set_transitions([("pending", vec!["scheduled"]), ("scheduled", vec!["done"])]);
/// machine.set_initial_state("pending").unwrap();
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// machine.on("done", move |state| {
///     sink.lock().unwrap().push(*state);
///     Ok(())
/// });
///
/// machine.transition_to("scheduled").unwrap();
/// machine.transition_to("done").unwrap();
///
/// assert_eq!(*seen.lock().unwrap(), vec!["done"]);
/// ```
#[derive(Debug)]
pub struct FiniteStateMachine<S: State> {
    pub(super) registry: StateRegistry<S>,
    pub(super) table: TransitionTable<S>,
    pub(super) callbacks: CallbackRegistry<S>,
    pub(super) current: Option<S>,
}

impl<S: State> Default for FiniteStateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> FiniteStateMachine<S> {
    /// Create an empty machine with no states, transitions or current state.
    pub fn new() -> Self {
        Self {
            registry: StateRegistry::new(),
            table: TransitionTable::new(),
            callbacks: CallbackRegistry::new(),
            current: None,
        }
    }

    /// Replace the registered state set.
    ///
    /// Existing transitions, listeners and the current state are not
    /// checked against the new set; see [`validate`](Self::validate).
    pub fn set_states<I>(&mut self, states: I)
    where
        I: IntoIterator<Item = S>,
    {
        self.registry.replace(states);
        debug!(count = self.registry.len(), "registered states");
    }

    /// Replace the transition table wholesale.
    pub fn set_transitions<I, T>(&mut self, table: I)
    where
        I: IntoIterator<Item = (S, T)>,
        T: IntoIterator<Item = S>,
    {
        self.table = TransitionTable::from_pairs(table);
    }

    /// Set the current state without consulting the transition table.
    ///
    /// No listeners fire. Fails with [`MachineError::InvalidState`] when
    /// `state` is not registered, leaving any prior current state in place.
    pub fn set_initial_state(&mut self, state: S) -> Result<(), MachineError> {
        if !self.registry.contains(&state) {
            warn!(state = state.name(), "rejected unregistered initial state");
            return Err(MachineError::InvalidState {
                state: state.name().to_string(),
            });
        }

        debug!(state = state.name(), "initial state set");
        self.current = Some(state);
        Ok(())
    }

    /// Register a listener invoked each time `state` is entered.
    ///
    /// Listeners for one state run in registration order. `state` need not
    /// be registered yet.
    pub fn on<F>(&mut self, state: S, listener: F)
    where
        F: FnMut(&S) -> Result<(), ListenerError> + Send + 'static,
    {
        self.callbacks.push(state, Box::new(listener));
    }

    /// Current state, or `None` before the initial state is set.
    pub fn state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Whether the table permits moving from the current state to `to`.
    pub fn can_transition(&self, to: &S) -> bool {
        self.current
            .as_ref()
            .is_some_and(|from| self.table.permits(from, to))
    }

    /// Move to `to` and notify its listeners.
    ///
    /// Fails with [`MachineError::InvalidTransition`] when the edge is not in
    /// the table; the state is then unchanged. Otherwise the state changes
    /// first and listeners run afterwards. A failing listener stops the
    /// remaining ones and surfaces as [`MachineError::ListenerFailed`]; the
    /// new state is kept.
    pub fn transition_to(&mut self, to: S) -> Result<(), MachineError> {
        if !self.can_transition(&to) {
            let from = self
                .current
                .as_ref()
                .map_or("<uninitialized>", |s| s.name())
                .to_string();
            warn!(from = %from, to = to.name(), "rejected transition");
            return Err(MachineError::InvalidTransition {
                from,
                to: to.name().to_string(),
            });
        }

        let previous = self.current.replace(to.clone());
        debug!(
            from = previous.as_ref().map(|s| s.name()),
            to = to.name(),
            "transitioned"
        );

        self.callbacks.notify(&to)
    }

    /// Registered states in registration order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.registry.iter()
    }

    pub fn is_registered(&self, state: &S) -> bool {
        self.registry.contains(state)
    }

    pub fn transitions(&self) -> &TransitionTable<S> {
        &self.table
    }

    /// Destinations permitted from the current state.
    pub fn available_transitions(&self) -> &[S] {
        match &self.current {
            Some(current) => self.table.targets(current),
            None => &[],
        }
    }

    pub fn listener_count(&self, state: &S) -> usize {
        self.callbacks.count(state)
    }

    /// Check if the current state is final (pure).
    pub fn is_final(&self) -> bool {
        self.current.as_ref().is_some_and(State::is_final)
    }

    /// Check if the current state is an error state (pure).
    pub fn is_error(&self) -> bool {
        self.current.as_ref().is_some_and(State::is_error)
    }
}
