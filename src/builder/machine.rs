//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::{FiniteStateMachine, Listener, ListenerError};
use stillwater::validation::Validation;

/// Builder for constructing state machines with a fluent API.
///
/// Runs the machine lifecycle in order: states, transitions, initial state,
/// then listeners.
///
/// # Example
///
/// ```
/// use statecraft::MachineBuilder;
///
/// let machine = MachineBuilder::new()
///     .states(["red", "green", "yellow"])
///     .transition("red", ["green"])
///     .transition("green", ["yellow"])
///     .transition("yellow", ["red"])
///     .initial("red")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), Some(&"red"));
/// assert!(machine.can_transition(&"green"));
/// ```
pub struct MachineBuilder<S: State> {
    states: Vec<S>,
    transitions: Vec<(S, Vec<S>)>,
    initial: Option<S>,
    listeners: Vec<(S, Listener<S>)>,
}

impl<S: State + 'static> MachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
            listeners: Vec::new(),
        }
    }

    /// Register states (required). May be called repeatedly.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.states.extend(states);
        self
    }

    /// Permit moving from `from` to each of `to`.
    pub fn transition<T>(mut self, from: S, to: T) -> Self
    where
        T: IntoIterator<Item = S>,
    {
        self.transitions.push((from, to.into_iter().collect()));
        self
    }

    /// Add multiple `(source, destinations)` entries at once.
    pub fn transitions<I, T>(mut self, table: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        T: IntoIterator<Item = S>,
    {
        self.transitions.extend(
            table
                .into_iter()
                .map(|(from, to)| (from, to.into_iter().collect())),
        );
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register an entry listener for `state`.
    pub fn on<F>(mut self, state: S, listener: F) -> Self
    where
        F: FnMut(&S) -> Result<(), ListenerError> + Send + 'static,
    {
        self.listeners.push((state, Box::new(listener)));
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or the initial state
    /// is not registered.
    pub fn build(self) -> Result<FiniteStateMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut machine = FiniteStateMachine::new();
        machine.set_states(self.states);
        machine.set_transitions(self.transitions);
        machine.set_initial_state(initial)?;
        for (state, listener) in self.listeners {
            machine.on(state, listener);
        }

        Ok(machine)
    }

    /// Build the state machine and reject any configuration inconsistency.
    ///
    /// Like [`build`](Self::build), but also fails with
    /// [`BuildError::InvalidConfiguration`] listing every issue
    /// [`FiniteStateMachine::validate`] finds.
    pub fn build_validated(self) -> Result<FiniteStateMachine<S>, BuildError> {
        let machine = self.build()?;

        match machine.validate() {
            Validation::Success(_) => Ok(machine),
            Validation::Failure(issues) => Err(BuildError::InvalidConfiguration {
                issues: issues.iter().cloned().collect(),
            }),
        }
    }
}

impl<S: State + 'static> Default for MachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
