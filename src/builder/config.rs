//! Serializable machine configuration.
//!
//! Lets an owner keep its states and transition table as data, for example
//! in a JSON document shipped next to the code that drives the machine.

use crate::builder::error::ConfigError;
use crate::core::State;
use crate::machine::{FiniteStateMachine, MachineError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// States, transition table and initial state of a machine.
///
/// Listeners are code and are not part of the configuration; register them
/// on the machine returned by [`into_machine`](Self::into_machine).
///
/// # Example
///
/// ```
/// use statecraft::MachineConfig;
///
/// let config: MachineConfig<String> = MachineConfig::from_json(r#"{
///     "states": ["pending", "scheduled", "done"],
///     "transitions": {"pending": ["scheduled"], "scheduled": ["done"]},
///     "initial": "pending"
/// }"#).unwrap();
///
/// let machine = config.into_machine().unwrap();
/// assert_eq!(machine.state().map(String::as_str), Some("pending"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct MachineConfig<S: State> {
    pub states: Vec<S>,
    #[serde(default)]
    pub transitions: HashMap<S, Vec<S>>,
    pub initial: S,
}

impl<S: State + DeserializeOwned> MachineConfig<S> {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<S: State> MachineConfig<S> {
    /// Apply the configuration to a fresh machine.
    ///
    /// Fails with [`MachineError::InvalidState`] when `initial` is not one of
    /// `states`.
    pub fn into_machine(self) -> Result<FiniteStateMachine<S>, MachineError> {
        let mut machine = FiniteStateMachine::new();
        machine.set_states(self.states);
        machine.set_transitions(self.transitions);
        machine.set_initial_state(self.initial)?;
        Ok(machine)
    }

    /// Capture the configuration of `machine`.
    ///
    /// Returns `None` before the machine has a current state. The captured
    /// `initial` is the machine's current state, so rebuilding from the
    /// result resumes where the machine stands.
    pub fn capture(machine: &FiniteStateMachine<S>) -> Option<Self> {
        let initial = machine.state()?.clone();
        let transitions = machine
            .transitions()
            .iter()
            .map(|(from, targets)| (from.clone(), targets.to_vec()))
            .collect();

        Some(Self {
            states: machine.states().cloned().collect(),
            transitions,
            initial,
        })
    }
}

/// Parse a JSON configuration and build the machine it describes.
pub fn machine_from_json<S>(json: &str) -> Result<FiniteStateMachine<S>, ConfigError>
where
    S: State + DeserializeOwned,
{
    Ok(MachineConfig::from_json(json)?.into_machine()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Door {
            Open => "open",
            Closed => "closed",
            Locked => "locked",
        }
    }

    #[test]
    fn parses_enum_states_by_token() {
        let config: MachineConfig<Door> = MachineConfig::from_json(
            r#"{
                "states": ["open", "closed", "locked"],
                "transitions": {"open": ["closed"], "closed": ["open", "locked"], "locked": ["closed"]},
                "initial": "closed"
            }"#,
        )
        .unwrap();

        let mut machine = config.into_machine().unwrap();
        assert_eq!(machine.state(), Some(&Door::Closed));
        machine.transition_to(Door::Locked).unwrap();
        assert!(machine.transition_to(Door::Open).is_err());
    }

    #[test]
    fn transitions_default_to_empty() {
        let machine: FiniteStateMachine<String> =
            machine_from_json(r#"{"states": ["only"], "initial": "only"}"#).unwrap();

        assert!(machine.transitions().is_empty());
        assert!(machine.available_transitions().is_empty());
    }

    #[test]
    fn unregistered_initial_state_is_rejected() {
        let result: Result<FiniteStateMachine<String>, _> =
            machine_from_json(r#"{"states": ["a"], "initial": "b"}"#);

        assert!(matches!(
            result,
            Err(ConfigError::Machine(MachineError::InvalidState { .. }))
        ));
    }

    #[test]
    fn unknown_state_token_is_a_parse_error() {
        let result = MachineConfig::<Door>::from_json(r#"{"states": ["ajar"], "initial": "ajar"}"#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn capture_resumes_at_current_state() {
        let mut machine = MachineConfig {
            states: vec![Door::Open, Door::Closed, Door::Locked],
            transitions: HashMap::from([
                (Door::Open, vec![Door::Closed]),
                (Door::Closed, vec![Door::Locked]),
            ]),
            initial: Door::Open,
        }
        .into_machine()
        .unwrap();
        machine.transition_to(Door::Closed).unwrap();

        let captured = MachineConfig::capture(&machine).unwrap();
        assert_eq!(captured.initial, Door::Closed);

        let json = serde_json::to_string(&captured).unwrap();
        let resumed: FiniteStateMachine<Door> = machine_from_json(&json).unwrap();
        assert_eq!(resumed.state(), Some(&Door::Closed));
        assert!(resumed.can_transition(&Door::Locked));
    }

    #[test]
    fn capture_requires_a_current_state() {
        let machine: FiniteStateMachine<Door> = FiniteStateMachine::new();
        assert!(MachineConfig::capture(&machine).is_none());
    }
}
