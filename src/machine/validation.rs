//! Opt-in configuration validation.
//!
//! The engine's setters deliberately accept inconsistent configurations:
//! states may be replaced after transitions were set, and listeners may be
//! registered for states that do not exist yet. [`FiniteStateMachine::validate`]
//! reports every such inconsistency in one pass using Stillwater's
//! `Validation`, instead of stopping at the first.

use super::machine::FiniteStateMachine;
use crate::core::State;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single inconsistency in a machine's configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("Transition source '{state}' is not a registered state")]
    UnknownSource { state: String },

    #[error("Transition '{from}' -> '{to}' targets an unregistered state")]
    UnknownTarget { from: String, to: String },

    #[error("{count} listener(s) registered for unregistered state '{state}'")]
    UnregisteredListener { state: String, count: usize },

    #[error("Current state '{state}' is no longer registered")]
    CurrentStateUnregistered { state: String },
}

impl<S: State> FiniteStateMachine<S> {
    /// Check the configuration, accumulating ALL issues.
    ///
    /// Returns `Validation::Success(())` for a consistent machine and
    /// `Validation::Failure` with every issue otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statecraft::FiniteStateMachine;
    /// use stillwater::validation::Validation;
    ///
    /// let mut machine = FiniteStateMachine::new();
    /// machine.set_states(["a", "b"]);
    /// machine.set_transitions([("a", vec!["b", "c"]), ("z", vec!["a"])]);
    ///
    /// match machine.validate() {
    ///     Validation::Failure(issues) => assert_eq!(issues.len(), 2),
    ///     Validation::Success(_) => unreachable!(),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

        for (from, targets) in self.table.iter() {
            if !self.registry.contains(from) {
                checks.push(Validation::fail(ConfigIssue::UnknownSource {
                    state: from.name().to_string(),
                }));
            }
            for to in targets.iter().filter(|to| !self.registry.contains(to)) {
                checks.push(Validation::fail(ConfigIssue::UnknownTarget {
                    from: from.name().to_string(),
                    to: to.name().to_string(),
                }));
            }
        }

        for state in self.callbacks.states() {
            if !self.registry.contains(state) {
                checks.push(Validation::fail(ConfigIssue::UnregisteredListener {
                    state: state.name().to_string(),
                    count: self.callbacks.count(state),
                }));
            }
        }

        if let Some(current) = &self.current {
            if !self.registry.contains(current) {
                checks.push(Validation::fail(ConfigIssue::CurrentStateUnregistered {
                    state: current.name().to_string(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
