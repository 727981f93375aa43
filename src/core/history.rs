//! State entry history tracking.
//!
//! Provides immutable tracking of the states a machine entered over time.
//! The machine itself keeps no history; a [`HistoryRecorder`] observes it
//! through entry listeners like any other collaborator.

use super::state::State;
use crate::machine::{FiniteStateMachine, ListenerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Record of a single state entry.
///
/// # Example
///
/// ```rust
/// use statecraft::core::StateEntry;
/// use chrono::Utc;
///
/// let entry = StateEntry {
///     state: "checking",
///     entered_at: Utc::now(),
/// };
/// assert_eq!(entry.state, "checking");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateEntry<S> {
    /// The state that was entered
    pub state: S,
    /// When the state was entered
    pub entered_at: DateTime<Utc>,
}

/// Ordered history of state entries.
///
/// History is immutable - the `record` method returns a new history
/// with the entry added.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{StateEntry, StateHistory};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateEntry { state: "unknown", entered_at: Utc::now() })
///     .record(StateEntry { state: "checking", entered_at: Utc::now() });
///
/// assert_eq!(history.get_path(), vec![&"unknown", &"checking"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct StateHistory<S> {
    entries: Vec<StateEntry<S>>,
}

impl<S: Clone> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// The existing history is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statecraft::core::{StateEntry, StateHistory};
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let updated = history.record(StateEntry { state: 1u8, entered_at: Utc::now() });
    ///
    /// assert_eq!(updated.entries().len(), 1);
    /// assert_eq!(history.entries().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, entry: StateEntry<S>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Get the path of states traversed, oldest first.
    pub fn get_path(&self) -> Vec<&S> {
        self.entries.iter().map(|entry| &entry.state).collect()
    }

    /// Calculate total duration from the first to the last entry.
    ///
    /// Returns `None` if there are no entries.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.entered_at.signed_duration_since(first.entered_at);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all entries in order.
    pub fn entries(&self) -> &[StateEntry<S>] {
        &self.entries
    }

    /// Most recently entered state, if any.
    pub fn last(&self) -> Option<&S> {
        self.entries.last().map(|entry| &entry.state)
    }
}

/// Shared handle that records every state a machine enters.
///
/// Cloning the recorder clones the handle, not the history; every clone
/// observes the same entries.
///
/// # Example
///
/// ```rust
/// use statecraft::{FiniteStateMachine, HistoryRecorder};
///
/// let mut machine = FiniteStateMachine::new();
/// machine.set_states(["draft", "review", "published"]);
/// machine.set_transitions([("draft", vec!["review"]), ("review", vec!["published"])]);
/// machine.set_initial_state("draft").unwrap();
///
/// let recorder = HistoryRecorder::new();
/// recorder.attach(&mut machine);
///
/// machine.transition_to("review").unwrap();
/// machine.transition_to("published").unwrap();
///
/// let history = recorder.snapshot();
/// assert_eq!(history.get_path(), vec![&"draft", &"review", &"published"]);
/// ```
#[derive(Clone, Debug)]
pub struct HistoryRecorder<S> {
    shared: Arc<Mutex<StateHistory<S>>>,
}

impl<S: State + 'static> Default for HistoryRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State + 'static> HistoryRecorder<S> {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(StateHistory::new())),
        }
    }

    /// Start recording entries of `machine`.
    ///
    /// Seeds the history with the machine's current state, then registers a
    /// listener on every state the machine can enter at the time of the call:
    /// the registered states plus every transition destination, registered
    /// or not. States and edges added to the machine later are not observed.
    pub fn attach(&self, machine: &mut FiniteStateMachine<S>) {
        if let Some(current) = machine.state().cloned() {
            self.push(current);
        }

        let mut observed: HashSet<S> = HashSet::new();
        let targets = machine
            .transitions()
            .iter()
            .flat_map(|(_, targets)| targets.iter());
        let states: Vec<S> = machine
            .states()
            .chain(targets)
            .filter(|state| observed.insert((*state).clone()))
            .cloned()
            .collect();
        for state in states {
            let shared = Arc::clone(&self.shared);
            machine.on(state, move |entered: &S| {
                let mut history = shared
                    .lock()
                    .map_err(|_| ListenerError::from("state history lock poisoned"))?;
                *history = history.record(StateEntry {
                    state: entered.clone(),
                    entered_at: Utc::now(),
                });
                Ok(())
            });
        }
    }

    /// Copy of the history recorded so far.
    pub fn snapshot(&self) -> StateHistory<S> {
        match self.shared.lock() {
            Ok(history) => history.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn push(&self, state: S) {
        let entry = StateEntry {
            state,
            entered_at: Utc::now(),
        };
        match self.shared.lock() {
            Ok(mut history) => *history = history.record(entry),
            Err(poisoned) => {
                let mut history = poisoned.into_inner();
                *history = history.record(entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(state: &'static str) -> StateEntry<&'static str> {
        StateEntry {
            state,
            entered_at: Utc::now(),
        }
    }

    fn draft_machine() -> FiniteStateMachine<&'static str> {
        let mut machine = FiniteStateMachine::new();
        machine.set_states(["draft", "review", "published"]);
        machine.set_transitions([
            ("draft", vec!["review"]),
            ("review", vec!["draft", "published"]),
        ]);
        machine.set_initial_state("draft").unwrap();
        machine
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<&str> = StateHistory::new();
        assert!(history.entries().is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(entry("draft"));

        assert_eq!(history.entries().len(), 0);
        assert_eq!(new_history.entries().len(), 1);
        assert_eq!(new_history.last(), Some(&"draft"));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(entry("draft"));

        std::thread::sleep(Duration::from_millis(10));

        let history = history.record(entry("review"));
        let duration = history.duration().unwrap();
        assert!(duration >= Duration::from_millis(10));
    }

    #[test]
    fn single_entry_has_duration_zero() {
        let history = StateHistory::new().record(entry("draft"));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new()
            .record(StateEntry {
                state: "draft".to_string(),
                entered_at: Utc::now(),
            })
            .record(StateEntry {
                state: "review".to_string(),
                entered_at: Utc::now(),
            });

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.entries(), history.entries());
    }

    #[test]
    fn recorder_seeds_current_state_and_follows_transitions() {
        let mut machine = draft_machine();
        let recorder = HistoryRecorder::new();
        recorder.attach(&mut machine);

        machine.transition_to("review").unwrap();
        machine.transition_to("draft").unwrap();
        machine.transition_to("review").unwrap();

        let history = recorder.snapshot();
        assert_eq!(
            history.get_path(),
            vec![&"draft", &"review", &"draft", &"review"]
        );
    }

    #[test]
    fn rejected_transitions_are_not_recorded() {
        let mut machine = draft_machine();
        let recorder = HistoryRecorder::new();
        recorder.attach(&mut machine);

        assert!(machine.transition_to("published").is_err());

        assert_eq!(recorder.snapshot().get_path(), vec![&"draft"]);
    }

    #[test]
    fn recorder_clones_share_history() {
        let mut machine = draft_machine();
        let recorder = HistoryRecorder::new();
        let observer = recorder.clone();
        recorder.attach(&mut machine);

        machine.transition_to("review").unwrap();

        assert_eq!(observer.snapshot().last(), Some(&"review"));
    }

    #[test]
    fn recorder_follows_edges_into_unregistered_states() {
        let mut machine = draft_machine();
        machine.set_transitions([("draft", vec!["archived"]), ("archived", vec!["draft"])]);

        let recorder = HistoryRecorder::new();
        recorder.attach(&mut machine);

        machine.transition_to("archived").unwrap();
        machine.transition_to("draft").unwrap();

        assert!(!machine.is_registered(&"archived"));
        assert_eq!(
            recorder.snapshot().get_path(),
            vec![&"draft", &"archived", &"draft"]
        );
    }

    #[test]
    fn recorder_listens_once_per_state() {
        let mut machine = draft_machine();
        let recorder = HistoryRecorder::new();
        recorder.attach(&mut machine);

        assert_eq!(machine.listener_count(&"review"), 1);
        assert_eq!(machine.listener_count(&"draft"), 1);

        machine.transition_to("review").unwrap();
        assert_eq!(recorder.snapshot().get_path(), vec![&"draft", &"review"]);
    }

    #[test]
    fn recorder_on_uninitialized_machine_starts_empty() {
        let mut machine: FiniteStateMachine<&'static str> = FiniteStateMachine::new();
        machine.set_states(["draft"]);

        let recorder = HistoryRecorder::new();
        recorder.attach(&mut machine);

        assert!(recorder.snapshot().entries().is_empty());
    }
}
