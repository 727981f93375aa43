//! Per-state entry listeners.

use super::error::{ListenerError, MachineError};
use crate::core::State;
use std::collections::HashMap;
use tracing::trace;

/// Callback invoked with the destination state each time it is entered.
pub type Listener<S> = Box<dyn FnMut(&S) -> Result<(), ListenerError> + Send>;

/// Ordered listener sequences keyed by state.
///
/// States are not checked against any registry, so collaborators may
/// subscribe to states that are defined later.
pub struct CallbackRegistry<S: State> {
    listeners: HashMap<S, Vec<Listener<S>>>,
}

impl<S: State> Default for CallbackRegistry<S> {
    fn default() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }
}

impl<S: State> CallbackRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener to the sequence for `state`.
    pub fn push(&mut self, state: S, listener: Listener<S>) {
        self.listeners.entry(state).or_default().push(listener);
    }

    pub fn count(&self, state: &S) -> usize {
        self.listeners.get(state).map_or(0, Vec::len)
    }

    /// States that have at least one listener.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.listeners
            .iter()
            .filter(|(_, listeners)| !listeners.is_empty())
            .map(|(state, _)| state)
    }

    /// Invoke every listener for `state` in registration order.
    ///
    /// Stops at the first failure and returns it; later listeners are skipped.
    pub fn notify(&mut self, state: &S) -> Result<(), MachineError> {
        let Some(listeners) = self.listeners.get_mut(state) else {
            return Ok(());
        };

        for (index, listener) in listeners.iter_mut().enumerate() {
            trace!(state = state.name(), index, "invoking entry listener");
            listener(state).map_err(|source| MachineError::ListenerFailed {
                state: state.name().to_string(),
                index,
                source,
            })?;
        }

        Ok(())
    }
}

impl<S: State> std::fmt::Debug for CallbackRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (state, listeners) in &self.listeners {
            map.entry(state, &listeners.len());
        }
        map.finish()
    }
}
