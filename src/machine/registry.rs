//! Registered state set of a machine.

use crate::core::State;
use std::collections::HashSet;

/// The set of valid state identifiers for one machine instance.
///
/// Keeps registration order for iteration. Duplicate identifiers collapse
/// into their first occurrence.
#[derive(Clone, Debug)]
pub struct StateRegistry<S: State> {
    order: Vec<S>,
    members: HashSet<S>,
}

impl<S: State> Default for StateRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateRegistry<S> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Replace the registered set.
    pub fn replace<I>(&mut self, states: I)
    where
        I: IntoIterator<Item = S>,
    {
        self.order.clear();
        self.members.clear();
        for state in states {
            if self.members.insert(state.clone()) {
                self.order.push(state);
            }
        }
    }

    pub fn contains(&self, state: &S) -> bool {
        self.members.contains(state)
    }

    /// Registered states in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: State> FromIterator<S> for StateRegistry<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.replace(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_discards_previous_states() {
        let mut registry: StateRegistry<&str> = ["a", "b"].into_iter().collect();
        registry.replace(["c"]);

        assert!(!registry.contains(&"a"));
        assert!(registry.contains(&"c"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicates_collapse_in_first_seen_order() {
        let registry: StateRegistry<&str> = ["b", "a", "b", "c", "a"].into_iter().collect();

        let order: Vec<_> = registry.iter().copied().collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_registry_contains_nothing() {
        let registry: StateRegistry<String> = StateRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains(&"anything".to_string()));
    }
}
