//! Transition table: permitted destinations per source state.

use crate::core::State;
use std::collections::HashMap;

/// Mapping from a source state to the destinations it may move to.
///
/// A source without an entry has no outgoing transitions. Destinations keep
/// the order they were given in, without duplicates.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State> {
    edges: HashMap<S, Vec<S>>,
}

impl<S: State> Default for TransitionTable<S> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }
}

impl<S: State> TransitionTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(source, destinations)` pairs.
    ///
    /// A source listed more than once has its destinations merged.
    pub fn from_pairs<I, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        T: IntoIterator<Item = S>,
    {
        let mut table = Self::new();
        for (from, targets) in pairs {
            for to in targets {
                table.allow(from.clone(), to);
            }
        }
        table
    }

    /// Add a single permitted edge.
    pub fn allow(&mut self, from: S, to: S) {
        let targets = self.edges.entry(from).or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    pub fn permits(&self, from: &S, to: &S) -> bool {
        self.edges
            .get(from)
            .is_some_and(|targets| targets.contains(to))
    }

    /// Destinations permitted from `from`; empty when it has no entry.
    pub fn targets(&self, from: &S) -> &[S] {
        self.edges.get(from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All `(source, destinations)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &[S])> {
        self.edges
            .iter()
            .map(|(from, targets)| (from, targets.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
