//! Chain bookkeeping: sampled trajectories and the active position.

use crate::cell::Cell;

/// The record of every simulated trajectory.
///
/// Each chain is a non-empty sequence of visited state indices; the first
/// chain is seeded with state 0, and a new chain starts whenever sampling
/// dead-ends. `current` always equals the last element of the last chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTracker {
    chains: Vec<Vec<usize>>,
    current: usize,
}

impl ChainTracker {
    /// Creates a tracker holding the single seed chain `[0]`.
    pub fn new() -> Self {
        Self {
            chains: vec![vec![0]],
            current: 0,
        }
    }

    /// Returns the index of the active state.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns all recorded chains, oldest first.
    pub fn chains(&self) -> &[Vec<usize>] {
        &self.chains
    }

    /// Appends a sampled destination to the active chain and moves there.
    pub fn append(&mut self, to: usize) {
        self.chains
            .last_mut()
            .expect("tracker always holds at least one chain")
            .push(to);
        self.current = to;
    }

    /// Starts a fresh chain seeded at state 0 and moves there.
    pub fn start_chain(&mut self) {
        self.chains.push(vec![0]);
        self.current = 0;
    }

    /// Discards all history, returning to the single seed chain `[0]`.
    pub fn reset(&mut self) {
        self.chains = vec![vec![0]];
        self.current = 0;
    }

    /// Returns true once any simulation has progressed past the seed:
    /// more than one chain, or a first chain longer than one element.
    pub fn has_history(&self) -> bool {
        self.chains.len() > 1 || self.chains[0].len() > 1
    }

    /// Replays every chain into an empirical `size × size` transition-count
    /// grid: each consecutive pair `(x, y)` increments `[x][y]` by one.
    ///
    /// Pairs recorded before a shrinking resize may reference states outside
    /// the current size; those pairs are skipped rather than miscounted.
    pub fn transition_counts(&self, size: usize) -> Vec<Vec<Cell>> {
        let mut counts = vec![vec![Cell::empty(); size]; size];
        for chain in &self.chains {
            for pair in chain.windows(2) {
                let (x, y) = (pair[0], pair[1]);
                if x < size && y < size {
                    counts[x][y] = counts[x][y].with_value(counts[x][y].value() + 1.0);
                }
            }
        }
        counts
    }
}

impl Default for ChainTracker {
    fn default() -> Self {
        Self::new()
    }
}
