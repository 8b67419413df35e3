//! Sampling, stepping, and the read-only reporting surface.

use rand::Rng;
use tracing::{debug, trace};

use crate::cell::Cell;
use crate::matrix::{self, WeightMatrix};
use crate::report::{self, ReportValue};
use crate::state::{StateCell, StateMode};
use crate::tracker::ChainTracker;

/// A successfully executed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// State the walker departed.
    pub from: usize,
    /// State the walker entered.
    pub to: usize,
}

/// The Markov chain model: weight matrix, per-state markers, and the chain
/// record, mutated by one logical caller at a time.
///
/// All derived views (`normalized`, `transitions`, `plain_matrix`) are
/// recomputed on demand from current state; mutators build replacement
/// values in full before swapping them in.
#[derive(Debug, Clone)]
pub struct MarkovEngine {
    matrix: WeightMatrix,
    states: Vec<StateCell>,
    tracker: ChainTracker,
}

/// The state vector for a fresh simulation: the walker starts on state 0,
/// which is pre-marked with one visit.
fn seed_states(size: usize) -> Vec<StateCell> {
    let mut states = vec![StateCell::empty(); size];
    states[0] = StateCell::build(StateMode::Idle, 1, 0);
    states
}

impl MarkovEngine {
    /// Creates an engine over the default `2 × 2` zero matrix.
    pub fn new() -> Self {
        Self::with_matrix(WeightMatrix::new())
    }

    /// Creates an engine over a prepared weight matrix.
    pub fn with_matrix(matrix: WeightMatrix) -> Self {
        let states = seed_states(matrix.size());
        Self {
            matrix,
            states,
            tracker: ChainTracker::new(),
        }
    }

    // --- Read accessors ---

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Returns the weight matrix.
    pub fn matrix(&self) -> &WeightMatrix {
        &self.matrix
    }

    /// Returns the per-state marker vector.
    pub fn states(&self) -> &[StateCell] {
        &self.states
    }

    /// Returns all recorded chains.
    pub fn chains(&self) -> &[Vec<usize>] {
        self.tracker.chains()
    }

    /// Returns the index of the active state.
    pub fn current(&self) -> usize {
        self.tracker.current()
    }

    /// Returns the row-normalized view of the current weights.
    pub fn normalized(&self) -> Vec<Vec<Cell>> {
        self.matrix.normalized()
    }

    /// Returns empirical transition counts replayed from the chain record,
    /// independent of the configured weights.
    pub fn transitions(&self) -> Vec<Vec<Cell>> {
        self.tracker.transition_counts(self.size())
    }

    /// Returns the row-normalized empirical transition frequencies.
    pub fn transitions_normalized(&self) -> Vec<Vec<Cell>> {
        matrix::normalize_rows(&self.transitions())
    }

    /// Returns the tabular report snapshot consumed by export collaborators.
    pub fn plain_matrix(&self) -> Vec<Vec<ReportValue>> {
        report::plain_matrix(&self.matrix, &self.states)
    }

    // --- Mutators ---

    /// Replaces the weight at `(x, y)`; returns `false` when the value is
    /// rejected (negative or non-finite), leaving the matrix unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is out of range.
    pub fn set(&mut self, x: usize, y: usize, value: f64) -> bool {
        self.matrix.set(x, y, value)
    }

    /// Resizes the model. The request is UI-shaped: non-finite values are
    /// ignored (returns `false`), anything else is truncated and clamped to
    /// at least 2. The top-left overlap of the weight grid and the matching
    /// prefix of the state vector survive; everything else is zero-filled.
    /// The chain record is left untouched.
    pub fn resize(&mut self, requested: f64) -> bool {
        let Some(new_size) = matrix::coerce_size(requested) else {
            return false;
        };
        let overlap = self.size().min(new_size);
        self.matrix.resize_to(new_size);
        let mut states = Vec::with_capacity(new_size);
        for i in 0..new_size {
            if i < overlap {
                states.push(self.states[i]);
            } else {
                states.push(StateCell::empty());
            }
        }
        self.states = states;
        true
    }

    /// Clears the model in two stages.
    ///
    /// If any simulation has progressed past the seed (a chain longer than
    /// one element, or more than one chain), only the simulation history is
    /// discarded: chains return to `[[0]]` and the state vector is re-seeded;
    /// the weights are kept. On a pristine model the weights themselves are
    /// zeroed and the (empty) history is kept. Repeated clears therefore
    /// wipe results first, then the input matrix.
    pub fn clear(&mut self) {
        if self.tracker.has_history() {
            debug!("clearing simulation history");
            self.tracker.reset();
            self.states = seed_states(self.size());
        } else {
            debug!("clearing weight matrix");
            self.matrix.clear_weights();
        }
    }

    /// Commits the normalized view as the new weight matrix.
    ///
    /// Normalizing an already row-stochastic matrix yields itself (up to
    /// floating error), so repeated calls are idempotent.
    pub fn normalize(&mut self) {
        let normalized = self.matrix.normalized();
        self.matrix.replace(normalized);
    }

    /// Executes one simulated step.
    ///
    /// Draws a uniform random number and walks the current state's
    /// normalized row for a destination. If the row yields none (zero mass,
    /// or rounding pushed the draw past the last positive cell), a fresh
    /// chain is started at state 0 — state 0's visit count is incremented,
    /// its mode and time are not — and the draw is retried exactly once
    /// from state 0. A second dead end returns `None`: no step was taken.
    pub fn step(&mut self, rng: &mut impl Rng) -> Option<Step> {
        let from = self.tracker.current();
        if let Some(to) = self.destination(from, rng.random()) {
            self.apply_step(from, to);
            return Some(Step { from, to });
        }

        debug!(from, "dead end; restarting chain at state 0");
        self.start_new_chain();
        let from = self.tracker.current();
        match self.destination(from, rng.random()) {
            Some(to) => {
                self.apply_step(from, to);
                Some(Step { from, to })
            }
            None => {
                debug!("dead end after restart; no step taken");
                None
            }
        }
    }

    /// Samples a destination for `from` given a uniform draw `rnd`.
    ///
    /// Scans the normalized row left to right, treating `rnd` as the
    /// probability mass still to be consumed: the first cell whose value is
    /// positive and at least the remaining mass wins; otherwise its value is
    /// subtracted and the scan continues. Returns `None` when the row is
    /// exhausted — a zero row always dead-ends, and a nominally stochastic
    /// row can dead-end when rounding leaves residual mass past the last
    /// positive cell. The scan-and-subtract form is kept deliberately:
    /// replacing it with a precomputed CDF changes that edge behavior.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of range — the stepping algorithm never
    /// produces one, so this indicates a caller bug.
    pub fn destination(&self, from: usize, rnd: f64) -> Option<usize> {
        assert!(
            from < self.size(),
            "from must be < size ({}), got {from}",
            self.size()
        );
        let normalized = self.matrix.normalized();
        let row = &normalized[from];
        let mut left = rnd;
        for (to, cell) in row.iter().enumerate() {
            if cell.value() > 0.0 && cell.value() >= left {
                return Some(to);
            }
            left -= cell.value();
        }
        None
    }

    /// Starts a fresh chain at state 0 after a dead end. State 0 gains a
    /// visit; modes are deliberately left as they were (the marker layer is
    /// best-effort, the chain record is authoritative).
    fn start_new_chain(&mut self) {
        self.tracker.start_chain();
        self.states[0] = StateCell::build(
            self.states[0].mode(),
            self.states[0].visits() + 1,
            self.states[0].time(),
        );
    }

    /// Applies a sampled transition: previous markers go idle, the origin
    /// is departed, the destination entered (sequentially, so a self-loop
    /// accumulates both time and a visit on the same cell), and the chain
    /// record advances.
    fn apply_step(&mut self, from: usize, to: usize) {
        trace!(from, to, "step");
        for state in self.states.iter_mut() {
            if state.mode() == StateMode::Previous {
                *state = state.idle();
            }
        }
        self.states[from] = self.states[from].departed();
        self.states[to] = self.states[to].entered();
        self.tracker.append(to);
    }
}

impl Default for MarkovEngine {
    fn default() -> Self {
        Self::new()
    }
}
