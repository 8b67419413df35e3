//! Discrete-time, finite-state Markov chain simulator.
//!
//! The model holds a transition-weight matrix, derives row-normalized
//! probabilities on demand, samples successive states via weighted random
//! draws, and accumulates empirical statistics (visit counts, per-state
//! dwell time, realized transition frequencies) across one or more chains.
//! A chain restarts at state 0 whenever a draw fails to land on any
//! outgoing edge; a restart that immediately dead-ends again reports "no
//! step taken" instead of looping.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   weights     │────▶│  normalized    │────▶│      step        │
//!  │  (user edits) │     │  (derived row  │     │  (draw, record,  │
//!  │               │     │   probability) │     │   mark states)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use walker_chain::{MarkovEngine, WeightMatrix};
//!
//! // Deterministic two-state alternation: 0 -> 1 -> 0 -> ...
//! let matrix = WeightMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
//! let mut engine = MarkovEngine::with_matrix(matrix);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let step = engine.step(&mut rng).expect("row has outgoing mass");
//! assert_eq!((step.from, step.to), (0, 1));
//! assert_eq!(engine.chains(), &[vec![0, 1]]);
//! ```

pub mod cell;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod report;
pub mod state;
pub mod tracker;

pub use cell::Cell;
pub use engine::{MarkovEngine, Step};
pub use error::ChainError;
pub use matrix::{MIN_SIZE, WeightMatrix};
pub use report::{ReportValue, plain_matrix, to_json};
pub use state::{StateCell, StateMode};
pub use tracker::ChainTracker;
