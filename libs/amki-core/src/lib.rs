//! Core Amki library shared by the client and any UI shell.
//!
//! Provides:
//! - Review scheduler (weighted random ordering by card state)
//! - Preparation of incoming question/answer pairs (blank and duplicate filtering)
//! - Parser for generated flashcard responses
//! - Shared types (AmkiPair, AmkiState, Rating, etc.)

pub mod error;
pub mod pairs;
pub mod parser;
pub mod scheduler;
pub mod types;

pub use error::{ParseError, Result};
pub use pairs::{pairs_from_lines, prepare_pairs, same_pair, PreparedPairs};
pub use parser::parse_generated;
pub use scheduler::{
    select_next_pairs, select_next_pairs_with, ReviewScheduler, StateWeights, WeightedRandom,
};
pub use types::{AmkiPair, AmkiState, NewPair, Rating, ReviewHistory, ReviewStats, StateCounts};
