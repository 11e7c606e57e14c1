//! Review ordering.
//!
//! A scheduler takes a snapshot of every stored pair and returns all of them
//! in the order they should be offered. Callers show the head, record the
//! outcome, then ask again; no cursor is kept between calls.

pub mod weighted;

pub use weighted::WeightedRandom;

use crate::types::{AmkiPair, AmkiState};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Trait for review schedulers.
pub trait ReviewScheduler: Send + Sync {
    /// Scheduler identifier.
    fn name(&self) -> &'static str;

    /// Order pairs for review. The result is a permutation of `pairs`.
    fn order(&self, pairs: &[AmkiPair], rng: &mut dyn RngCore) -> Vec<AmkiPair>;
}

/// Per-state weight applied to each pair's random draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateWeights {
    pub new: f64,
    pub difficult: f64,
    pub retrieve: f64,
    pub stable: f64,
}

impl Default for StateWeights {
    fn default() -> Self {
        Self {
            new: 0.3,
            difficult: 0.3,
            retrieve: 0.1,
            stable: 0.1,
        }
    }
}

impl StateWeights {
    /// Weight for a given state.
    pub fn weight(&self, state: AmkiState) -> f64 {
        match state {
            AmkiState::New => self.new,
            AmkiState::Difficult => self.difficult,
            AmkiState::Retrieve => self.retrieve,
            AmkiState::Stable => self.stable,
        }
    }
}

/// Order pairs with the default weights and the thread-local RNG.
pub fn select_next_pairs(pairs: &[AmkiPair]) -> Vec<AmkiPair> {
    select_next_pairs_with(pairs, &mut rand::thread_rng())
}

/// Order pairs with the default weights and a caller-supplied RNG.
pub fn select_next_pairs_with<R: Rng + ?Sized>(pairs: &[AmkiPair], rng: &mut R) -> Vec<AmkiPair> {
    WeightedRandom::default().order_with(pairs, rng)
}
