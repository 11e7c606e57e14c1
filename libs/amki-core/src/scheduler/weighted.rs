//! Weighted random ordering.
//!
//! Every pair draws a uniform value in `[0, 1)` which is scaled by the weight
//! of its state; pairs are then sorted by descending score. New and difficult
//! pairs tend to come first, but any pair can lead the queue.

use super::{ReviewScheduler, StateWeights};
use crate::types::AmkiPair;
use rand::{Rng, RngCore};

/// Weighted random scheduler.
#[derive(Debug, Clone, Default)]
pub struct WeightedRandom {
    pub weights: StateWeights,
}

impl WeightedRandom {
    pub fn new(weights: StateWeights) -> Self {
        Self { weights }
    }

    /// Order pairs using any RNG.
    pub fn order_with<R: Rng + ?Sized>(&self, pairs: &[AmkiPair], rng: &mut R) -> Vec<AmkiPair> {
        if pairs.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &AmkiPair)> = pairs
            .iter()
            .map(|pair| (rng.gen::<f64>() * self.weights.weight(pair.state), pair))
            .collect();

        // Stable sort keeps input order on equal scores.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored.into_iter().map(|(_, pair)| pair.clone()).collect()
    }
}

impl ReviewScheduler for WeightedRandom {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn order(&self, pairs: &[AmkiPair], rng: &mut dyn RngCore) -> Vec<AmkiPair> {
        self.order_with(pairs, rng)
    }
}
