//! Review session commands.

use crate::db::{CardRepository, HistoryRepository};
use crate::state::AppState;
use amki_core::scheduler::select_next_pairs_with;
use amki_core::types::{AmkiPair, Rating, ReviewHistory};

use super::CommandError;

#[derive(Debug, serde::Deserialize)]
pub struct ReviewRequest {
    pub pair_id: String,
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Keyboard shortcut (1-3), used when `rating` is absent.
    #[serde(default)]
    pub key: Option<u8>,
}

#[derive(Debug, serde::Serialize)]
pub struct ReviewResponse {
    pub history: ReviewHistory,
    /// The pair after its state was advanced, if it exists and advancing is enabled.
    pub pair: Option<AmkiPair>,
}

/// Get every pair in review order.
pub fn get_review_queue(state: &AppState) -> Vec<AmkiPair> {
    let pairs = state.store().list_cards();
    select_next_pairs_with(&pairs, &mut *state.rng())
}

/// Get the pair to show next.
pub fn next_pair(state: &AppState) -> Option<AmkiPair> {
    get_review_queue(state).into_iter().next()
}

/// Record a review outcome.
pub fn submit_review(
    request: ReviewRequest,
    state: &AppState,
) -> Result<ReviewResponse, CommandError> {
    let rating = match (request.rating, request.key) {
        (Some(rating), _) => rating,
        (None, Some(key)) => Rating::from_key(key)
            .ok_or_else(|| CommandError::new(format!("invalid rating key: {}", key)))?,
        (None, None) => return Err(CommandError::new("missing rating")),
    };
    let result = rating.to_state();

    // Card before history, so a failed update records no review.
    let store = state.store();
    let pair = if state.config.advance_state {
        match store.get_card(&request.pair_id) {
            Some(mut pair) => {
                pair.state = result;
                store.update_card(&pair)?;
                Some(pair)
            }
            None => None,
        }
    } else {
        None
    };

    let history = store.record_history(&request.pair_id, result)?;

    tracing::debug!(pair_id = %request.pair_id, result = result.as_str(), "recorded review");

    Ok(ReviewResponse { history, pair })
}
