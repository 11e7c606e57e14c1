//! Statistics commands.

use crate::db::{CardRepository, HistoryRepository};
use crate::state::AppState;
use amki_core::types::{ReviewHistory, ReviewStats};

/// Get pair counts per state and the number of recorded reviews.
pub fn get_stats(state: &AppState) -> ReviewStats {
    let store = state.store();
    ReviewStats::compute(&store.list_cards(), &store.list_history())
}

/// Get the full review log in recording order.
pub fn get_history(state: &AppState) -> Vec<ReviewHistory> {
    state.store().list_history()
}
