//! Pair management commands.

use crate::db::CardRepository;
use crate::state::AppState;
use amki_core::pairs::{pairs_from_lines, prepare_pairs};
use amki_core::parser::parse_generated;
use amki_core::types::{AmkiPair, NewPair};

use super::CommandError;

#[derive(Debug, serde::Serialize)]
pub struct SaveResult {
    pub saved: Vec<AmkiPair>,
    pub blank: usize,
    pub duplicates: usize,
}

/// Save user-edited pairs, skipping blank questions and duplicates.
pub fn save_pairs(pairs: Vec<NewPair>, state: &AppState) -> Result<SaveResult, CommandError> {
    let store = state.store();
    let prepared = prepare_pairs(pairs, &store.list_cards());
    let saved = store.create_cards(prepared.accepted)?;

    if prepared.blank + prepared.duplicates > 0 {
        tracing::debug!(
            blank = prepared.blank,
            duplicates = prepared.duplicates,
            "skipped incoming pairs"
        );
    }

    Ok(SaveResult {
        saved,
        blank: prepared.blank,
        duplicates: prepared.duplicates,
    })
}

/// Decode a generated flashcard response and save its pairs.
pub fn import_generated(content: &str, state: &AppState) -> Result<SaveResult, CommandError> {
    let pairs = parse_generated(content)?;
    save_pairs(pairs, state)
}

/// Save recognized text, one question line followed by its answer line.
pub fn import_recognized_text(text: &str, state: &AppState) -> Result<SaveResult, CommandError> {
    save_pairs(pairs_from_lines(text), state)
}

/// List all pairs in insertion order.
pub fn list_pairs(state: &AppState) -> Vec<AmkiPair> {
    state.store().list_cards()
}

/// Number of stored pairs.
pub fn count_pairs(state: &AppState) -> usize {
    state.store().count_cards()
}

/// Get a single pair by ID.
pub fn get_pair(pair_id: &str, state: &AppState) -> Option<AmkiPair> {
    state.store().get_card(pair_id)
}

/// Replace a stored pair. Returns false when the ID is unknown.
pub fn update_pair(pair: AmkiPair, state: &AppState) -> Result<bool, CommandError> {
    state.store().update_card(&pair).map_err(Into::into)
}
