//! Card store: the only reader and writer of the `cards` and `history` blobs.

use crate::db::blob::BlobStore;
use crate::db::error::StoreError;
use amki_core::types::{AmkiPair, AmkiState, NewPair, ReviewHistory};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

type Result<T> = std::result::Result<T, StoreError>;

/// Blob key for the card collection.
pub const CARDS_KEY: &str = "cards";
/// Blob key for the review log.
pub const HISTORY_KEY: &str = "history";

/// Repository for card operations.
pub trait CardRepository {
    fn create_cards(&self, pairs: Vec<NewPair>) -> Result<Vec<AmkiPair>>;
    fn list_cards(&self) -> Vec<AmkiPair>;
    fn get_card(&self, id: &str) -> Option<AmkiPair>;
    /// Replace the card with the same id. Returns false (and writes nothing)
    /// when no card matches.
    fn update_card(&self, card: &AmkiPair) -> Result<bool>;
    fn count_cards(&self) -> usize;
    fn reset_all(&self) -> Result<()>;
}

/// Repository for the append-only review log.
pub trait HistoryRepository {
    fn record_history(&self, pair_id: &str, result: AmkiState) -> Result<ReviewHistory>;
    fn list_history(&self) -> Vec<ReviewHistory>;
    fn clear_history(&self) -> Result<()>;
}

/// Card store over any blob backend.
pub struct CardStore {
    blobs: Box<dyn BlobStore>,
}

impl CardStore {
    pub fn new(blobs: Box<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    /// Read a JSON array blob. A missing key reads as empty; backend errors
    /// and corrupt data are returned.
    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.blobs.get(key)? else {
            return Ok(Vec::new());
        };
        let items: Vec<T> = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        tracing::debug!(key, count = items.len(), "read blob");
        Ok(items)
    }

    /// Fail-open read for listing. Unreadable or corrupt data reads as empty.
    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.load_list(key).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "failed to read blob, treating as empty");
            Vec::new()
        })
    }

    fn write_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.blobs.set(key, &raw).map_err(|e| {
            tracing::error!(key, error = %e, "failed to write blob");
            e
        })?;
        tracing::debug!(key, count = items.len(), "wrote blob");
        Ok(())
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl CardRepository for CardStore {
    fn create_cards(&self, pairs: Vec<NewPair>) -> Result<Vec<AmkiPair>> {
        let created_at = now_millis();
        let new_cards: Vec<AmkiPair> = pairs
            .into_iter()
            .map(|pair| AmkiPair::from_new(pair, Uuid::new_v4().to_string(), created_at))
            .collect();

        let mut cards: Vec<AmkiPair> = self.load_list(CARDS_KEY)?;
        cards.extend(new_cards.iter().cloned());
        self.write_list(CARDS_KEY, &cards)?;

        tracing::info!(created = new_cards.len(), total = cards.len(), "created cards");
        Ok(new_cards)
    }

    fn list_cards(&self) -> Vec<AmkiPair> {
        self.read_list(CARDS_KEY)
    }

    fn get_card(&self, id: &str) -> Option<AmkiPair> {
        self.list_cards().into_iter().find(|c| c.id == id)
    }

    fn update_card(&self, card: &AmkiPair) -> Result<bool> {
        let mut cards: Vec<AmkiPair> = self.load_list(CARDS_KEY)?;
        let Some(slot) = cards.iter_mut().find(|c| c.id == card.id) else {
            tracing::warn!(id = %card.id, "update for unknown card ignored");
            return Ok(false);
        };
        *slot = card.clone();
        self.write_list(CARDS_KEY, &cards)?;
        Ok(true)
    }

    fn count_cards(&self) -> usize {
        self.list_cards().len()
    }

    fn reset_all(&self) -> Result<()> {
        self.blobs.remove(CARDS_KEY)?;
        tracing::info!("removed all cards");
        Ok(())
    }
}

impl HistoryRepository for CardStore {
    fn record_history(&self, pair_id: &str, result: AmkiState) -> Result<ReviewHistory> {
        let record = ReviewHistory {
            pair_id: pair_id.to_string(),
            result,
            created_at: now_millis(),
        };

        let mut history: Vec<ReviewHistory> = self.load_list(HISTORY_KEY)?;
        history.push(record.clone());
        self.write_list(HISTORY_KEY, &history)?;
        Ok(record)
    }

    fn list_history(&self) -> Vec<ReviewHistory> {
        self.read_list(HISTORY_KEY)
    }

    fn clear_history(&self) -> Result<()> {
        self.blobs.remove(HISTORY_KEY)?;
        tracing::info!("removed review history");
        Ok(())
    }
}
