//! Common test utilities for client integration tests.

use amki_client::config::{AppConfig, StorageBackend};
use amki_client::db::{BlobStore, CardStore, MemoryBlobStore, StoreError, CARDS_KEY};
use amki_client::AppState;
use amki_core::types::{AmkiPair, NewPair};
use std::path::Path;

/// In-memory state with default review behavior.
pub fn memory_state() -> AppState {
    memory_state_with(AppConfig {
        storage: StorageBackend::Memory,
        ..AppConfig::default()
    })
}

/// In-memory state with a custom configuration.
pub fn memory_state_with(config: AppConfig) -> AppState {
    AppState::new(CardStore::new(Box::new(MemoryBlobStore::new())), config).with_seed(11)
}

/// State over a real backend rooted in `dir`.
pub fn disk_state(dir: &Path, storage: StorageBackend) -> AppState {
    let config = AppConfig {
        data_dir: dir.to_path_buf(),
        storage,
        ..AppConfig::default()
    };
    AppState::open(config).expect("open state")
}

/// Memory blobs that refuse every write to one key.
pub struct FailingWrites {
    inner: MemoryBlobStore,
    fail_key: &'static str,
}

impl BlobStore for FailingWrites {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if key == self.fail_key {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }
}

/// In-memory state holding `pairs` whose `cards` blob can no longer be written.
pub fn cards_read_only_state(pairs: &[(&str, &str, &str)]) -> AppState {
    let cards: Vec<AmkiPair> = pairs
        .iter()
        .map(|(id, q, a)| AmkiPair::from_new(NewPair::new(*q, *a), id.to_string(), 0))
        .collect();
    let inner = MemoryBlobStore::new();
    inner
        .set(CARDS_KEY, &serde_json::to_string(&cards).unwrap())
        .unwrap();

    let blobs = FailingWrites {
        inner,
        fail_key: CARDS_KEY,
    };
    AppState::new(CardStore::new(Box::new(blobs)), AppConfig::default()).with_seed(11)
}

/// Generated response with the given question/answer pairs.
pub fn generated_response(pairs: &[(&str, &str)]) -> String {
    let pairs: Vec<serde_json::Value> = pairs
        .iter()
        .map(|(q, a)| serde_json::json!({ "question": q, "answer": a }))
        .collect();
    serde_json::json!({ "pairs": pairs }).to_string()
}
