//! Application state.

use crate::config::{AppConfig, StorageBackend};
use crate::db::{BlobStore, CardStore, FileBlobStore, MemoryBlobStore, SqliteBlobStore, StoreError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::sync::{Arc, Mutex, MutexGuard};

/// Global application state.
pub struct AppState {
    pub store: Arc<Mutex<CardStore>>,
    pub config: AppConfig,
    rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(store: CardStore, config: AppConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Open the configured storage backend.
    pub fn open(config: AppConfig) -> Result<Self, StoreError> {
        let blobs: Box<dyn BlobStore> = match config.storage {
            StorageBackend::Sqlite => {
                fs::create_dir_all(&config.data_dir)?;
                Box::new(SqliteBlobStore::open(config.db_path())?)
            }
            StorageBackend::File => Box::new(FileBlobStore::new(&config.data_dir)?),
            StorageBackend::Memory => Box::new(MemoryBlobStore::new()),
        };
        tracing::info!(
            storage = config.storage.as_str(),
            data_dir = %config.data_dir.display(),
            "opened card store"
        );
        Ok(Self::new(CardStore::new(blobs), config))
    }

    /// Use a fixed seed for review ordering.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Lock the card store, recovering from a poisoned lock.
    pub fn store(&self) -> MutexGuard<'_, CardStore> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|e| e.into_inner())
    }
}
