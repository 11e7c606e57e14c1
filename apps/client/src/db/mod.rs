//! Local persistence for cards and review history.

pub mod blob;
pub mod error;
pub mod file;
pub mod repository;
pub mod schema;
pub mod sqlite;

pub use blob::{BlobStore, MemoryBlobStore};
pub use error::StoreError;
pub use file::FileBlobStore;
pub use repository::{CardRepository, CardStore, HistoryRepository, CARDS_KEY, HISTORY_KEY};
pub use sqlite::SqliteBlobStore;
