//! Client configuration loaded from the environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    Sqlite,
    File,
    Memory,
}

impl Default for StorageBackend {
    fn default() -> Self {
        Self::Sqlite
    }
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::File => "file",
            Self::Memory => "memory",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Some(Self::Sqlite),
            "file" | "json" => Some(Self::File),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage: StorageBackend,
    /// Set a card's state to the rated outcome after each review.
    pub advance_state: bool,
    /// Also delete the review log when resetting.
    pub reset_clears_history: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage: StorageBackend::default(),
            advance_state: true,
            reset_clears_history: false,
            log_filter: "info".to_string(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("amki")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    /// Load from process environment, reading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup. Unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("AMKI_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(value) = lookup("AMKI_STORAGE") {
            match StorageBackend::from_str(&value) {
                Some(storage) => config.storage = storage,
                None => tracing::warn!(value = %value, "unknown AMKI_STORAGE, using default"),
            }
        }

        if let Some(value) = lookup("AMKI_ADVANCE_STATE") {
            match parse_bool(&value) {
                Some(flag) => config.advance_state = flag,
                None => tracing::warn!(value = %value, "invalid AMKI_ADVANCE_STATE, using default"),
            }
        }

        if let Some(value) = lookup("AMKI_RESET_CLEARS_HISTORY") {
            match parse_bool(&value) {
                Some(flag) => config.reset_clears_history = flag,
                None => {
                    tracing::warn!(value = %value, "invalid AMKI_RESET_CLEARS_HISTORY, using default")
                }
            }
        }

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    /// Path of the SQLite database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("amki.db")
    }
}
