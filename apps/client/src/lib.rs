//! Local Amki client: card storage and the commands a UI shell calls.

pub mod commands;
pub mod config;
pub mod db;
pub mod state;

pub use config::{AppConfig, StorageBackend};
pub use state::AppState;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber. Later calls are ignored.
pub fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Load configuration from the environment, set up logging and open storage.
pub fn launch() -> Result<AppState, db::StoreError> {
    let config = AppConfig::from_env();
    init_tracing(&config.log_filter);

    AppState::open(config)
}
