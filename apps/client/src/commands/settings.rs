//! Settings commands.

use crate::config::AppConfig;
use crate::db::{CardRepository, HistoryRepository};
use crate::state::AppState;

use super::CommandError;

/// Get the active configuration.
pub fn get_config(state: &AppState) -> AppConfig {
    state.config.clone()
}

/// Delete every stored pair. The review log is kept unless
/// `reset_clears_history` is enabled.
pub fn reset_all(state: &AppState) -> Result<(), CommandError> {
    let store = state.store();
    store.reset_all()?;
    if state.config.reset_clears_history {
        store.clear_history()?;
    }
    Ok(())
}
