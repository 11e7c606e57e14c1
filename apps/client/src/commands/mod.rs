//! Commands exposed to the UI shell.
//!
//! Each command runs to completion synchronously and returns either a
//! serializable value or a `CommandError` carrying a user-facing message.

pub mod pairs;
pub mod settings;
pub mod stats;
pub mod study;

pub use pairs::{
    count_pairs, get_pair, import_generated, import_recognized_text, list_pairs, save_pairs,
    update_pair, SaveResult,
};
pub use settings::{get_config, reset_all};
pub use stats::{get_history, get_stats};
pub use study::{get_review_queue, next_pair, submit_review, ReviewRequest, ReviewResponse};

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<crate::db::StoreError> for CommandError {
    fn from(e: crate::db::StoreError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<amki_core::ParseError> for CommandError {
    fn from(e: amki_core::ParseError) -> Self {
        Self { message: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_message() {
        let error: CommandError = crate::db::StoreError::QuotaExceeded {
            key: "cards".into(),
            needed: 20,
            quota: 10,
        }
        .into();
        assert_eq!(
            error.message,
            "storage quota exceeded writing cards: 20 bytes needed, 10 allowed"
        );
    }

    #[test]
    fn parse_error_message() {
        let error: CommandError = amki_core::ParseError::EmptyResponse.into();
        assert_eq!(error.to_string(), "empty response");
    }
}
