//! Parser for generated flashcard responses.
//!
//! # Format
//! ```json
//! {
//!   "pairs": [
//!     { "question": "What is Rust?", "answer": "A systems programming language." }
//!   ]
//! }
//! ```
//!
//! The object may be wrapped in a Markdown code fence.

use crate::error::{ParseError, Result};
use crate::types::NewPair;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GeneratedResponse {
    pairs: Vec<NewPair>,
}

/// Parse a generated response into new pairs.
pub fn parse_generated(content: &str) -> Result<Vec<NewPair>> {
    let body = strip_fence(content.trim());
    if body.is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let response: GeneratedResponse = serde_json::from_str(body)?;
    Ok(response.pairs)
}

fn strip_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // Drop the info string (e.g. `json`) on the opening line.
    match rest.find('\n') {
        Some(idx) if !rest[..idx].trim_start().starts_with('{') => rest[idx + 1..].trim(),
        _ => rest.trim(),
    }
}
