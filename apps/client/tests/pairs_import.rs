//! Pair saving and generated response import tests.

mod common;

use amki_client::commands::{
    count_pairs, import_generated, import_recognized_text, list_pairs, save_pairs, update_pair,
};
use amki_client::config::AppConfig;
use amki_client::db::{CardStore, MemoryBlobStore};
use amki_client::AppState;
use amki_core::types::{AmkiState, NewPair};
use pretty_assertions::assert_eq;

#[test]
fn test_save_skips_blank_and_duplicates() {
    let state = common::memory_state();
    save_pairs(vec![NewPair::new("Capital of Japan?", "Tokyo")], &state).unwrap();

    let result = save_pairs(
        vec![
            NewPair::new("", "orphan answer"),
            NewPair::new("capital of japan?", "tokyo"),
            NewPair::new("Capital of Italy?", "Rome"),
            NewPair::new("Capital of Italy?", "Rome"),
        ],
        &state,
    )
    .unwrap();

    assert_eq!(result.saved.len(), 1);
    assert_eq!(result.saved[0].question, "Capital of Italy?");
    assert_eq!(result.blank, 1);
    assert_eq!(result.duplicates, 2);
    assert_eq!(count_pairs(&state), 2);
}

#[test]
fn test_import_generated_response() {
    let state = common::memory_state();
    let content = common::generated_response(&[("What is H2O?", "Water"), ("What is NaCl?", "Salt")]);

    let result = import_generated(&content, &state).unwrap();
    assert_eq!(result.saved.len(), 2);
    assert!(result.saved.iter().all(|p| p.state == AmkiState::New));
    assert_eq!(list_pairs(&state), result.saved);
}

#[test]
fn test_import_fenced_response() {
    let state = common::memory_state();
    let content = format!("```json\n{}\n```", common::generated_response(&[("Q", "A")]));
    assert_eq!(import_generated(&content, &state).unwrap().saved.len(), 1);
}

#[test]
fn test_import_invalid_response() {
    let state = common::memory_state();
    let err = import_generated("sorry, I cannot help", &state).unwrap_err();
    assert!(err.message.starts_with("invalid JSON"));
    assert_eq!(count_pairs(&state), 0);
}

#[test]
fn test_update_pair() {
    let state = common::memory_state();
    let mut pair = save_pairs(vec![NewPair::new("Q", "A")], &state).unwrap().saved.remove(0);

    pair.answer = "Edited".to_string();
    assert!(update_pair(pair.clone(), &state).unwrap());
    assert_eq!(list_pairs(&state), vec![pair.clone()]);

    pair.id = "unknown".to_string();
    assert!(!update_pair(pair, &state).unwrap());
    assert_eq!(count_pairs(&state), 1);
}

#[test]
fn test_write_failure_surfaces_to_caller() {
    let store = CardStore::new(Box::new(MemoryBlobStore::with_quota(200)));
    let state = AppState::new(store, AppConfig::default());

    let err = save_pairs(vec![NewPair::new("Q".repeat(300), "A")], &state).unwrap_err();
    assert!(err.message.contains("quota exceeded"), "{}", err.message);
    assert_eq!(count_pairs(&state), 0);
}

/// Recognized text pairs consecutive lines; a dangling question keeps an empty answer.
#[test]
fn test_import_recognized_text() {
    let state = common::memory_state();

    let result = import_recognized_text("Q1\r\nA1\r\nQ2", &state).unwrap();
    assert_eq!(result.saved.len(), 2);

    let pairs = list_pairs(&state);
    assert_eq!(pairs[0].question, "Q1");
    assert_eq!(pairs[0].answer, "A1");
    assert_eq!(pairs[1].question, "Q2");
    assert_eq!(pairs[1].answer, "");

    let again = import_recognized_text("Q1\nA1", &state).unwrap();
    assert!(again.saved.is_empty());
    assert_eq!(again.duplicates, 1);
    assert_eq!(count_pairs(&state), 2);
}
