//! Preparation of incoming question/answer pairs before they are stored.

use crate::types::{AmkiPair, NewPair};
use serde::{Deserialize, Serialize};

/// Result of filtering a batch of incoming pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedPairs {
    /// Pairs that should be saved, in input order.
    pub accepted: Vec<NewPair>,
    /// Number of pairs dropped for a blank question.
    pub blank: usize,
    /// Number of pairs dropped as duplicates of the batch or the collection.
    pub duplicates: usize,
}

/// Case-insensitive comparison of question and answer.
pub fn same_pair(question_a: &str, answer_a: &str, question_b: &str, answer_b: &str) -> bool {
    question_a.to_lowercase() == question_b.to_lowercase()
        && answer_a.to_lowercase() == answer_b.to_lowercase()
}

/// Split recognized text into pairs of consecutive lines.
///
/// Odd lines are questions and even lines their answers; a trailing question
/// gets an empty answer. Lines are not trimmed.
pub fn pairs_from_lines(text: &str) -> Vec<NewPair> {
    let lines: Vec<&str> = text.lines().collect();
    lines
        .chunks(2)
        .map(|chunk| NewPair::new(chunk[0], chunk.get(1).copied().unwrap_or("")))
        .collect()
}

/// Filter incoming pairs against themselves and the stored collection.
///
/// Blank questions are dropped, later duplicates within the batch are dropped
/// (the first occurrence wins), and pairs already present in `existing` are
/// dropped.
pub fn prepare_pairs(incoming: Vec<NewPair>, existing: &[AmkiPair]) -> PreparedPairs {
    let mut prepared = PreparedPairs::default();

    for pair in incoming {
        if pair.question.trim().is_empty() {
            prepared.blank += 1;
            continue;
        }

        let seen_in_batch = prepared
            .accepted
            .iter()
            .any(|p| same_pair(&p.question, &p.answer, &pair.question, &pair.answer));
        let stored = existing
            .iter()
            .any(|p| same_pair(&p.question, &p.answer, &pair.question, &pair.answer));

        if seen_in_batch || stored {
            prepared.duplicates += 1;
        } else {
            prepared.accepted.push(pair);
        }
    }

    prepared
}
