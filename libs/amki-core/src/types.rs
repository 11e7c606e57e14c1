//! Core types for the Amki flashcard application.

use serde::{Deserialize, Serialize};

/// Recall classification of a pair. Serialized as a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmkiState {
    #[serde(rename = "N")]
    New,
    #[serde(rename = "D")]
    Difficult,
    #[serde(rename = "R")]
    Retrieve,
    #[serde(rename = "S")]
    Stable,
}

impl Default for AmkiState {
    fn default() -> Self {
        Self::New
    }
}

impl AmkiState {
    /// All states in declaration order.
    pub const ALL: [AmkiState; 4] = [Self::New, Self::Difficult, Self::Retrieve, Self::Stable];

    /// Get the stored letter for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "N",
            Self::Difficult => "D",
            Self::Retrieve => "R",
            Self::Stable => "S",
        }
    }

    /// Parse from the stored letter.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "N" => Some(Self::New),
            "D" => Some(Self::Difficult),
            "R" => Some(Self::Retrieve),
            "S" => Some(Self::Stable),
            _ => None,
        }
    }
}

/// Review button pressed by the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Good,
    Easy,
}

impl Rating {
    /// State recorded for this rating.
    /// Again -> Difficult, Good -> Retrieve, Easy -> Stable
    pub fn to_state(self) -> AmkiState {
        match self {
            Self::Again => AmkiState::Difficult,
            Self::Good => AmkiState::Retrieve,
            Self::Easy => AmkiState::Stable,
        }
    }

    /// Keyboard shortcut for this rating (1-3).
    pub fn to_key(self) -> u8 {
        match self {
            Self::Again => 1,
            Self::Good => 2,
            Self::Easy => 3,
        }
    }

    /// Create from keyboard shortcut.
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            1 => Some(Self::Again),
            2 => Some(Self::Good),
            3 => Some(Self::Easy),
            _ => None,
        }
    }
}

/// Question/answer pair before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPair {
    pub question: String,
    pub answer: String,
}

impl NewPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Stored flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmkiPair {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Epoch milliseconds.
    pub created_at: i64,
    pub state: AmkiState,
}

impl AmkiPair {
    /// Build a fresh pair in the `New` state.
    pub fn from_new(pair: NewPair, id: String, created_at: i64) -> Self {
        Self {
            id,
            question: pair.question,
            answer: pair.answer,
            created_at,
            state: AmkiState::New,
        }
    }
}

/// Append-only review log entry. `pair_id` is not checked against stored pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewHistory {
    pub pair_id: String,
    pub result: AmkiState,
    /// Epoch milliseconds.
    pub created_at: i64,
}

/// Number of pairs per state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub new: usize,
    pub difficult: usize,
    pub retrieve: usize,
    pub stable: usize,
}

impl StateCounts {
    fn add(&mut self, state: AmkiState) {
        match state {
            AmkiState::New => self.new += 1,
            AmkiState::Difficult => self.difficult += 1,
            AmkiState::Retrieve => self.retrieve += 1,
            AmkiState::Stable => self.stable += 1,
        }
    }
}

/// Collection overview for the home screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStats {
    pub total: usize,
    pub by_state: StateCounts,
    pub reviews: usize,
}

impl ReviewStats {
    pub fn compute(pairs: &[AmkiPair], history: &[ReviewHistory]) -> Self {
        let mut by_state = StateCounts::default();
        for pair in pairs {
            by_state.add(pair.state);
        }
        Self {
            total: pairs.len(),
            by_state,
            reviews: history.len(),
        }
    }
}
