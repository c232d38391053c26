//! Core types for the vocabulary application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::{Evaluation, Outcome};

/// A word pair to study. `english` is the canonical answer, `russian` the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub english: String,
    pub russian: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_english: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_russian: Option<String>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A recorded answer attempt. Answers are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub word_id: i64,
    /// Normalized submitted text.
    pub answer: String,
    pub is_correct: bool,
    pub is_synonym: bool,
    pub created_at: DateTime<Utc>,
}

/// Answer that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnswer {
    pub word_id: i64,
    pub answer: String,
    pub is_correct: bool,
    pub is_synonym: bool,
}

impl NewAnswer {
    /// Build the answer record for an evaluation.
    ///
    /// Only an exact match counts as correct; partial, synonym and incorrect
    /// outcomes are all recorded with `is_correct = false`.
    pub fn from_evaluation(word_id: i64, evaluation: &Evaluation) -> Self {
        Self {
            word_id,
            answer: evaluation.submitted.clone(),
            is_correct: evaluation.outcome == Outcome::Exact,
            is_synonym: evaluation.outcome == Outcome::Synonym,
        }
    }
}

/// Filter for listing and counting words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFilter {
    #[serde(default)]
    pub favorite_only: bool,
    /// `Some(true)` keeps only mastered words, `Some(false)` only unmastered ones.
    #[serde(default)]
    pub mastered: Option<bool>,
}

impl WordFilter {
    /// All words.
    pub fn all() -> Self {
        Self::default()
    }

    /// Favorites only.
    pub fn favorites() -> Self {
        Self {
            favorite_only: true,
            mastered: None,
        }
    }

    /// Words with at least one correct answer.
    pub fn mastered() -> Self {
        Self {
            favorite_only: false,
            mastered: Some(true),
        }
    }
}

/// Filter for counting answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFilter {
    #[serde(default)]
    pub correct: Option<bool>,
    #[serde(default)]
    pub synonym: Option<bool>,
}

impl AnswerFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn correct() -> Self {
        Self {
            correct: Some(true),
            ..Self::default()
        }
    }

    pub fn synonym() -> Self {
        Self {
            synonym: Some(true),
            ..Self::default()
        }
    }
}
