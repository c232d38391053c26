//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from vocab-core
pub use vocab_core::{
    Answer, AnswerFilter, Evaluation, NewAnswer, Outcome, Progress, SelectionCriteria, Word,
    WordFilter,
};

/// Longest word text or submitted answer accepted, in characters.
pub const MAX_TEXT_CHARS: usize = 200;

// === Database Entity Types ===

/// Word stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWord {
    pub id: i64,
    pub english: String,
    pub russian: String,
    pub example_english: Option<String>,
    pub example_russian: Option<String>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbWord> for Word {
    fn from(row: DbWord) -> Self {
        Word {
            id: row.id,
            english: row.english,
            russian: row.russian,
            example_english: row.example_english,
            example_russian: row.example_russian,
            is_favorite: row.is_favorite,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Answer record in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAnswer {
    pub id: i64,
    pub word_id: i64,
    pub answer: String,
    pub is_correct: bool,
    pub is_synonym: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbAnswer> for Answer {
    fn from(row: DbAnswer) -> Self {
        Answer {
            id: row.id,
            word_id: row.word_id,
            answer: row.answer,
            is_correct: row.is_correct,
            is_synonym: row.is_synonym,
            created_at: row.created_at,
        }
    }
}

/// Validated input for inserting a word
#[derive(Debug, Clone)]
pub struct NewWord {
    pub english: String,
    pub russian: String,
    pub example_english: Option<String>,
    pub example_russian: Option<String>,
    pub is_favorite: bool,
}

// === API Request/Response Types ===

// Word types
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WordListQuery {
    #[serde(default)]
    pub favorite_only: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResponse {
    pub words: Vec<Word>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWordRequest {
    pub english: String,
    pub russian: String,
    pub example_english: Option<String>,
    pub example_russian: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl CreateWordRequest {
    /// Trim texts and reject blank required fields
    pub fn validate(self) -> crate::error::Result<NewWord> {
        Ok(NewWord {
            english: required_text("english", &self.english)?,
            russian: required_text("russian", &self.russian)?,
            example_english: optional_text(self.example_english),
            example_russian: optional_text(self.example_russian),
            is_favorite: self.is_favorite,
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateWordRequest {
    pub english: Option<String>,
    pub russian: Option<String>,
    pub example_english: Option<String>,
    pub example_russian: Option<String>,
    pub is_favorite: Option<bool>,
}

impl UpdateWordRequest {
    /// Trim texts and reject blank required fields
    pub fn validate(self) -> crate::error::Result<Self> {
        Ok(Self {
            english: self
                .english
                .map(|t| required_text("english", &t))
                .transpose()?,
            russian: self
                .russian
                .map(|t| required_text("russian", &t))
                .transpose()?,
            example_english: self.example_english.map(|t| t.trim().to_string()),
            example_russian: self.example_russian.map(|t| t.trim().to_string()),
            is_favorite: self.is_favorite,
        })
    }
}

fn required_text(field: &str, value: &str) -> crate::error::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::error::ApiError::BadRequest(format!(
            "{field} must not be empty"
        )));
    }
    if trimmed.chars().count() > MAX_TEXT_CHARS {
        return Err(crate::error::ApiError::BadRequest(format!(
            "{field} must be at most {MAX_TEXT_CHARS} characters"
        )));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerListResponse {
    pub answers: Vec<Answer>,
}

// Study types
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NextWordQuery {
    #[serde(default)]
    pub favorite_only: bool,
    pub exclude_id: Option<i64>,
}

impl From<NextWordQuery> for SelectionCriteria {
    fn from(query: NextWordQuery) -> Self {
        SelectionCriteria {
            favorite_only: query.favorite_only,
            exclude_id: query.exclude_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    pub word_id: i64,
    pub answer: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckAnswerResponse {
    pub answer_id: i64,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}
