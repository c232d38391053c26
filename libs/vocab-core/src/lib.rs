//! Core vocabulary library shared by the backend service.
//!
//! Provides:
//! - Answer evaluation for typed answers (exact, synonym, prefix, substring, near-miss)
//! - Levenshtein edit distance
//! - Synonym sets loaded from static JSON data
//! - Study word selection (unmastered first, oldest first)
//! - Progress aggregation over word and answer counts
//! - Shared types (Word, Answer, filters)

pub mod error;
pub mod matching;
pub mod selection;
pub mod stats;
pub mod synonyms;
pub mod types;

pub use error::{Result, VocabError};
pub use matching::{
    evaluate, levenshtein_distance, levenshtein_within, normalize, Evaluation, Outcome,
    NEAR_MISS_MAX_DISTANCE,
};
pub use selection::{select_next, SelectionCriteria};
pub use stats::{Progress, ProgressCounts};
pub use synonyms::{Synonym, SynonymIndex, SynonymSet};
pub use types::{Answer, AnswerFilter, NewAnswer, Word, WordFilter};
