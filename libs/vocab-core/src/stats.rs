//! Progress statistics derived from word and answer counts.

use serde::{Deserialize, Serialize};

/// Raw counts gathered from storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressCounts {
    pub total_words: u64,
    pub favorite_words: u64,
    /// Words with at least one correct answer.
    pub learned_words: u64,
    pub total_answers: u64,
    pub correct_answers: u64,
    pub synonym_answers: u64,
}

/// Learner progress: counts plus derived ratios in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(flatten)]
    pub counts: ProgressCounts,
    pub accuracy: f64,
    pub learned_ratio: f64,
}

impl Progress {
    pub fn from_counts(counts: ProgressCounts) -> Self {
        Self {
            accuracy: ratio(counts.correct_answers, counts.total_answers),
            learned_ratio: ratio(counts.learned_words, counts.total_words),
            counts,
        }
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64).min(1.0)
}
