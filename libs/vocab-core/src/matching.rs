//! Answer evaluation for typed answers.

use serde::{Deserialize, Serialize};

use crate::synonyms::SynonymSet;

/// Largest edit distance still reported as a near miss.
pub const NEAR_MISS_MAX_DISTANCE: usize = 2;

const SYNONYM_HINT: &str = "That's a synonym. Try the exact word.";
const SUBSTRING_HINT: &str = "Partially correct.";
const NEAR_MISS_HINT: &str = "Close! Check your spelling.";

/// Classification of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Exact,
    /// A known synonym of the target. Not counted as correct.
    Synonym,
    /// The target starts with the submission.
    Prefix { remaining: usize },
    /// The target contains the submission somewhere after its start.
    Substring,
    /// Within `NEAR_MISS_MAX_DISTANCE` edits of the target.
    NearMiss { distance: usize },
    Incorrect,
}

impl Outcome {
    /// Prefix, substring and near-miss outcomes.
    pub fn is_partial(&self) -> bool {
        matches!(
            self,
            Self::Prefix { .. } | Self::Substring | Self::NearMiss { .. }
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Synonym => "synonym",
            Self::Prefix { .. } => "prefix",
            Self::Substring => "substring",
            Self::NearMiss { .. } => "near_miss",
            Self::Incorrect => "incorrect",
        }
    }

    /// Feedback shown to the learner, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Exact | Self::Incorrect => None,
            Self::Synonym => Some(SYNONYM_HINT.to_string()),
            Self::Prefix { remaining: 1 } => Some("Almost! 1 more letter to go.".to_string()),
            Self::Prefix { remaining } => Some(format!("Almost! {remaining} more letters to go.")),
            Self::Substring => Some(SUBSTRING_HINT.to_string()),
            Self::NearMiss { .. } => Some(NEAR_MISS_HINT.to_string()),
        }
    }
}

/// Result of evaluating a submitted answer against a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub outcome: Outcome,
    /// True only for exact matches.
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Canonical answer text, always populated so it can be displayed.
    pub correct_answer: String,
    /// Normalized submission.
    pub submitted: String,
    /// Usage context of the matched synonym.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonym_context: Option<String>,
}

/// Lowercase and trim surrounding whitespace.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Evaluate a submitted answer against the target word.
///
/// Checks run in a fixed order and the first match wins: exact, synonym,
/// prefix, substring, near miss. An empty submission only ever matches an
/// empty target.
pub fn evaluate(submitted: &str, target: &str, synonyms: Option<&SynonymSet>) -> Evaluation {
    let submitted = normalize(submitted);
    let normalized_target = normalize(target);

    let mut synonym_context = None;
    let outcome = if submitted == normalized_target {
        Outcome::Exact
    } else if submitted.is_empty() {
        Outcome::Incorrect
    } else if let Some(synonym) = synonyms.and_then(|set| set.find(&submitted)) {
        synonym_context = synonym.context.clone();
        Outcome::Synonym
    } else if normalized_target.starts_with(&submitted) {
        Outcome::Prefix {
            remaining: normalized_target.chars().count() - submitted.chars().count(),
        }
    } else if normalized_target.contains(&submitted) {
        Outcome::Substring
    } else {
        match levenshtein_within(&submitted, &normalized_target, NEAR_MISS_MAX_DISTANCE) {
            Some(distance) => Outcome::NearMiss { distance },
            None => Outcome::Incorrect,
        }
    };

    Evaluation {
        outcome,
        is_correct: outcome == Outcome::Exact,
        hint: outcome.hint(),
        correct_answer: target.trim().to_string(),
        submitted,
        synonym_context,
    }
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let max = a_chars.len().max(b_chars.len());

    // The distance never exceeds the longer length, so the band covers the whole matrix
    bounded_distance(&a_chars, &b_chars, max).unwrap_or(max)
}

/// Levenshtein distance if it is at most `max`, `None` otherwise.
///
/// Runs in `O(len * max)`, so long inputs stay cheap for small bounds.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    bounded_distance(&a_chars, &b_chars, max)
}

fn bounded_distance(a: &[char], b: &[char], max: usize) -> Option<usize> {
    let m = a.len();
    let n = b.len();

    if m.abs_diff(n) > max {
        return None;
    }
    if m == 0 || n == 0 {
        return Some(m.max(n));
    }

    // Cells further than `max` from the diagonal cost more than `max`; they are clamped to `over`
    let over = max.saturating_add(1);
    let mut prev: Vec<usize> = (0..=n).map(|j| j.min(over)).collect();
    let mut curr = vec![over; n + 1];

    for i in 1..=m {
        let lo = if i > max { i - max } else { 1 };
        let hi = i.saturating_add(max).min(n);

        curr[lo - 1] = if lo == 1 { i.min(over) } else { over };
        let mut row_min = curr[lo - 1];

        for j in lo..=hi {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost) // substitution
                .min(over);
            row_min = row_min.min(curr[j]);
        }
        if hi < n {
            curr[hi + 1] = over;
        }

        if row_min > max {
            return None;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    Some(prev[n]).filter(|&d| d <= max)
}
