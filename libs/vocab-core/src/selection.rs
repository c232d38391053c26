//! Study word selection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::Word;

/// Options for picking the next word to study.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCriteria {
    #[serde(default)]
    pub favorite_only: bool,
    /// Word to skip among unmastered candidates, usually the one just shown.
    #[serde(default)]
    pub exclude_id: Option<i64>,
}

/// Pick the next word to study.
///
/// Unmastered words come first, oldest first. `exclude_id` is skipped among
/// them. When every candidate is mastered the oldest word is returned so a
/// session never runs dry; `None` means the filtered set itself is empty.
pub fn select_next<'a>(
    words: &'a [Word],
    mastered: &HashSet<i64>,
    criteria: &SelectionCriteria,
) -> Option<&'a Word> {
    let mut candidates: Vec<&Word> = words
        .iter()
        .filter(|w| !criteria.favorite_only || w.is_favorite)
        .collect();
    candidates.sort_by_key(|w| (w.created_at, w.id));

    candidates
        .iter()
        .copied()
        .filter(|w| !mastered.contains(&w.id))
        .find(|w| Some(w.id) != criteria.exclude_id)
        .or_else(|| candidates.first().copied())
}
