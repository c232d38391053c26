//! Synonym sets consulted when an answer is not an exact match.
//!
//! Data format (JSON object keyed by canonical answer):
//! ```json
//! {
//!   "happy": [
//!     { "word": "glad", "context": "I am glad to see you." },
//!     "cheerful"
//!   ]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VocabError};
use crate::matching::normalize;

/// An acceptable alternative for a canonical answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// All synonyms of one canonical answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymSet {
    synonyms: Vec<Synonym>,
}

impl SynonymSet {
    pub fn new(synonyms: Vec<Synonym>) -> Self {
        Self { synonyms }
    }

    /// Find the synonym matching `submitted`, ignoring case and surrounding whitespace.
    pub fn find(&self, submitted: &str) -> Option<&Synonym> {
        let submitted = normalize(submitted);
        if submitted.is_empty() {
            return None;
        }
        self.synonyms.iter().find(|s| normalize(&s.word) == submitted)
    }

}

impl FromIterator<Synonym> for SynonymSet {
    fn from_iter<I: IntoIterator<Item = Synonym>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Entries may be written as plain strings or as `{word, context}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSynonym {
    Plain(String),
    Full(Synonym),
}

impl From<RawSynonym> for Synonym {
    fn from(raw: RawSynonym) -> Self {
        match raw {
            RawSynonym::Plain(word) => Synonym { word, context: None },
            RawSynonym::Full(synonym) => synonym,
        }
    }
}

/// Read-only mapping from canonical answer to its synonym set.
#[derive(Debug, Clone, Default)]
pub struct SynonymIndex {
    sets: HashMap<String, SynonymSet>,
}

impl SynonymIndex {
    /// Parse synonym data from JSON. Keys are normalized; duplicate keys
    /// (after normalization) are merged.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<RawSynonym>> = serde_json::from_str(json)?;

        let mut sets: HashMap<String, SynonymSet> = HashMap::with_capacity(raw.len());
        for (key, entries) in raw {
            let normalized = normalize(&key);
            if normalized.is_empty() {
                return Err(VocabError::InvalidSynonymEntry { key });
            }

            let set = sets.entry(normalized).or_default();
            for entry in entries {
                let synonym = Synonym::from(entry);
                if synonym.word.trim().is_empty() {
                    return Err(VocabError::InvalidSynonymEntry { key });
                }
                set.synonyms.push(synonym);
            }
        }

        Ok(Self { sets })
    }

    /// Synonym set for a canonical answer.
    pub fn get(&self, target: &str) -> Option<&SynonymSet> {
        self.sets.get(&normalize(target))
    }

    /// Number of canonical answers with synonyms.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
