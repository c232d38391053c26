//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors that can occur while loading vocabulary data.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("invalid synonym data: {0}")]
    SynonymData(#[from] serde_json::Error),

    #[error("invalid synonym entry for {key:?}: blank key or synonym")]
    InvalidSynonymEntry { key: String },
}
