//! Error types for translation and lexicon loading.
//!
//! Translation errors never escape the public facade: they are folded into a
//! not-found result. Lexicon errors only arise when loading a custom file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while processing a single query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Only raised when a length cap has been configured.
    #[error("input is {len} characters long, the limit is {max}")]
    InputTooLong { len: usize, max: usize },
}

/// Errors raised while loading a lexicon from disk.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record broke the lexicon invariants (empty field, no region).
    #[error("lexicon record #{index} ('{word}') is invalid: {reason}")]
    InvalidRecord {
        index: usize,
        word: String,
        reason: String,
    },
}
