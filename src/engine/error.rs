//! Error types for the translation engine

use std::path::PathBuf;

use thiserror::Error;

use super::language::Language;

/// Errors surfaced by the translation engine and its lexicon loader
///
/// Translation itself never fails: an untranslatable token is passed through.
/// These errors cover user input (language identifiers) and the backing store.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Language identifier is neither `Drow` nor `Common`
    #[error("Invalid language id: {0}")]
    InvalidLanguage(String),

    /// A direction was requested from a language to itself
    #[error("Source and target language are both {0}")]
    SameLanguage(Language),

    /// Lexicon file could not be read
    #[error("Failed to read lexicon '{}': {source}", .path.display())]
    LexiconIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lexicon file is not valid JSON in the expected row format
    #[error("Failed to parse lexicon '{}': {source}", .path.display())]
    LexiconParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for engine operations
pub type TranslateResult<T> = Result<T, TranslateError>;
