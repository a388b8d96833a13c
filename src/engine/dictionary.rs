//! Dictionary lookup capability
//!
//! The engine only needs one operation from its backing store: a point
//! lookup of a lowercase source word in a given direction. Keeping the seam
//! this narrow lets tests run against an in-memory [`Lexicon`](super::Lexicon)
//! and keeps the engine free of any storage technology.

use super::case::restore_case;
use super::language::Direction;

/// A dictionary hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub translation: String,
    pub notes: Option<String>,
}

impl DictionaryEntry {
    pub fn new(translation: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Read-only word lookup
///
/// Implementations must be safe to share across concurrent requests.
/// `word` is always lowercase.
pub trait Dictionary: Send + Sync {
    fn lookup(&self, word: &str, direction: Direction) -> Option<DictionaryEntry>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn lookup(&self, word: &str, direction: Direction) -> Option<DictionaryEntry> {
        (**self).lookup(word, direction)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for std::sync::Arc<D> {
    fn lookup(&self, word: &str, direction: Direction) -> Option<DictionaryEntry> {
        (**self).lookup(word, direction)
    }
}

/// Look up `word` case-insensitively and carry its capitalization over to
/// the translation. An empty translation counts as a miss.
pub fn lookup_cased<D: Dictionary + ?Sized>(
    dictionary: &D,
    word: &str,
    direction: Direction,
) -> Option<DictionaryEntry> {
    if word.is_empty() {
        return None;
    }
    let entry = dictionary.lookup(&word.to_lowercase(), direction)?;
    if entry.translation.is_empty() {
        return None;
    }
    Some(DictionaryEntry {
        translation: restore_case(word, &entry.translation),
        notes: entry.notes,
    })
}
