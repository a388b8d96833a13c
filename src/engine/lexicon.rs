//! In-memory lexicon and its JSON loader
//!
//! The lexicon file is a JSON array of rows, one per word pair:
//!
//! ```json
//! [
//!     { "drow": "jal", "common": "elf", "notes": "noun" },
//!     { "drow": "ussta", "common": "my" }
//! ]
//! ```
//!
//! Each row is indexed in both directions. Keys are stored lowercase; when a
//! key appears more than once the first row wins.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::dictionary::{Dictionary, DictionaryEntry};
use super::error::{TranslateError, TranslateResult};
use super::language::{Direction, Language};

/// Read-only word table for both directions
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    to_drow: HashMap<String, DictionaryEntry>,
    to_common: HashMap<String, DictionaryEntry>,
}

#[derive(Debug, Deserialize)]
struct LexiconRow {
    drow: String,
    common: String,
    #[serde(default)]
    notes: Option<String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, direction: Direction) -> &HashMap<String, DictionaryEntry> {
        match direction.to {
            Language::Drow => &self.to_drow,
            Language::Common => &self.to_common,
        }
    }

    fn table_mut(&mut self, direction: Direction) -> &mut HashMap<String, DictionaryEntry> {
        match direction.to {
            Language::Drow => &mut self.to_drow,
            Language::Common => &mut self.to_common,
        }
    }

    /// Insert an entry unless `word` is already present. Returns whether it was inserted.
    pub fn insert(&mut self, direction: Direction, word: &str, entry: DictionaryEntry) -> bool {
        let key = word.trim().to_lowercase();
        if key.is_empty() {
            return false;
        }
        let table = self.table_mut(direction);
        if table.contains_key(&key) {
            return false;
        }
        table.insert(key, entry);
        true
    }

    pub fn with_entry(&mut self, direction: Direction, word: &str, translation: &str) -> &mut Self {
        self.insert(direction, word, DictionaryEntry::new(translation));
        self
    }

    /// Add a word pair in both directions
    pub fn with_pair(&mut self, common: &str, drow: &str) -> &mut Self {
        self.with_entry(Direction::TO_DROW, common, drow)
            .with_entry(Direction::TO_COMMON, drow, common)
    }

    /// Number of entries for `direction`
    pub fn len(&self, direction: Direction) -> usize {
        self.table(direction).len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_drow.is_empty() && self.to_common.is_empty()
    }

    fn add_row(&mut self, row: LexiconRow) {
        let notes = row.notes.filter(|n| !n.is_empty());

        let mut to_drow = DictionaryEntry::new(row.drow.clone());
        to_drow.notes = notes.clone();
        if !self.insert(Direction::TO_DROW, &row.common, to_drow) && row.common.trim().is_empty() {
            warn!("Lexicon row for Drow '{}' has no Common word, skipping", row.drow);
        }

        let mut to_common = DictionaryEntry::new(row.common.clone());
        to_common.notes = notes;
        if !self.insert(Direction::TO_COMMON, &row.drow, to_common) && row.drow.trim().is_empty() {
            warn!("Lexicon row for Common '{}' has no Drow word, skipping", row.common);
        }
    }
}

impl Dictionary for Lexicon {
    fn lookup(&self, word: &str, direction: Direction) -> Option<DictionaryEntry> {
        self.table(direction).get(word).cloned()
    }
}

/// Parse a lexicon from JSON text
pub fn load_lexicon_from_str(content: &str) -> Result<Lexicon, serde_json::Error> {
    let rows: Vec<LexiconRow> = serde_json::from_str(content)?;
    let mut lexicon = Lexicon::new();
    for row in rows {
        lexicon.add_row(row);
    }
    Ok(lexicon)
}

/// Load a lexicon from a JSON file
///
/// # Errors
/// - File missing or unreadable
/// - Invalid JSON, or rows missing the `drow`/`common` fields
pub fn load_lexicon_from_file(path: &Path) -> TranslateResult<Lexicon> {
    let content = fs::read_to_string(path).map_err(|source| TranslateError::LexiconIo {
        path: path.to_path_buf(),
        source,
    })?;

    let lexicon =
        load_lexicon_from_str(&content).map_err(|source| TranslateError::LexiconParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Loaded lexicon from {}: {} Common→Drow, {} Drow→Common entries",
        path.display(),
        lexicon.len(Direction::TO_DROW),
        lexicon.len(Direction::TO_COMMON)
    );
    if lexicon.is_empty() {
        warn!("Lexicon {} contains no entries", path.display());
    }

    Ok(lexicon)
}
