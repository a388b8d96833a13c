//! Drow Translatascan
//!
//! Translates running text between Common and Drow using a bidirectional
//! word dictionary, with compound phrase matching and morphological
//! fallbacks for possessives, plurals and contractions. Punctuation and
//! capitalization are preserved.
//!
//! # Example
//!
//! ```no_run
//! use drow_translatascan::{Direction, Language, Translator, load_lexicon_from_file};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Load the lexicon once; it is read-only from here on
//!     let lexicon = load_lexicon_from_file(Path::new("data/drow_dictionary.json"))?;
//!
//!     // 2. Build a translator around it
//!     let translator = Translator::new(lexicon);
//!
//!     // 3. Translate towards a target language
//!     let direction = Direction::towards("Drow".parse::<Language>()?);
//!     println!("{}", translator.translate("The dark elf's spiders.", direction));
//!     Ok(())
//! }
//! ```

pub mod engine;

pub use engine::{
    Dictionary, DictionaryEntry, Direction, Language, Lexicon, Rule, Segment, TranslateError,
    TranslateResult, Translator, load_lexicon_from_file, load_lexicon_from_str, tokenize,
};

/// Reply to a version probe
pub const GREETING: &str = "Welcome to Drow Translatascan.";
