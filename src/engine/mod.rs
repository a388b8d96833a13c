//! Translation Engine
//!
//! Dictionary-driven translation between Common and Drow. The engine is a
//! pipeline over a token stream:
//!
//! 1. **Tokenizer** - splits text into word and non-word tokens
//! 2. **Compound Resolver** - prefers multi-word dictionary phrases, longest first
//! 3. **Morphology** - possessive, plural and contraction fallbacks for single words
//! 4. **Case Normalizer** - carries source capitalization onto each translation
//! 5. **Translator** - drives the above and reassembles the output text
//!
//! The only external dependency is a read-only [`Dictionary`]; the in-memory
//! [`Lexicon`] implements it and can be loaded from a JSON file.

pub mod case;
pub mod compound;
pub mod dictionary;
pub mod error;
pub mod inflection;
pub mod language;
pub mod lexicon;
pub mod morphology;
pub mod tokenizer;
pub mod translator;


pub use case::{CaseProfile, restore_case};
pub use compound::{CompoundMatch, MAX_COMPOUND_WORDS, PhraseWindow, resolve_compound};
pub use dictionary::{Dictionary, DictionaryEntry, lookup_cased};
pub use error::{TranslateError, TranslateResult};
pub use language::{Direction, Language};
pub use lexicon::{Lexicon, load_lexicon_from_file, load_lexicon_from_str};
pub use morphology::{Candidate, Contraction, Inflection};
pub use tokenizer::{Token, tokenize};
pub use translator::{Rule, Segment, Translator};
