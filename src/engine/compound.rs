//! Compound phrase resolution
//!
//! Multi-word phrases such as "dark elf" can have their own dictionary entry,
//! which must win over translating each word on its own. Starting at a word
//! token, the resolver collects the following words up to
//! [`MAX_COMPOUND_WORDS`], stopping at any separator that contains a visible
//! character, then looks up the phrases from longest to shortest.

use super::dictionary::{Dictionary, DictionaryEntry, lookup_cased};
use super::language::Direction;
use super::tokenizer::Token;

/// Longest phrase, in words, that is looked up as a unit
pub const MAX_COMPOUND_WORDS: usize = 4;

/// Tokens scanned from the first word: words with a separator between each pair
const WINDOW_TOKENS: usize = MAX_COMPOUND_WORDS * 2 - 1;

/// The run of tokens, starting at a word, that may form a compound
#[derive(Debug)]
pub struct PhraseWindow<'a> {
    tokens: &'a [Token],
    /// Offsets (relative to the window start) of the word tokens, ascending
    word_offsets: Vec<usize>,
}

impl<'a> PhraseWindow<'a> {
    /// Scan forward from `start`. Whitespace separators are crossed,
    /// punctuation ends the window.
    pub fn scan(tokens: &'a [Token], start: usize) -> Self {
        let end = tokens.len().min(start + WINDOW_TOKENS);
        let slice = tokens.get(start..end).unwrap_or(&[]);

        let mut word_offsets = Vec::new();
        for (offset, token) in slice.iter().enumerate() {
            if token.is_word {
                word_offsets.push(offset);
                if word_offsets.len() == MAX_COMPOUND_WORDS {
                    break;
                }
            } else if token.is_punctuation() {
                break;
            }
        }

        Self {
            tokens: slice,
            word_offsets,
        }
    }

    /// Number of words reachable from the start
    pub fn word_count(&self) -> usize {
        self.word_offsets.len()
    }

    /// Candidate phrases of two or more words, longest first, as
    /// `(words, tokens consumed, phrase text)`. Internal separators are kept verbatim.
    pub fn candidates(&self) -> impl Iterator<Item = (usize, usize, String)> + '_ {
        self.word_offsets
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .map(|(index, &offset)| {
                let consumed = offset + 1;
                let phrase: String = self.tokens[..consumed]
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect();
                (index + 1, consumed, phrase)
            })
    }
}

/// A phrase found in the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundMatch {
    /// Source phrase as written
    pub source: String,
    /// Words in the phrase
    pub words: usize,
    /// Tokens consumed, separators included
    pub consumed: usize,
    /// Case-restored dictionary entry
    pub entry: DictionaryEntry,
}

/// Find the longest dictionary phrase starting at the word token `start`
pub fn resolve_compound<D: Dictionary + ?Sized>(
    dictionary: &D,
    tokens: &[Token],
    start: usize,
    direction: Direction,
) -> Option<CompoundMatch> {
    let window = PhraseWindow::scan(tokens, start);
    window
        .candidates()
        .find_map(|(words, consumed, phrase)| {
            lookup_cased(dictionary, &phrase, direction).map(|entry| CompoundMatch {
                source: phrase,
                words,
                consumed,
                entry,
            })
        })
}
