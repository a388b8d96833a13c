//! Tokenizer
//!
//! Splits input text into an ordered list of word and non-word tokens.
//! Concatenating the tokens reproduces the input, except that a non-word run
//! made only of whitespace is normalized to a single space.

use std::sync::LazyLock;

use regex::Regex;

/// Word characters and apostrophes, optionally joined by one hyphen
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w']+-?[\w']*").expect("word pattern is valid"));

/// Any run of non-word characters, or of whitespace
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\W+|\s+)").expect("non-word pattern is valid"));

/// A span of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub is_word: bool,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_word: true,
        }
    }

    pub fn non_word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_word: false,
        }
    }

    /// True for a non-word token containing a visible character.
    /// Such tokens break compound phrases.
    pub fn is_punctuation(&self) -> bool {
        !self.is_word && has_visible_char(&self.text)
    }
}

pub(crate) fn has_visible_char(text: &str) -> bool {
    text.chars().any(|c| !c.is_whitespace())
}

/// Split `text` into tokens
///
/// At each position the longest word run is tried first, then the longest
/// non-word run. If neither matches, a single character is consumed as a
/// non-word token so the scan always advances.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut index = 0;

    while index < text.len() {
        let rest = &text[index..];

        if let Some(m) = WORD_RE.find(rest) {
            tokens.push(Token::word(m.as_str()));
            index += m.end();
            continue;
        }

        if let Some(m) = NON_WORD_RE.find(rest) {
            let span = m.as_str();
            if has_visible_char(span) {
                tokens.push(Token::non_word(span));
            } else {
                tokens.push(Token::non_word(" "));
            }
            index += m.end();
            continue;
        }

        let width = rest.chars().next().map_or(1, char::len_utf8);
        tokens.push(Token::non_word(&rest[..width]));
        index += width;
    }

    tokens
}
