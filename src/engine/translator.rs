//! Translation dispatcher
//!
//! Walks the token stream left to right. Non-word tokens are copied through.
//! At each word the compound resolver runs first; if no phrase matches, the
//! word goes through the morphological fallback chain; if that fails too, the
//! word is copied through unchanged. The walk is strictly sequential because
//! a compound match decides where the next step starts.
//!
//! # Example
//!
//! ```
//! use drow_translatascan::{Direction, Lexicon, Translator};
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.with_pair("elf", "jal");
//!
//! let translator = Translator::new(lexicon);
//! assert_eq!(translator.translate("The Elf's blade.", Direction::TO_DROW), "The Jal's blade.");
//! ```

use tracing::debug;

use super::compound::resolve_compound;
use super::dictionary::{Dictionary, lookup_cased};
use super::language::Direction;
use super::morphology::{self, Inflection};
use super::tokenizer::{Token, tokenize};

/// The rule that produced a translated segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Multi-word phrase entry
    Compound { words: usize },
    /// The word as written
    Direct,
    Possessive,
    Plural,
    PluralPossessive,
    /// Split into stem and expanded word, each translated on its own
    Contraction,
}

impl From<Inflection> for Rule {
    fn from(inflection: Inflection) -> Self {
        match inflection {
            Inflection::None => Rule::Direct,
            Inflection::Possessive => Rule::Possessive,
            Inflection::Plural => Rule::Plural,
            Inflection::PluralPossessive => Rule::PluralPossessive,
        }
    }
}

/// One emitted piece of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Source text covered by this segment
    pub source: String,
    /// Text emitted for it
    pub output: String,
    /// `None` for passthrough
    pub rule: Option<Rule>,
    /// Dictionary notes of the entry that matched
    pub notes: Option<String>,
}

impl Segment {
    fn passthrough(token: &Token) -> Self {
        Self {
            source: token.text.clone(),
            output: token.text.clone(),
            rule: None,
            notes: None,
        }
    }

    pub fn is_translated(&self) -> bool {
        self.rule.is_some()
    }
}

/// Translates running text against a [`Dictionary`]
///
/// Holds no state besides the dictionary, so one translator can serve any
/// number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Translator<D> {
    dictionary: D,
}

impl<D: Dictionary> Translator<D> {
    pub fn new(dictionary: D) -> Self {
        Self { dictionary }
    }

    /// Translate `text`. Untranslatable words are kept as written, so text
    /// with nothing to translate comes back unchanged apart from whitespace
    /// runs collapsing to single spaces.
    pub fn translate(&self, text: &str, direction: Direction) -> String {
        self.translate_segments(text, direction)
            .into_iter()
            .map(|segment| segment.output)
            .collect()
    }

    /// Translate `text`, keeping the per-segment record of what matched
    pub fn translate_segments(&self, text: &str, direction: Direction) -> Vec<Segment> {
        let tokens = tokenize(text);
        let mut segments = Vec::with_capacity(tokens.len());

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if !token.is_word {
                segments.push(Segment::passthrough(token));
                i += 1;
                continue;
            }

            if let Some(found) = resolve_compound(&self.dictionary, &tokens, i, direction) {
                debug!(
                    "compound '{}' ({} words) → '{}'",
                    found.source, found.words, found.entry.translation
                );
                segments.push(Segment {
                    source: found.source,
                    output: found.entry.translation,
                    rule: Some(Rule::Compound { words: found.words }),
                    notes: found.entry.notes,
                });
                i += found.consumed;
                continue;
            }

            let segment = self
                .translate_word(&token.text, direction)
                .unwrap_or_else(|| Segment::passthrough(token));
            segments.push(segment);
            i += 1;
        }

        segments
    }

    /// Run the fallback chain on a single word
    fn translate_word(&self, word: &str, direction: Direction) -> Option<Segment> {
        for candidate in morphology::fallback_candidates(word, direction) {
            let Some(entry) = lookup_cased(&self.dictionary, &candidate.word, direction) else {
                continue;
            };
            let rule = Rule::from(candidate.inflection);
            let output = morphology::reinflect(&entry.translation, candidate.inflection, direction);
            debug!("'{}' via {:?} '{}' → '{}'", word, rule, candidate.word, output);
            return Some(Segment {
                source: word.to_string(),
                output,
                rule: Some(rule),
                notes: entry.notes,
            });
        }

        let contraction = morphology::split_contraction(word, direction.from)?;
        let output: String = contraction
            .parts()
            .iter()
            .map(|part| {
                if !part.chars().any(is_word_char) {
                    return part.to_string();
                }
                lookup_cased(&self.dictionary, part, direction)
                    .map(|entry| entry.translation)
                    .unwrap_or_else(|| part.to_string())
            })
            .collect();
        debug!("'{}' split as contraction → '{}'", word, output);

        Some(Segment {
            source: word.to_string(),
            output,
            rule: Some(Rule::Contraction),
            notes: None,
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::lexicon::Lexicon;

    fn translator() -> Translator<Lexicon> {
        let mut lexicon = Lexicon::new();
        lexicon
            .with_pair("elf", "jal")
            .with_pair("spider", "orbb")
            .with_pair("life", "dro")
            .with_pair("dark elf", "ilythiiri")
            .with_pair("dark", "olath")
            .with_pair("not", "naut");
        Translator::new(lexicon)
    }

    // ========== Dispatch Tests ==========

    #[test]
    fn test_non_word_tokens_pass_through() {
        let translator = translator();
        assert_eq!(translator.translate("... !?", Direction::TO_DROW), "... !?");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        let translator = translator();
        assert_eq!(
            translator.translate("Nothing here, friend.", Direction::TO_DROW),
            "Nothing here, friend."
        );
    }

    #[test]
    fn test_compound_consumes_tokens() {
        let translator = translator();
        let segments = translator.translate_segments("dark elf spider", Direction::TO_DROW);
        let outputs: Vec<&str> = segments.iter().map(|s| s.output.as_str()).collect();
        assert_eq!(outputs, vec!["ilythiiri", " ", "orbb"]);
        assert_eq!(segments[0].rule, Some(Rule::Compound { words: 2 }));
        assert_eq!(segments[2].rule, Some(Rule::Direct));
    }

    #[test]
    fn test_each_rule_reported() {
        let translator = translator();
        let segments =
            translator.translate_segments("elf's spiders elves' don't", Direction::TO_DROW);
        let rules: Vec<Option<Rule>> = segments
            .iter()
            .filter(|s| s.source.trim() != "")
            .map(|s| s.rule)
            .collect();
        assert_eq!(
            rules,
            vec![
                Some(Rule::Possessive),
                Some(Rule::Plural),
                Some(Rule::PluralPossessive),
                Some(Rule::Contraction),
            ]
        );
    }

    #[test]
    fn test_contraction_translates_halves() {
        let translator = translator();
        assert_eq!(translator.translate("don't", Direction::TO_DROW), "do naut");
    }

    #[test]
    fn test_drow_to_common_plural() {
        let translator = translator();
        assert_eq!(translator.translate("jalen", Direction::TO_COMMON), "elves");
        assert_eq!(translator.translate("dron", Direction::TO_COMMON), "lives");
    }

    #[test]
    fn test_no_contractions_from_drow() {
        let translator = translator();
        assert_eq!(translator.translate("don't", Direction::TO_COMMON), "don't");
    }

    #[test]
    fn test_segments_concatenate_to_translation() {
        let translator = translator();
        let text = "The dark elf's spiders, and life!";
        let joined: String = translator
            .translate_segments(text, Direction::TO_DROW)
            .into_iter()
            .map(|s| s.output)
            .collect();
        assert_eq!(joined, translator.translate(text, Direction::TO_DROW));
    }
}
