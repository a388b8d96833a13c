//! Morphological fallbacks for single words
//!
//! Pure functions that strip an inflection from a source word to produce
//! lookup candidates, and reapply the matching inflection to a translated
//! word. The translator tries the candidates from [`fallback_candidates`] in
//! order and stops at the first dictionary hit; contraction splitting comes
//! last because it changes the number of output words.

use super::inflection;
use super::language::{Direction, Language};

/// Inflection stripped from a source word to reach a lookup candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inflection {
    /// The word as written
    None,
    /// `'s` or `s'` removed
    Possessive,
    /// Plural ending removed
    Plural,
    /// Possessive removed, then plural ending removed
    PluralPossessive,
}

/// A word to look up, and how to inflect its translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: String,
    pub inflection: Inflection,
}

impl Candidate {
    fn new(word: impl Into<String>, inflection: Inflection) -> Self {
        Self {
            word: word.into(),
            inflection,
        }
    }
}

/// All lookup candidates for `token`, in the order they must be tried:
/// the token itself, its possessive base, its singular forms, then the
/// singular forms of its possessive base.
pub fn fallback_candidates(token: &str, direction: Direction) -> Vec<Candidate> {
    let mut candidates = vec![Candidate::new(token, Inflection::None)];

    let possessive_base = unpossessivize(token);
    if let Some(base) = &possessive_base {
        candidates.push(Candidate::new(base.clone(), Inflection::Possessive));
    }

    candidates.extend(
        unpluralize(token, direction.from)
            .into_iter()
            .map(|word| Candidate::new(word, Inflection::Plural)),
    );

    if let Some(base) = &possessive_base {
        candidates.extend(
            unpluralize(base, direction.from)
                .into_iter()
                .map(|word| Candidate::new(word, Inflection::PluralPossessive)),
        );
    }

    candidates
}

/// Reapply `inflection` to a translated word
pub fn reinflect(translated: &str, inflection: Inflection, direction: Direction) -> String {
    match inflection {
        Inflection::None => translated.to_string(),
        Inflection::Possessive => possessivize(translated),
        Inflection::Plural => pluralize(translated, direction.to),
        Inflection::PluralPossessive => possessivize(&pluralize(translated, direction.to)),
    }
}

/// Strip a possessive ending: `'s` is removed, `s'` becomes `s`.
/// Returns `None` when the word has no possessive ending or nothing is left.
pub fn unpossessivize(word: &str) -> Option<String> {
    let base = if let Some(stem) = word.strip_suffix("'s") {
        stem.to_string()
    } else if word.ends_with("s'") {
        // keep the plural s, drop the apostrophe
        word[..word.len() - 1].to_string()
    } else {
        return None;
    };
    if base.is_empty() { None } else { Some(base) }
}

/// Mark a word as possessive: `'` after a final `s`, `'s` otherwise
pub fn possessivize(word: &str) -> String {
    if word.chars().last().is_some_and(|c| c.eq_ignore_ascii_case(&'s')) {
        format!("{}'", word)
    } else {
        format!("{}'s", word)
    }
}

/// Singular candidates for a plural word in language `from`
///
/// Drow plurals end in `n` or `en`; both strippings are offered, `n` first.
/// Common words are singularized with English rules, and only offered when
/// that changes the word.
pub fn unpluralize(word: &str, from: Language) -> Vec<String> {
    let mut forms = Vec::new();
    match from {
        Language::Drow => {
            if let Some(stem) = word.strip_suffix('n') {
                forms.push(stem.to_string());
            }
            if let Some(stem) = word.strip_suffix("en") {
                forms.push(stem.to_string());
            }
        }
        Language::Common => {
            let singular = inflection::singularize(word);
            if singular != word {
                forms.push(singular);
            }
        }
    }
    forms.retain(|form| !form.is_empty());
    forms
}

/// Plural of a translated word in language `to`
///
/// Drow appends `n` after a vowel and `en` after anything else.
pub fn pluralize(word: &str, to: Language) -> String {
    match to {
        Language::Drow => {
            let ends_in_vowel = word
                .chars()
                .last()
                .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
            if ends_in_vowel {
                format!("{}n", word)
            } else {
                format!("{}en", word)
            }
        }
        Language::Common => inflection::pluralize(word),
    }
}

/// Contraction suffixes and their expansions, checked in this order
const CONTRACTIONS: [(&str, &str); 7] = [
    ("'d", "would"),
    ("'ve", "have"),
    ("n't", "not"),
    ("'ll", "will"),
    ("'re", "are"),
    ("'m", "am"),
    ("'s", "is"),
];

/// A contraction split into its stem and expanded word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contraction {
    pub stem: String,
    pub expansion: &'static str,
}

impl Contraction {
    /// Output parts in order: stem, separator, expansion
    pub fn parts(&self) -> [&str; 3] {
        [self.stem.as_str(), " ", self.expansion]
    }
}

/// Split a Common contraction (`don't` → `do` + `not`). The first matching
/// suffix wins. Drow has no contractions.
pub fn split_contraction(word: &str, from: Language) -> Option<Contraction> {
    if from != Language::Common {
        return None;
    }
    CONTRACTIONS.iter().find_map(|&(suffix, expansion)| {
        word.strip_suffix(suffix).map(|stem| Contraction {
            stem: stem.to_string(),
            expansion,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Possessive Tests ==========

    #[test]
    fn test_unpossessivize_apostrophe_s() {
        assert_eq!(unpossessivize("elf's").as_deref(), Some("elf"));
    }

    #[test]
    fn test_suffixes_are_case_sensitive() {
        assert_eq!(unpossessivize("ELF'S"), None);
        assert_eq!(unpossessivize("ELVES'"), None);
        assert!(split_contraction("DON'T", Language::Common).is_none());
        assert!(unpluralize("JALEN", Language::Drow).is_empty());
    }

    #[test]
    fn test_unpossessivize_s_apostrophe_keeps_s() {
        assert_eq!(unpossessivize("elves'").as_deref(), Some("elves"));
    }

    #[test]
    fn test_unpossessivize_plain_word() {
        assert_eq!(unpossessivize("elf"), None);
        assert_eq!(unpossessivize("'s"), None);
    }

    #[test]
    fn test_possessivize() {
        assert_eq!(possessivize("xyr"), "xyr's");
        assert_eq!(possessivize("xyrs"), "xyrs'");
        assert_eq!(possessivize("XYRS"), "XYRS'");
    }

    // ========== Plural Tests ==========

    #[test]
    fn test_unpluralize_drow_both_forms() {
        assert_eq!(unpluralize("jalen", Language::Drow), vec!["jale", "jal"]);
        assert_eq!(unpluralize("dron", Language::Drow), vec!["dro"]);
        assert!(unpluralize("jal", Language::Drow).is_empty());
    }

    #[test]
    fn test_unpluralize_common() {
        assert_eq!(unpluralize("cats", Language::Common), vec!["cat"]);
        assert_eq!(unpluralize("children", Language::Common), vec!["child"]);
        assert!(unpluralize("cat", Language::Common).is_empty());
    }

    #[test]
    fn test_pluralize_drow_vowel_rule() {
        assert_eq!(pluralize("dro", Language::Drow), "dron");
        assert_eq!(pluralize("ussta", Language::Drow), "usstan");
        assert_eq!(pluralize("fel", Language::Drow), "felen");
        assert_eq!(pluralize("JAL", Language::Drow), "JALen");
    }

    #[test]
    fn test_pluralize_common() {
        assert_eq!(pluralize("spider", Language::Common), "spiders");
        assert_eq!(pluralize("elf", Language::Common), "elves");
    }

    // ========== Contraction Tests ==========

    #[test]
    fn test_split_contraction_table() {
        let cases = [
            ("I'd", "I", "would"),
            ("we've", "we", "have"),
            ("don't", "do", "not"),
            ("you'll", "you", "will"),
            ("they're", "they", "are"),
            ("I'm", "I", "am"),
            ("it's", "it", "is"),
        ];
        for (word, stem, expansion) in cases {
            let contraction = split_contraction(word, Language::Common).unwrap();
            assert_eq!(contraction.stem, stem, "stem of {}", word);
            assert_eq!(contraction.expansion, expansion, "expansion of {}", word);
        }
    }

    #[test]
    fn test_split_contraction_only_from_common() {
        assert!(split_contraction("don't", Language::Drow).is_none());
        assert!(split_contraction("elf", Language::Common).is_none());
    }

    #[test]
    fn test_contraction_parts() {
        let contraction = split_contraction("don't", Language::Common).unwrap();
        assert_eq!(contraction.parts(), ["do", " ", "not"]);
    }

    // ========== Candidate Order Tests ==========

    #[test]
    fn test_candidates_order_common() {
        let candidates = fallback_candidates("spiders'", Direction::TO_DROW);
        let expected = vec![
            Candidate::new("spiders'", Inflection::None),
            Candidate::new("spiders", Inflection::Possessive),
            Candidate::new("spider", Inflection::PluralPossessive),
        ];
        assert_eq!(candidates, expected);
    }

    #[test]
    fn test_candidates_order_drow() {
        let candidates = fallback_candidates("jalen's", Direction::TO_COMMON);
        let words: Vec<(&str, Inflection)> = candidates
            .iter()
            .map(|c| (c.word.as_str(), c.inflection))
            .collect();
        assert_eq!(
            words,
            vec![
                ("jalen's", Inflection::None),
                ("jalen", Inflection::Possessive),
                ("jale", Inflection::PluralPossessive),
                ("jal", Inflection::PluralPossessive),
            ]
        );
    }

    #[test]
    fn test_reinflect() {
        assert_eq!(reinflect("orbb", Inflection::None, Direction::TO_DROW), "orbb");
        assert_eq!(reinflect("orbb", Inflection::Possessive, Direction::TO_DROW), "orbb's");
        assert_eq!(reinflect("orbb", Inflection::Plural, Direction::TO_DROW), "orbben");
        assert_eq!(
            reinflect("orbb", Inflection::PluralPossessive, Direction::TO_DROW),
            "orbben's"
        );
        assert_eq!(
            reinflect("spider", Inflection::PluralPossessive, Direction::TO_COMMON),
            "spiders'"
        );
    }
}
