//! English plural and singular forms
//!
//! Rule-based inflection for the Common side. Rules are regular expressions
//! matched case-insensitively; later rules take priority over earlier ones,
//! so irregular words registered last override the general suffix rules.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static ENGLISH: LazyLock<Inflector> = LazyLock::new(Inflector::english);

/// Plural form of an English word. Words that already look plural are returned as-is.
pub fn pluralize(word: &str) -> String {
    ENGLISH.pluralize(word)
}

/// Singular form of an English word. Words that already look singular are returned as-is.
pub fn singularize(word: &str) -> String {
    ENGLISH.singularize(word)
}

struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: Regex::new(&format!("(?i){}", pattern)).expect("inflection rule is valid"),
            replacement: replacement.to_string(),
        }
    }

    fn apply(&self, word: &str) -> Option<String> {
        if !self.pattern.is_match(word) {
            return None;
        }
        Some(
            self.pattern
                .replace(word, self.replacement.as_str())
                .into_owned(),
        )
    }
}

/// A set of inflection rules for one language
pub struct Inflector {
    plurals: Vec<Rule>,
    singulars: Vec<Rule>,
    uncountables: HashSet<String>,
}

impl Inflector {
    fn empty() -> Self {
        Self {
            plurals: Vec::new(),
            singulars: Vec::new(),
            uncountables: HashSet::new(),
        }
    }

    fn add_plural(&mut self, pattern: &str, replacement: &str) {
        self.plurals.push(Rule::new(pattern, replacement));
    }

    fn add_singular(&mut self, pattern: &str, replacement: &str) {
        self.singulars.push(Rule::new(pattern, replacement));
    }

    /// Register an irregular pair. With `match_ending`, compounds ending in
    /// the word inflect the same way (woman → women).
    fn add_irregular(&mut self, singular: &str, plural: &str, match_ending: bool) {
        if match_ending {
            let (s_head, s_tail) = split_first(singular);
            let (p_head, p_tail) = split_first(plural);
            self.add_plural(
                &format!("({}){}$", s_head, s_tail),
                &format!("${{1}}{}", p_tail),
            );
            self.add_singular(
                &format!("({}){}$", p_head, p_tail),
                &format!("${{1}}{}", s_tail),
            );
        } else {
            self.add_plural(&format!("^{}$", singular), plural);
            self.add_singular(&format!("^{}$", plural), singular);
        }
    }

    fn add_uncountable(&mut self, word: &str) {
        self.uncountables.insert(word.to_lowercase());
    }

    fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(&word.to_lowercase())
    }

    fn apply_rules(&self, rules: &[Rule], word: &str) -> Option<String> {
        if word.is_empty() || self.is_uncountable(word) {
            return Some(word.to_string());
        }
        let result = rules.iter().rev().find_map(|rule| rule.apply(word))?;
        if word == word.to_uppercase() {
            Some(result.to_uppercase())
        } else {
            Some(result)
        }
    }

    pub fn pluralize(&self, word: &str) -> String {
        let result = self.apply_rules(&self.plurals, word);

        let as_singular = self.apply_rules(&self.singulars, word);
        if let Some(singular) = &as_singular {
            let round_trip = self.apply_rules(&self.plurals, singular);
            if singular != word
                && format!("{}s", singular) != word
                && round_trip.as_deref() == Some(word)
                && result.as_deref() != Some(word)
            {
                return word.to_string();
            }
        }

        result.unwrap_or_else(|| word.to_string())
    }

    pub fn singularize(&self, word: &str) -> String {
        let result = self.apply_rules(&self.singulars, word);
        let fallback = || result.clone().unwrap_or_else(|| word.to_string());

        let Some(as_plural) = self.apply_rules(&self.plurals, word) else {
            return fallback();
        };
        if as_plural == word || format!("{}s", word) == as_plural {
            return fallback();
        }

        let round_trip = self.apply_rules(&self.singulars, &as_plural);
        if round_trip.as_deref() != Some(word) || result.as_deref() == Some(word) {
            return fallback();
        }
        word.to_string()
    }

    /// The default English vocabulary
    pub fn english() -> Self {
        let mut v = Self::empty();

        v.add_plural("$", "s");
        v.add_plural("s$", "s");
        v.add_plural("(ax|test)is$", "${1}es");
        v.add_plural(
            "(octop|vir|alumn|fung|cact|foc|hippopotam|radi|stimul|syllab|nucle)us$",
            "${1}i",
        );
        v.add_plural(
            "(alias|bias|iris|status|campus|apparatus|virus|walrus|trellis)$",
            "${1}es",
        );
        v.add_plural(
            "(buffal|tomat|volcan|ech|embarg|her|mosquit|potat|torped|vet)o$",
            "${1}oes",
        );
        v.add_plural("([dti])um$", "${1}a");
        v.add_plural("sis$", "ses");
        v.add_plural("(?:([^f])fe|([lr])f)$", "${1}${2}ves");
        v.add_plural("(hive)$", "${1}s");
        v.add_plural("([^aeiouy]|qu)y$", "${1}ies");
        v.add_plural("(x|ch|ss|sh)$", "${1}es");
        v.add_plural("(matr|vert|ind|d)(ix|ex)$", "${1}ices");
        v.add_plural("(^[m|l])ouse$", "${1}ice");
        v.add_plural("^(ox)$", "${1}en");
        v.add_plural("(quiz)$", "${1}zes");
        v.add_plural("(buz|blit|walt)z$", "${1}zes");
        v.add_plural("(hoo|lea|loa|thie)f$", "${1}ves");
        v.add_plural("(alumn|alg|larv|vertebr)a$", "${1}ae");
        v.add_plural("(criteri|phenomen)on$", "${1}a");

        v.add_singular("s$", "");
        v.add_singular("(n)ews$", "${1}ews");
        v.add_singular("([dti])a$", "${1}um");
        v.add_singular(
            "(analy|ba|diagno|parenthe|progno|synop|the|ellip|empha|neuro|oa|paraly)ses$",
            "${1}sis",
        );
        v.add_singular("([^f])ves$", "${1}fe");
        v.add_singular("(hive)s$", "${1}");
        v.add_singular("(tive)s$", "${1}");
        v.add_singular("([lr]|hoo|lea|loa|thie)ves$", "${1}f");
        v.add_singular("(^zomb)?([^aeiouy]|qu)ies$", "${2}y");
        v.add_singular("(s)eries$", "${1}eries");
        v.add_singular("(m)ovies$", "${1}ovie");
        v.add_singular("(x|ch|ss|sh)es$", "${1}");
        v.add_singular("(^[m|l])ice$", "${1}ouse");
        // "oes" unless it follows a single leading letter (does, goes)
        v.add_singular("^(.{2,}|[^a-z]?)(o)es$", "${1}${2}");
        v.add_singular("(shoe)s$", "${1}");
        v.add_singular("(cris|ax|test)es$", "${1}is");
        v.add_singular(
            "(octop|vir|alumn|fung|cact|foc|hippopotam|radi|stimul|syllab|nucle)i$",
            "${1}us",
        );
        v.add_singular(
            "(alias|bias|iris|status|campus|apparatus|virus|walrus|trellis)es$",
            "${1}",
        );
        v.add_singular("^(ox)en", "${1}");
        v.add_singular("(matr|d)ices$", "${1}ix");
        v.add_singular("(vert|ind)ices$", "${1}ex");
        v.add_singular("(quiz)zes$", "${1}");
        v.add_singular("(buz|blit|walt)zes$", "${1}z");
        v.add_singular("(alumn|alg|larv|vertebr)ae$", "${1}a");
        v.add_singular("(criteri|phenomen)a$", "${1}on");
        v.add_singular("([b|r|c]ook|room|smooth)ies$", "${1}ie");

        for (singular, plural) in [
            ("person", "people"),
            ("man", "men"),
            ("human", "humans"),
            ("child", "children"),
            ("sex", "sexes"),
            ("glove", "gloves"),
            ("move", "moves"),
            ("goose", "geese"),
            ("wave", "waves"),
            ("foot", "feet"),
            ("tooth", "teeth"),
            ("curriculum", "curricula"),
            ("database", "databases"),
            ("zombie", "zombies"),
            ("personnel", "personnel"),
            ("cache", "caches"),
            ("lens", "lenses"),
            ("clove", "cloves"),
            ("valve", "valves"),
            ("explosive", "explosives"),
        ] {
            v.add_irregular(singular, plural, true);
        }
        for (singular, plural) in [
            ("ex", "exes"),
            ("is", "are"),
            ("that", "those"),
            ("this", "these"),
            ("bus", "buses"),
            ("die", "dice"),
            ("tie", "ties"),
        ] {
            v.add_irregular(singular, plural, false);
        }

        for word in [
            "equipment",
            "information",
            "corn",
            "milk",
            "rice",
            "money",
            "species",
            "series",
            "fish",
            "sheep",
            "deer",
            "aircraft",
            "oz",
            "tsp",
            "tbsp",
            "ml",
            "l",
            "water",
            "waters",
            "semen",
            "sperm",
            "bison",
            "grass",
            "hair",
            "mud",
            "elk",
            "luggage",
            "moose",
            "offspring",
            "salmon",
            "shrimp",
            "someone",
            "swine",
            "trout",
            "tuna",
            "corps",
            "scissors",
            "means",
            "mail",
        ] {
            v.add_uncountable(word);
        }

        v
    }
}

fn split_first(word: &str) -> (&str, &str) {
    let width = word.chars().next().map_or(0, char::len_utf8);
    word.split_at(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Pluralize Tests ==========

    #[test]
    fn test_pluralize_regular() {
        assert_eq!(pluralize("cat"), "cats");
        assert_eq!(pluralize("spider"), "spiders");
        assert_eq!(pluralize("house"), "houses");
    }

    #[test]
    fn test_pluralize_suffix_rules() {
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("church"), "churches");
        assert_eq!(pluralize("city"), "cities");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("knife"), "knives");
        assert_eq!(pluralize("elf"), "elves");
        assert_eq!(pluralize("hero"), "heroes");
        assert_eq!(pluralize("matrix"), "matrices");
    }

    #[test]
    fn test_pluralize_irregular() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("woman"), "women");
        assert_eq!(pluralize("human"), "humans");
        assert_eq!(pluralize("foot"), "feet");
    }

    #[test]
    fn test_pluralize_uncountable() {
        assert_eq!(pluralize("fish"), "fish");
        assert_eq!(pluralize("Sheep"), "Sheep");
    }

    #[test]
    fn test_pluralize_already_plural() {
        assert_eq!(pluralize("cats"), "cats");
        assert_eq!(pluralize("people"), "people");
        assert_eq!(pluralize("elves"), "elves");
    }

    #[test]
    fn test_pluralize_keeps_case() {
        assert_eq!(pluralize("Elf"), "Elves");
        assert_eq!(pluralize("ELF"), "ELVES");
        assert_eq!(pluralize("Child"), "Children");
    }

    // ========== Singularize Tests ==========

    #[test]
    fn test_singularize_regular() {
        assert_eq!(singularize("cats"), "cat");
        assert_eq!(singularize("spiders"), "spider");
        assert_eq!(singularize("houses"), "house");
    }

    #[test]
    fn test_singularize_suffix_rules() {
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("cities"), "city");
        assert_eq!(singularize("knives"), "knife");
        assert_eq!(singularize("elves"), "elf");
        assert_eq!(singularize("heroes"), "hero");
        assert_eq!(singularize("analyses"), "analysis");
    }

    #[test]
    fn test_singularize_irregular() {
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("children"), "child");
        assert_eq!(singularize("women"), "woman");
        assert_eq!(singularize("teeth"), "tooth");
    }

    #[test]
    fn test_singularize_already_singular() {
        assert_eq!(singularize("cat"), "cat");
        assert_eq!(singularize("glass"), "glass");
        assert_eq!(singularize("person"), "person");
    }

    #[test]
    fn test_singularize_uncountable() {
        assert_eq!(singularize("deer"), "deer");
        assert_eq!(singularize("series"), "series");
    }

    #[test]
    fn test_singularize_keeps_case() {
        assert_eq!(singularize("Elves"), "Elf");
        assert_eq!(singularize("CATS"), "CAT");
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(singularize(""), "");
        assert_eq!(pluralize(""), "");
    }
}
