//! Capitalization transfer from a source word to its translation

/// Capitalization observed on a source word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseProfile {
    /// First character is uppercase
    pub first_capital: bool,
    /// Every alphabetic character is uppercase (vacuously true without letters)
    pub all_capital: bool,
}

impl CaseProfile {
    pub fn of(original: &str) -> Self {
        Self {
            first_capital: original.chars().next().is_some_and(char::is_uppercase),
            all_capital: original
                .chars()
                .all(|c| !c.is_alphabetic() || c.is_uppercase()),
        }
    }

    /// Apply this profile to `translated`
    ///
    /// All-caps is applied after first-capital and overrides it.
    pub fn apply(&self, translated: &str) -> String {
        let mut result = if self.first_capital {
            capitalize_first(translated)
        } else {
            translated.to_string()
        };
        if self.all_capital {
            result = result.to_uppercase();
        }
        result
    }
}

/// Give `translated` the capitalization of `original`
pub fn restore_case(original: &str, translated: &str) -> String {
    CaseProfile::of(original).apply(translated)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
