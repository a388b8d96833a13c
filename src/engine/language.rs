//! Languages and translation directions
//!
//! The engine works between exactly two languages. A [`Direction`] decides
//! which lexicon column is searched and which morphology rules apply.

use std::fmt;
use std::str::FromStr;

use super::error::{TranslateError, TranslateResult};

/// One of the two supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Common,
    Drow,
}

impl Language {
    /// The identifier used by the service and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Common => "Common",
            Language::Drow => "Drow",
        }
    }

    /// The opposite language
    pub fn other(&self) -> Language {
        match self {
            Language::Common => Language::Drow,
            Language::Drow => Language::Common,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = TranslateError;

    /// Identifiers are matched exactly: `"drow"` is rejected.
    fn from_str(s: &str) -> TranslateResult<Self> {
        match s {
            "Common" => Ok(Language::Common),
            "Drow" => Ok(Language::Drow),
            other => Err(TranslateError::InvalidLanguage(other.to_string())),
        }
    }
}

/// An ordered source → target language pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub from: Language,
    pub to: Language,
}

impl Direction {
    /// Common → Drow
    pub const TO_DROW: Direction = Direction {
        from: Language::Common,
        to: Language::Drow,
    };

    /// Drow → Common
    pub const TO_COMMON: Direction = Direction {
        from: Language::Drow,
        to: Language::Common,
    };

    /// Create a direction, rejecting a language paired with itself
    pub fn new(from: Language, to: Language) -> TranslateResult<Self> {
        if from == to {
            return Err(TranslateError::SameLanguage(from));
        }
        Ok(Self { from, to })
    }

    /// Direction into `target`, from the other language
    pub fn towards(target: Language) -> Self {
        Self {
            from: target.other(),
            to: target,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}
