//! Character classes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Look-alike characters removed when ambiguity exclusion is on
pub const AMBIGUOUS: &str = "0Oo1lI|";

/// A class of characters a password may be required to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// `A-Z`
    Uppercase,
    /// `a-z`
    Lowercase,
    /// `0-9`
    Numbers,
    /// `!@#$%^&*()_+-=[]{}|;:,.<>?`
    Symbols,
}

impl CharClass {
    /// Every class in default enabling order
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    /// Full character set for this class
    #[must_use]
    pub fn charset(self) -> &'static str {
        match self {
            CharClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharClass::Numbers => "0123456789",
            CharClass::Symbols => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    /// Characters drawn for this class
    #[must_use]
    pub fn pool(self, exclude_ambiguous: bool) -> Vec<char> {
        self.charset()
            .chars()
            .filter(|c| !(exclude_ambiguous && AMBIGUOUS.contains(*c)))
            .collect()
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Numbers => "numbers",
            CharClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}
