use serde::{Deserialize, Serialize};
use std::fmt;

pub const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMERIC_CHARS: &str = "0123456789";
pub const SPECIAL_CHARS: &str = "!@#$%&*()-_=+[]{}<>:?";

/// Declaration order is pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Upper,
    Lower,
    Numeric,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Numeric,
        CharacterClass::Special,
    ];

    pub fn default_charset(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPER_CHARS,
            CharacterClass::Lower => LOWER_CHARS,
            CharacterClass::Numeric => NUMERIC_CHARS,
            CharacterClass::Special => SPECIAL_CHARS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Upper => "upper",
            CharacterClass::Lower => "lower",
            CharacterClass::Numeric => "numeric",
            CharacterClass::Special => "special",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
