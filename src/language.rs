//! Language presets: alphabet and most common plaintext letter.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Languages with a built-in alphabet preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Lithuanian,
}

impl Language {
    /// Every preset, sorted by name.
    pub const ALL: [Language; 2] = [Language::English, Language::Lithuanian];

    /// Alphabet letters in collation order.
    pub fn letters(self) -> &'static str {
        match self {
            Language::English => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Language::Lithuanian => "AĄBCČDEĘĖFGHIĮYJKLMNOPRSŠTUŲŪVZŽ",
        }
    }

    /// Statistically most frequent letter of ordinary text.
    pub fn most_common_letter(self) -> char {
        match self {
            Language::English => 'E',
            Language::Lithuanian => 'I',
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Lithuanian => "lithuanian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
                format!("unknown language '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" LITHUANIAN ".parse::<Language>().unwrap(), Language::Lithuanian);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(err.contains("english, lithuanian"), "{}", err);
    }

    #[test]
    fn test_presets_build_valid_alphabets() {
        for lang in Language::ALL {
            let alphabet = Alphabet::new(lang.letters()).unwrap();
            assert_eq!(alphabet.len(), lang.letters().chars().count());
            assert!(alphabet.contains(lang.most_common_letter()));
        }
        assert_eq!(Alphabet::new(Language::Lithuanian.letters()).unwrap().len(), 32);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Language::Lithuanian.to_string(), "lithuanian");
    }
}
