//! Alphabet: ordered, case-insensitive bijection between letters and indices.
//!
//! Every modular operation of the pipeline happens in the index space of an
//! [`Alphabet`]. Letters are stored uppercased in first-occurrence order, so
//! the index of a letter is the position at which it first appeared in the
//! raw letter sequence.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::VigenereError;

/// Ordered set of distinct uppercase letters with dense indices `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alphabet {
    letters: Vec<char>,
    #[serde(skip)]
    indices: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from a raw letter sequence.
    ///
    /// Non-alphabetic characters and repeated letters (compared
    /// case-insensitively) are dropped; the remaining letters keep their
    /// first-occurrence order.
    ///
    /// # Parameters
    /// - `raw`: Language-specific character set, possibly with duplicates.
    ///
    /// # Errors
    /// Returns [`VigenereError::EmptyAlphabet`] if no letter survives
    /// normalization.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere_breaker::Alphabet;
    ///
    /// let alphabet = Alphabet::new("abcAB-c d").unwrap();
    /// assert_eq!(alphabet.len(), 4);
    /// assert_eq!(alphabet.index_of('d').unwrap(), 3);
    /// assert_eq!(alphabet.letter_at(5), 'B');
    /// ```
    pub fn new(raw: &str) -> Result<Self, VigenereError> {
        let mut letters = Vec::new();
        let mut indices = HashMap::new();
        for ch in raw.chars().filter(|c| c.is_alphabetic()) {
            let upper = to_upper(ch);
            if !indices.contains_key(&upper) {
                indices.insert(upper, letters.len());
                letters.push(upper);
            }
        }
        if letters.is_empty() {
            return Err(VigenereError::EmptyAlphabet);
        }
        Ok(Alphabet { letters, indices })
    }

    /// Returns the number of letters in the alphabet (always at least 1).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; an alphabet cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns `true` if `ch` (in either case) belongs to the alphabet.
    pub fn contains(&self, ch: char) -> bool {
        self.indices.contains_key(&to_upper(ch))
    }

    /// Returns the index of `letter`, compared case-insensitively.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidLetter`] if the letter is absent.
    pub fn index_of(&self, letter: char) -> Result<usize, VigenereError> {
        self.indices
            .get(&to_upper(letter))
            .copied()
            .ok_or(VigenereError::InvalidLetter(letter))
    }

    /// Returns the uppercase letter at `index`, reduced modulo [`len`](Self::len).
    pub fn letter_at(&self, index: usize) -> char {
        self.letters[index % self.letters.len()]
    }

    /// Returns `(index + offset) mod len`.
    pub fn add_mod(&self, index: usize, offset: usize) -> usize {
        (index % self.len() + offset % self.len()) % self.len()
    }

    /// Returns `(index - offset) mod len`, always in `[0, len)`.
    pub fn sub_mod(&self, index: usize, offset: usize) -> usize {
        (index % self.len() + self.len() - offset % self.len()) % self.len()
    }

    /// Iterates over `(letter, index)` pairs in index order.
    pub fn letters(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.letters.iter().enumerate().map(|(i, &c)| (c, i))
    }

    /// Returns the alphabet letters as a string, in index order.
    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }
}

/// Uppercases a single character, keeping it unchanged when the uppercase
/// form is not a single character (e.g. `'ß'`).
pub(crate) fn to_upper(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => ch,
    }
}

/// Lowercases a single character, keeping it unchanged when the lowercase
/// form is not a single character.
pub(crate) fn to_lower(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => ch,
    }
}
