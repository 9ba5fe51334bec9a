//! Decoder: turns candidate keys into shifts and decrypts the ciphertext.
//!
//! A candidate key holds, for each column, the ciphertext letter assumed to
//! be the encryption of the language's most common plaintext letter. The
//! column shift is the distance between the two:
//!
//! ```text
//! shift[p]  = (index(key[p]) - index(most_common)) mod size
//! plain     = (index(cipher) - shift[column]) mod size
//! ```
//!
//! The column of a character is the number of alphabet letters before it,
//! modulo the key length. Characters outside the alphabet are copied
//! through and do not advance the column.

use serde::Serialize;

use crate::alphabet::{to_lower, to_upper, Alphabet};
use crate::enumerator::CandidateKey;
use crate::error::VigenereError;

/// A candidate key together with the text it decrypts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedResult {
    /// Ciphertext letters the key was derived from.
    pub candidate: CandidateKey,
    /// The key as plaintext letters, one shift letter per position.
    pub key: String,
    /// The full decrypted text, with original casing and punctuation.
    pub text: String,
}

/// Computes the per-position shift of `key` against `most_common`.
///
/// # Errors
/// Returns [`VigenereError::InvalidLetter`] if `most_common` or a key letter
/// is outside `alphabet`.
pub fn shifts(
    key: &CandidateKey,
    alphabet: &Alphabet,
    most_common: char,
) -> Result<Vec<usize>, VigenereError> {
    let base = alphabet.index_of(most_common)?;
    key.letters()
        .iter()
        .map(|&letter| alphabet.index_of(letter).map(|index| alphabet.sub_mod(index, base)))
        .collect()
}

/// Renders the shifts of `key` as alphabet letters, giving the key that
/// would have been used to encrypt.
///
/// # Errors
/// Same as [`shifts`].
pub fn plaintext_key(
    key: &CandidateKey,
    alphabet: &Alphabet,
    most_common: char,
) -> Result<String, VigenereError> {
    Ok(shifts(key, alphabet, most_common)?
        .into_iter()
        .map(|shift| alphabet.letter_at(shift))
        .collect())
}

/// Decodes `text` with one candidate key.
///
/// # Errors
/// Same as [`shifts`]; [`VigenereError::InvalidKeyLength`] for an empty key.
///
/// # Examples
///
/// ```
/// use vigenere_breaker::{decoder, Alphabet, CandidateKey};
///
/// let alphabet = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
/// // 'H' is 'E' shifted by 3.
/// let key = CandidateKey::new(vec!['H']);
/// let result = decoder::decode("Khoor, Zruog!", &key, &alphabet, 'E').unwrap();
/// assert_eq!(result.key, "D");
/// assert_eq!(result.text, "Hello, World!");
/// ```
pub fn decode(
    text: &str,
    key: &CandidateKey,
    alphabet: &Alphabet,
    most_common: char,
) -> Result<DecodedResult, VigenereError> {
    let shifts = shifts(key, alphabet, most_common)?;
    let decoded = apply_shifts(text, alphabet, &shifts, Direction::Decrypt)?;
    Ok(DecodedResult {
        candidate: key.clone(),
        key: shifts.iter().map(|&s| alphabet.letter_at(s)).collect(),
        text: decoded,
    })
}

/// Decodes `text` with every key, preserving key order.
///
/// # Errors
/// Stops at the first key that fails to decode.
pub fn decode_all(
    text: &str,
    keys: &[CandidateKey],
    alphabet: &Alphabet,
    most_common: char,
) -> Result<Vec<DecodedResult>, VigenereError> {
    keys.iter()
        .map(|key| decode(text, key, alphabet, most_common))
        .collect()
}

/// Encrypts `plaintext` with a repeating key of alphabet letters, where key
/// letter `k` shifts by `index(k)`.
///
/// # Errors
/// - [`VigenereError::InvalidKeyLength`] if `key` has no alphabet letters.
/// - [`VigenereError::InvalidLetter`] if `key` has a letter outside `alphabet`.
pub fn encrypt(plaintext: &str, key: &str, alphabet: &Alphabet) -> Result<String, VigenereError> {
    let shifts = key_shifts(key, alphabet)?;
    apply_shifts(plaintext, alphabet, &shifts, Direction::Encrypt)
}

/// Decrypts `ciphertext` encrypted by [`encrypt`] with the same key.
///
/// # Errors
/// Same as [`encrypt`].
pub fn decrypt(ciphertext: &str, key: &str, alphabet: &Alphabet) -> Result<String, VigenereError> {
    let shifts = key_shifts(key, alphabet)?;
    apply_shifts(ciphertext, alphabet, &shifts, Direction::Decrypt)
}

fn key_shifts(key: &str, alphabet: &Alphabet) -> Result<Vec<usize>, VigenereError> {
    key.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| alphabet.index_of(c))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn apply_shifts(
    text: &str,
    alphabet: &Alphabet,
    shifts: &[usize],
    direction: Direction,
) -> Result<String, VigenereError> {
    if shifts.is_empty() {
        return Err(VigenereError::InvalidKeyLength(0));
    }
    let mut output = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        if !alphabet.contains(ch) {
            output.push(ch);
            continue;
        }
        let index = alphabet.index_of(ch)?;
        let shifted = match direction {
            Direction::Encrypt => alphabet.add_mod(index, shifts[column]),
            Direction::Decrypt => alphabet.sub_mod(index, shifts[column]),
        };
        let letter = alphabet.letter_at(shifted);
        output.push(if ch.is_uppercase() {
            to_upper(letter)
        } else {
            to_lower(letter)
        });
        column = (column + 1) % shifts.len();
    }
    Ok(output)
}
