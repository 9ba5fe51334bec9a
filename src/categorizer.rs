//! Categorizer: round-robin split of ciphertext letters into key columns.
//!
//! Letter `n` of the filtered stream (alphabet members only) belongs to the
//! column `n mod key_length`, i.e. to the letters encrypted under the same
//! key position. Characters outside the alphabet are skipped and do not
//! advance the column counter.

use crate::alphabet::{to_upper, Alphabet};
use crate::error::VigenereError;

/// Ordered letters of one key column.
pub type Category = Vec<char>;

/// Returns the uppercased alphabet letters of `text`, in order.
pub fn filter_letters(text: &str, alphabet: &Alphabet) -> Vec<char> {
    text.chars()
        .filter(|&c| alphabet.contains(c))
        .map(to_upper)
        .collect()
}

/// Splits the alphabet letters of `text` into `key_length` columns.
///
/// Trailing columns are empty when `text` has fewer alphabet letters than
/// `key_length`.
///
/// # Errors
/// Returns [`VigenereError::InvalidKeyLength`] if `key_length` is 0.
///
/// # Examples
///
/// ```
/// use vigenere_breaker::{categorizer, Alphabet};
///
/// let alphabet = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
/// let columns = categorizer::categorize("ab, cd e", &alphabet, 2).unwrap();
/// assert_eq!(columns, vec![vec!['A', 'C', 'E'], vec!['B', 'D']]);
/// ```
pub fn categorize(
    text: &str,
    alphabet: &Alphabet,
    key_length: usize,
) -> Result<Vec<Category>, VigenereError> {
    if key_length < 1 {
        return Err(VigenereError::InvalidKeyLength(key_length));
    }
    let mut categories: Vec<Category> = vec![Vec::new(); key_length];
    for (n, letter) in filter_letters(text, alphabet).into_iter().enumerate() {
        categories[n % key_length].push(letter);
    }
    Ok(categories)
}

/// Re-interleaves columns in round-robin order, rebuilding the filtered
/// letter stream that [`categorize`] split.
pub fn interleave(categories: &[Category]) -> Vec<char> {
    let total = categories.iter().map(Vec::len).sum();
    let mut stream = Vec::with_capacity(total);
    let rows = categories.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..rows {
        for category in categories {
            if let Some(&letter) = category.get(row) {
                stream.push(letter);
            }
        }
    }
    stream
}
