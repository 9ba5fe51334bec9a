//! Error types for the vigenere-breaker library.

use std::fmt;

/// Errors produced by the cryptanalysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    /// The alphabet has no letters left after normalization.
    EmptyAlphabet,
    /// The assumed most common plaintext letter is not part of the alphabet.
    MostCommonLetterNotInAlphabet(char),
    /// Key length is less than 1.
    InvalidKeyLength(usize),
    /// Kasiski group size is less than 1.
    InvalidGroupSize(usize),
    /// A letter lookup fell outside the configured alphabet.
    InvalidLetter(char),
    /// The ciphertext contains no alphabet letters at all.
    EmptyInput,
    /// A column received no letters because the ciphertext is shorter than the key.
    EmptyCategory {
        /// Zero-based index of the first empty column.
        index: usize,
        /// Key length the ciphertext was split with.
        key_length: usize,
    },
    /// The candidate tree would produce more keys than the configured limit.
    CandidateLimitExceeded {
        /// Configured maximum number of candidate keys.
        limit: usize,
        /// Number of candidate keys the tree would produce.
        required: usize,
    },
}

impl fmt::Display for VigenereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VigenereError::EmptyAlphabet => {
                write!(f, "Alphabet must contain at least one letter")
            }
            VigenereError::MostCommonLetterNotInAlphabet(letter) => {
                write!(f, "Most common letter '{}' is not in the alphabet", letter)
            }
            VigenereError::InvalidKeyLength(length) => {
                write!(f, "Key length must be at least 1, got {}", length)
            }
            VigenereError::InvalidGroupSize(size) => {
                write!(f, "Kasiski group size must be at least 1, got {}", size)
            }
            VigenereError::InvalidLetter(letter) => {
                write!(f, "Letter '{}' is not in the alphabet", letter)
            }
            VigenereError::EmptyInput => {
                write!(f, "Ciphertext contains no alphabet letters")
            }
            VigenereError::EmptyCategory { index, key_length } => {
                write!(
                    f,
                    "Category {} is empty: ciphertext has fewer letters than key length {}",
                    index + 1,
                    key_length
                )
            }
            VigenereError::CandidateLimitExceeded { limit, required } => {
                write!(
                    f,
                    "Candidate tree would produce {} keys, limit is {}",
                    required, limit
                )
            }
        }
    }
}

impl std::error::Error for VigenereError {}
