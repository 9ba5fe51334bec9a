//! Cryptanalysis of Vigenère-family ciphers.
//!
//! Recovers candidate keys for a repeating-key substitution cipher without
//! knowing the key: the Kasiski examination suggests key lengths, the
//! ciphertext is split into one column per key position, and the letters
//! tied for the highest frequency in each column are combined into every
//! plausible key. Each key is decoded under the assumption that a column's
//! most frequent letter encrypts the language's most common letter.
//!
//! No candidate is preferred over another; judging the decoded texts is
//! left to the caller.
//!
//! # Architecture
//!
//! ```text
//! Alphabet       (letter <-> index, modular arithmetic)
//!     |
//! Categorizer    (round-robin columns)      Kasiski (key length suggestions)
//!     |
//! Frequency      (per-column counts and tie sets)
//!     |
//! CandidateTree  (arena, one level per column)
//!     |
//! Enumerator     (root-to-leaf keys)
//!     |
//! Decoder        (shifts against the most common letter)
//! ```
//!
//! # Examples
//!
//! ```
//! use vigenere_breaker::{decoder, AnalysisConfig, Analyzer, Language};
//!
//! let analyzer = Analyzer::new(AnalysisConfig::new(Language::English)).unwrap();
//!
//! let plaintext = "see the bees, see the trees";
//! let ciphertext = decoder::encrypt(plaintext, "AB", analyzer.alphabet()).unwrap();
//!
//! let analysis = analyzer.analyze(&ciphertext, 2).unwrap();
//! assert!(analysis.decoded.iter().any(|r| r.key == "AB" && r.text == plaintext));
//! ```
//!
//! Ask the Kasiski examination for key lengths first:
//!
//! ```
//! use vigenere_breaker::{AnalysisConfig, Analyzer};
//!
//! let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
//! let estimate = analyzer.suggest_key_lengths("QWERTYQWERTY").unwrap();
//! assert!(estimate.suggestions.contains(&6));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod analysis;
pub mod categorizer;
pub mod decoder;
pub mod enumerator;
pub mod error;
pub mod frequency;
pub mod kasiski;
pub mod language;
pub mod report;
pub mod tree;

pub use alphabet::Alphabet;
pub use analysis::{Analysis, AnalysisConfig, Analyzer};
pub use decoder::DecodedResult;
pub use enumerator::CandidateKey;
pub use error::VigenereError;
pub use frequency::FrequencyTable;
pub use kasiski::KasiskiEstimate;
pub use language::Language;
pub use tree::CandidateTree;
