//! Analyzer: runs the full cryptanalysis pipeline for one ciphertext.
//!
//! ```text
//! ciphertext ── Kasiski ──> key length suggestions
//! ciphertext ── categorize ──> frequency ──> tree ──> keys ──> decode
//! ```
//!
//! Every call builds its own categories, tables and tree; an [`Analyzer`]
//! only holds the validated configuration.

use serde::Serialize;
use tracing::{debug, info};

use crate::alphabet::{to_upper, Alphabet};
use crate::categorizer::{self, Category};
use crate::decoder::{self, DecodedResult};
use crate::enumerator::{self, CandidateKey};
use crate::error::VigenereError;
use crate::frequency::{self, FrequencyTable};
use crate::kasiski::{self, KasiskiEstimate, DEFAULT_GROUP_SIZE};
use crate::language::Language;
use crate::tree::CandidateTree;

/// Settings shared by every analysis run of an [`Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisConfig {
    /// Raw alphabet letters; normalized by [`Alphabet::new`].
    pub letters: String,
    /// Assumed most common plaintext letter.
    pub most_common_letter: char,
    /// Kasiski group size.
    pub group_size: usize,
    /// Upper bound on candidate keys; `None` keeps every candidate.
    pub max_candidates: Option<usize>,
}

impl AnalysisConfig {
    /// Configuration for a built-in language preset.
    pub fn new(language: Language) -> Self {
        Self::custom(language.letters(), language.most_common_letter())
    }

    /// Configuration for a caller-supplied alphabet.
    pub fn custom(letters: &str, most_common_letter: char) -> Self {
        AnalysisConfig {
            letters: letters.to_string(),
            most_common_letter,
            group_size: DEFAULT_GROUP_SIZE,
            max_candidates: None,
        }
    }

    /// Sets the Kasiski group size.
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Caps the number of candidate keys an analysis may produce.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }

    /// Checks the configuration and builds its alphabet.
    ///
    /// # Errors
    /// - [`VigenereError::EmptyAlphabet`] if `letters` has no letters.
    /// - [`VigenereError::MostCommonLetterNotInAlphabet`] if the most common
    ///   letter is missing from the alphabet.
    /// - [`VigenereError::InvalidGroupSize`] if the group size is 0.
    pub fn validate(&self) -> Result<Alphabet, VigenereError> {
        let alphabet = Alphabet::new(&self.letters)?;
        if !alphabet.contains(self.most_common_letter) {
            return Err(VigenereError::MostCommonLetterNotInAlphabet(
                self.most_common_letter,
            ));
        }
        if self.group_size < 1 {
            return Err(VigenereError::InvalidGroupSize(self.group_size));
        }
        Ok(alphabet)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Normalized alphabet.
    pub alphabet: Alphabet,
    /// Ciphertext as given.
    pub ciphertext: String,
    /// Key length the ciphertext was split with.
    pub key_length: usize,
    /// Uppercased most common plaintext letter.
    pub most_common_letter: char,
    /// One column per key position.
    pub categories: Vec<Category>,
    /// One frequency table per column.
    pub frequencies: Vec<FrequencyTable>,
    /// Candidate keys in tree order.
    pub keys: Vec<CandidateKey>,
    /// One decoded text per candidate key, same order.
    pub decoded: Vec<DecodedResult>,
}

/// Validated cryptanalysis engine.
///
/// # Examples
///
/// ```
/// use vigenere_breaker::{AnalysisConfig, Analyzer, Language};
///
/// let analyzer = Analyzer::new(AnalysisConfig::new(Language::English)).unwrap();
/// let analysis = analyzer.analyze("KHOOR", 1).unwrap();
/// assert_eq!(analysis.categories, vec![vec!['K', 'H', 'O', 'O', 'R']]);
/// assert_eq!(analysis.keys.len(), 1);
/// assert_eq!(analysis.keys[0].to_string(), "O");
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    alphabet: Alphabet,
    most_common_letter: char,
}

impl Analyzer {
    /// Validates `config` and builds an analyzer for it.
    ///
    /// # Errors
    /// See [`AnalysisConfig::validate`].
    pub fn new(config: AnalysisConfig) -> Result<Self, VigenereError> {
        let alphabet = config.validate()?;
        let most_common_letter = to_upper(config.most_common_letter);
        debug!(
            alphabet = %alphabet.as_string(),
            size = alphabet.len(),
            %most_common_letter,
            "analyzer configured"
        );
        Ok(Analyzer {
            config,
            alphabet,
            most_common_letter,
        })
    }

    /// Normalized alphabet of this analyzer.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Configuration this analyzer was built from.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Suggests key lengths for `ciphertext` with the Kasiski examination.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidGroupSize`] if the group size is 0.
    pub fn suggest_key_lengths(&self, ciphertext: &str) -> Result<KasiskiEstimate, VigenereError> {
        kasiski::estimate(ciphertext, &self.alphabet, self.config.group_size)
    }

    /// Runs categorization, frequency analysis, key enumeration and decoding
    /// for one key length.
    ///
    /// # Errors
    /// - [`VigenereError::InvalidKeyLength`] if `key_length` is 0.
    /// - [`VigenereError::EmptyInput`] if `ciphertext` has no alphabet letters.
    /// - [`VigenereError::EmptyCategory`] if it has fewer letters than `key_length`.
    /// - [`VigenereError::CandidateLimitExceeded`] if the configured cap is hit.
    pub fn analyze(&self, ciphertext: &str, key_length: usize) -> Result<Analysis, VigenereError> {
        let categories = categorizer::categorize(ciphertext, &self.alphabet, key_length)?;
        let frequencies = frequency::analyze(&categories);
        let tree = CandidateTree::build(&frequencies, self.config.max_candidates)?;
        let keys = enumerator::enumerate_keys(&tree);
        let decoded = decoder::decode_all(
            ciphertext,
            &keys,
            &self.alphabet,
            self.most_common_letter,
        )?;

        info!(
            key_length,
            letters = categories.iter().map(Vec::len).sum::<usize>(),
            candidates = keys.len(),
            "analysis finished"
        );

        Ok(Analysis {
            alphabet: self.alphabet.clone(),
            ciphertext: ciphertext.to_string(),
            key_length,
            most_common_letter: self.most_common_letter,
            categories,
            frequencies,
            keys,
            decoded,
        })
    }
}
