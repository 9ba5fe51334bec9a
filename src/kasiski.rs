//! Kasiski examination: key-length estimation from repeated substrings.
//!
//! Every group of `group_size` consecutive letters of the filtered
//! ciphertext is compared against every later group (overlapping matches
//! included). Each recurrence offset votes for all of its divisors in
//! `[2, offset]`; the divisors with the highest tally are the suggested key
//! lengths. When nothing repeats the suggestion falls back to `{1}`.
//!
//! The scan is quadratic in the number of filtered letters.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, warn};

use crate::alphabet::Alphabet;
use crate::categorizer::filter_letters;
use crate::error::VigenereError;

/// Group size used when the caller does not choose one.
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// Key length suggested when no group repeats.
const FALLBACK_SUGGESTION: usize = 1;

/// A letter group that occurs more than once, with the offsets from each
/// occurrence to every later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatedGroup {
    /// The repeated letters.
    pub group: String,
    /// Distances to later occurrences, in scan order.
    pub offsets: Vec<usize>,
}

/// Result of a Kasiski scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KasiskiEstimate {
    /// Divisors sharing the highest tally, ascending.
    pub suggestions: Vec<usize>,
    /// Tally of each suggestion (0 for the fallback).
    pub tally: usize,
    /// Every divisor that received a vote, ascending, with its tally.
    pub divisor_tallies: Vec<(usize, usize)>,
    /// Repeated groups in first-seen order.
    pub repeated_groups: Vec<RepeatedGroup>,
}

impl KasiskiEstimate {
    /// Returns `true` if no divisor received a vote.
    pub fn is_fallback(&self) -> bool {
        self.tally == 0
    }

    /// Returns the smallest suggested key length.
    pub fn best(&self) -> usize {
        self.suggestions
            .first()
            .copied()
            .unwrap_or(FALLBACK_SUGGESTION)
    }
}

/// Runs the Kasiski examination over the alphabet letters of `text`.
///
/// # Parameters
/// - `text`: Raw ciphertext; characters outside `alphabet` are ignored.
/// - `alphabet`: Alphabet used to filter the ciphertext.
/// - `group_size`: Length of the repeated groups to look for.
///
/// # Errors
/// Returns [`VigenereError::InvalidGroupSize`] if `group_size` is 0.
///
/// # Examples
///
/// ```
/// use vigenere_breaker::{kasiski, Alphabet};
///
/// let alphabet = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
/// let estimate = kasiski::estimate("ABCXXXABC", &alphabet, 3).unwrap();
/// assert_eq!(estimate.suggestions, vec![2, 3, 6]);
///
/// let none = kasiski::estimate("ABCDEFG", &alphabet, 3).unwrap();
/// assert_eq!(none.suggestions, vec![1]);
/// ```
pub fn estimate(
    text: &str,
    alphabet: &Alphabet,
    group_size: usize,
) -> Result<KasiskiEstimate, VigenereError> {
    if group_size < 1 {
        return Err(VigenereError::InvalidGroupSize(group_size));
    }
    let letters = filter_letters(text, alphabet);
    let mut tallies: BTreeMap<usize, usize> = BTreeMap::new();
    let mut repeated_groups: Vec<RepeatedGroup> = Vec::new();
    let mut group_slots: HashMap<&[char], usize> = HashMap::new();

    let starts = (letters.len() + 1).saturating_sub(group_size);
    for i in 0..starts {
        let group = &letters[i..i + group_size];
        for k in (i + 1)..starts {
            if letters[k..k + group_size] != *group {
                continue;
            }
            let offset = k - i;
            let slot = *group_slots.entry(group).or_insert_with(|| {
                repeated_groups.push(RepeatedGroup {
                    group: group.iter().collect(),
                    offsets: Vec::new(),
                });
                repeated_groups.len() - 1
            });
            repeated_groups[slot].offsets.push(offset);
            for divisor in divisors(offset) {
                *tallies.entry(divisor).or_insert(0) += 1;
            }
        }
    }

    let tally = tallies.values().copied().max().unwrap_or(0);
    let suggestions = if tally == 0 {
        warn!(
            letters = letters.len(),
            group_size, "no divisor votes, falling back to key length 1"
        );
        vec![FALLBACK_SUGGESTION]
    } else {
        tallies
            .iter()
            .filter(|&(_, &count)| count == tally)
            .map(|(&divisor, _)| divisor)
            .collect()
    };
    debug!(
        letters = letters.len(),
        groups = repeated_groups.len(),
        tally,
        ?suggestions,
        "kasiski examination finished"
    );

    Ok(KasiskiEstimate {
        suggestions,
        tally,
        divisor_tallies: tallies.into_iter().collect(),
        repeated_groups,
    })
}

/// Returns every divisor of `offset` in `[2, offset]`, ascending.
fn divisors(offset: usize) -> Vec<usize> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut d = 1;
    while d * d <= offset {
        if offset % d == 0 {
            low.push(d);
            if d != offset / d {
                high.push(offset / d);
            }
        }
        d += 1;
    }
    low.into_iter()
        .chain(high.into_iter().rev())
        .filter(|&d| d >= 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Alphabet {
        Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap()
    }

    #[test]
    fn test_divisors() {
        assert!(divisors(1).is_empty());
        assert_eq!(divisors(2), vec![2]);
        assert_eq!(divisors(12), vec![2, 3, 4, 6, 12]);
        assert_eq!(divisors(16), vec![2, 4, 8, 16]);
        assert_eq!(divisors(13), vec![13]);
    }

    #[test]
    fn test_no_repeats_falls_back() {
        let estimate = estimate("ABCDEFGHIJ", &english(), 3).unwrap();
        assert_eq!(estimate.suggestions, vec![1]);
        assert_eq!(estimate.tally, 0);
        assert!(estimate.is_fallback());
        assert!(estimate.repeated_groups.is_empty());
        assert_eq!(estimate.best(), 1);
    }

    #[test]
    fn test_text_shorter_than_group() {
        let short = estimate("AB", &english(), 3).unwrap();
        assert_eq!(short.suggestions, vec![1]);
        let empty = estimate("", &english(), 3).unwrap();
        assert_eq!(empty.suggestions, vec![1]);
    }

    #[test]
    fn test_zero_group_size_rejected() {
        assert_eq!(
            estimate("ABC", &english(), 0),
            Err(VigenereError::InvalidGroupSize(0))
        );
    }

    #[test]
    fn test_single_repeat_votes_all_divisors() {
        // ABC at 0 and 6: offset 6 votes for 2, 3 and 6.
        let estimate = estimate("abc-xyz abc", &english(), 3).unwrap();
        assert_eq!(estimate.suggestions, vec![2, 3, 6]);
        assert_eq!(estimate.tally, 1);
        assert_eq!(estimate.divisor_tallies, vec![(2, 1), (3, 1), (6, 1)]);
        assert_eq!(
            estimate.repeated_groups,
            vec![RepeatedGroup {
                group: "ABC".to_string(),
                offsets: vec![6],
            }]
        );
    }

    #[test]
    fn test_overlapping_matches_counted() {
        // AAAA holds AAA at 0 and 1.
        let estimate = estimate("AAAA", &english(), 3).unwrap();
        assert_eq!(estimate.repeated_groups[0].offsets, vec![1]);
        // Offset 1 has no divisor in [2, 1].
        assert_eq!(estimate.suggestions, vec![1]);
        assert!(estimate.divisor_tallies.is_empty());
    }

    #[test]
    fn test_all_later_occurrences_tallied() {
        // XYZ at 0, 4 and 8: offsets 4, 8 from 0 and 4 from 4.
        let estimate = estimate("XYZAXYZBXYZ", &english(), 3).unwrap();
        assert_eq!(estimate.repeated_groups.len(), 1);
        assert_eq!(estimate.repeated_groups[0].offsets, vec![4, 8, 4]);
        // 2 and 4 divide every offset.
        assert_eq!(estimate.suggestions, vec![2, 4]);
        assert_eq!(estimate.tally, 3);
    }

    #[test]
    fn test_group_size_one() {
        let estimate = estimate("ABA", &english(), 1).unwrap();
        assert_eq!(estimate.suggestions, vec![2]);
    }

    #[test]
    fn test_period_recovered_from_repeating_key() {
        let alphabet = english();
        let plaintext = "the quick brown fox jumps over ".repeat(3);
        let ciphertext = crate::decoder::encrypt(&plaintext, "LEMON", &alphabet).unwrap();
        let estimate = estimate(&ciphertext, &alphabet, 3).unwrap();
        assert!(
            estimate.suggestions.iter().any(|&d| 5 % d == 0),
            "suggestions {:?} miss period 5",
            estimate.suggestions
        );
    }
}
