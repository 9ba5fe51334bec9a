//! Frequency analysis of key columns.
//!
//! A [`FrequencyTable`] counts how often each letter occurs in one column and
//! records the set of letters tied for the highest count. The tie set is
//! built during the same scan: a letter joins it when its running count
//! reaches the running maximum, and the set restarts when a count overtakes
//! it. Tied letters are therefore ordered by the moment they reached the
//! maximum, which fixes the branch order of the candidate tree.

use serde::Serialize;

use crate::categorizer::Category;

/// Letter counts of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    counts: Vec<(char, usize)>,
    most_frequent: Vec<char>,
    max_count: usize,
}

impl FrequencyTable {
    /// Counts the letters of `category`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere_breaker::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_category(&['A', 'B', 'B', 'A', 'C']);
    /// assert_eq!(table.count('A'), 2);
    /// assert_eq!(table.most_frequent(), &['B', 'A']);
    /// ```
    pub fn from_category(category: &[char]) -> Self {
        let mut counts: Vec<(char, usize)> = Vec::new();
        let mut most_frequent = Vec::new();
        let mut max_count = 0;
        for &letter in category {
            let count = match counts.iter_mut().find(|(c, _)| *c == letter) {
                Some((_, n)) => {
                    *n += 1;
                    *n
                }
                None => {
                    counts.push((letter, 1));
                    1
                }
            };
            if count > max_count {
                max_count = count;
                most_frequent.clear();
                most_frequent.push(letter);
            } else if count == max_count {
                most_frequent.push(letter);
            }
        }
        FrequencyTable {
            counts,
            most_frequent,
            max_count,
        }
    }

    /// Returns how often `letter` occurs (0 if it never does).
    pub fn count(&self, letter: char) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == letter)
            .map_or(0, |&(_, n)| n)
    }

    /// Letters tied for the highest count, in the order they reached it.
    /// Empty for an empty column.
    pub fn most_frequent(&self) -> &[char] {
        &self.most_frequent
    }

    /// Highest count in the column.
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Number of letters counted.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }

    /// Returns `true` if the column had no letters.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(letter, count)` pairs in first-appearance order.
    pub fn counts(&self) -> &[(char, usize)] {
        &self.counts
    }

    /// `(letter, count)` pairs by descending count; equal counts keep
    /// first-appearance order.
    pub fn sorted_by_count(&self) -> Vec<(char, usize)> {
        let mut sorted = self.counts.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

/// Builds one frequency table per column.
pub fn analyze(categories: &[Category]) -> Vec<FrequencyTable> {
    categories
        .iter()
        .map(|category| FrequencyTable::from_category(category))
        .collect()
}
