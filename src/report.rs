//! Plain-text report of an [`Analysis`].
//!
//! Sections appear in a fixed order and are separated by a blank line:
//! key length suggestions (when given), alphabet, encoded text, categories,
//! frequency analyses, all keys, decoded text.

use std::io::{self, Write};

use crate::analysis::Analysis;
use crate::kasiski::KasiskiEstimate;

/// Writes the full report for `analysis`.
///
/// # Errors
/// Propagates any error from `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    suggestions: Option<&KasiskiEstimate>,
) -> io::Result<()> {
    if let Some(estimate) = suggestions {
        write_suggestions(out, estimate)?;
        writeln!(out)?;
    }
    write_alphabet(out, analysis)?;
    writeln!(out)?;
    writeln!(out, "Encoded text:")?;
    writeln!(out, "{}", analysis.ciphertext)?;
    writeln!(out)?;
    write_categories(out, analysis)?;
    writeln!(out)?;
    write_frequencies(out, analysis)?;
    writeln!(out)?;
    write_keys(out, analysis)?;
    writeln!(out)?;
    write_decoded(out, analysis)
}

/// Writes the Kasiski key length suggestions on one line.
pub fn write_suggestions<W: Write>(out: &mut W, estimate: &KasiskiEstimate) -> io::Result<()> {
    let lengths: Vec<String> = estimate.suggestions.iter().map(|d| d.to_string()).collect();
    writeln!(
        out,
        "Key length suggestions (tally = {}): {}",
        estimate.tally,
        lengths.join(", ")
    )
}

/// Writes the letters of the alphabet above their indices, column aligned.
pub fn write_alphabet<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    let width = (analysis.alphabet.len() - 1).to_string().len() + 1;
    let mut letters = String::new();
    let mut indices = String::new();
    for (letter, index) in analysis.alphabet.letters() {
        letters.push_str(&format!("{:<width$}", letter, width = width));
        indices.push_str(&format!("{:<width$}", index, width = width));
    }
    writeln!(out, "Alphabet:")?;
    writeln!(out, "{}", letters.trim_end())?;
    writeln!(out, "{}", indices.trim_end())
}

fn write_categories<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(out, "Categories:")?;
    for (i, category) in analysis.categories.iter().enumerate() {
        writeln!(out, "Category {}:", i + 1)?;
        writeln!(out, "{}", category.iter().collect::<String>())?;
    }
    Ok(())
}

fn write_frequencies<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(out, "Frequency analyses:")?;
    for (i, table) in analysis.frequencies.iter().enumerate() {
        writeln!(out, "Category {}:", i + 1)?;
        for (letter, count) in table.sorted_by_count() {
            writeln!(out, "{}: {}", letter, count)?;
        }
    }
    Ok(())
}

fn write_keys<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(out, "All keys (key length = {}):", analysis.key_length)?;
    for result in &analysis.decoded {
        writeln!(out, "{}", result.key)?;
    }
    Ok(())
}

fn write_decoded<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(out, "Decoded text:")?;
    for result in &analysis.decoded {
        writeln!(out, "Key '{}':", result.key)?;
        writeln!(out, "{}", result.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisConfig, Analyzer};

    fn render(text: &str, key_length: usize, letters: &str, most_common: char) -> String {
        let analyzer = Analyzer::new(AnalysisConfig::custom(letters, most_common)).unwrap();
        let analysis = analyzer.analyze(text, key_length).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &analysis, None).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_full_report_layout() {
        let report = render("Cab, ba!", 2, "ABCDE", 'E');
        let expected = "\
Alphabet:
A B C D E
0 1 2 3 4

Encoded text:
Cab, ba!

Categories:
Category 1:
CBA
Category 2:
AB

Frequency analyses:
Category 1:
C: 1
B: 1
A: 1
Category 2:
A: 1
B: 1

All keys (key length = 2):
DB
DC
CB
CC
BB
BC

Decoded text:
Key 'DB':
Eed, ac!
Key 'DC':
Edd, ec!
Key 'CB':
Aee, ad!
Key 'CC':
Ade, ed!
Key 'BB':
Bea, ae!
Key 'BC':
Bda, ee!
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_alphabet_alignment_two_digit_indices() {
        let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
        let analysis = analyzer.analyze("A", 1).unwrap();
        let mut buf = Vec::new();
        write_alphabet(&mut buf, &analysis).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Alphabet:");
        assert!(lines[1].starts_with("A  B  C  D"));
        assert!(lines[2].starts_with("0  1  2  3"));
        assert!(lines[1].ends_with("Y  Z"));
        assert!(lines[2].ends_with("24 25"));
    }

    #[test]
    fn test_suggestions_line() {
        let estimate = KasiskiEstimate {
            suggestions: vec![2, 4],
            tally: 7,
            divisor_tallies: vec![(2, 7), (4, 7)],
            repeated_groups: Vec::new(),
        };
        let mut buf = Vec::new();
        write_suggestions(&mut buf, &estimate).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Key length suggestions (tally = 7): 2, 4\n"
        );
    }
}
