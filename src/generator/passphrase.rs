//! The assembled passphrase value object.

use crate::strength::{score, Strength, StrengthReport};
use serde::Serialize;

/// A finished passphrase and what was measured about it.
///
/// Built once from the drawn words and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPassphrase {
    password: String,
    words: Vec<String>,
    word_count: usize,
    total_length: usize,
    strength: Strength,
    separator: String,
    word_lengths: Vec<usize>,
}

impl GeneratedPassphrase {
    /// Joins `words` in draw order and scores the result.
    pub(crate) fn assemble(words: Vec<String>, separator: &str) -> Self {
        let password = words.join(separator);
        let report = score(&password);
        let word_lengths = words.iter().map(|word| word.chars().count()).collect();

        Self {
            word_count: words.len(),
            total_length: report.total_chars,
            strength: report.strength,
            separator: separator.to_string(),
            password,
            words,
            word_lengths,
        }
    }

    /// The joined passphrase.
    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Drawn words, leftmost first.
    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Character count of the password, separators included.
    #[inline]
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    #[inline]
    pub fn strength(&self) -> Strength {
        self.strength
    }

    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Character count of each word, in the same order as [`Self::words`].
    #[inline]
    pub fn word_lengths(&self) -> &[usize] {
        &self.word_lengths
    }

    /// Recomputes the full strength report, including composition flags.
    pub fn strength_report(&self) -> StrengthReport {
        score(&self.password)
    }
}

impl std::fmt::Display for GeneratedPassphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.password)
    }
}
