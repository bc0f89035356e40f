//! Length/diversity scoring.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Turkish letters outside ASCII that count as ordinary letters.
const TURKISH_LETTERS: &str = "ğüşıöçĞÜŞİÖÇ";

/// Ordinal strength label, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Classifies a passphrase from its total and distinct character counts.
    ///
    /// Thresholds are inclusive and checked strongest first.
    pub fn classify(total_chars: usize, unique_chars: usize) -> Self {
        if total_chars >= 20 && unique_chars >= 10 {
            Strength::VeryStrong
        } else if total_chars >= 15 && unique_chars >= 8 {
            Strength::Strong
        } else if total_chars >= 10 && unique_chars >= 6 {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }

    /// Label shown to end users.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Zayıf",
            Strength::Medium => "Orta",
            Strength::Strong => "Güçlü",
            Strength::VeryStrong => "Çok Güçlü",
        }
    }

    /// Stable identifier, used for metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very_strong",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "VeryStrong",
        };
        f.write_str(name)
    }
}

/// Everything the scorer derives from a passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    /// Character count, separators included.
    pub total_chars: usize,
    /// Distinct characters after lowercasing.
    pub unique_chars: usize,
    /// Whether an ASCII digit occurs. Not used by the classification.
    pub has_numbers: bool,
    /// Whether a non-letter, non-digit, non-space character occurs.
    /// Not used by the classification.
    pub has_special_chars: bool,
    /// The resulting label.
    pub strength: Strength,
}

/// Scores an assembled passphrase.
pub fn score(password: &str) -> StrengthReport {
    let total_chars = password.chars().count();
    let unique_chars = password
        .to_lowercase()
        .chars()
        .collect::<HashSet<char>>()
        .len();
    let has_numbers = password.chars().any(|c| c.is_ascii_digit());
    let has_special_chars = password.chars().any(is_special);

    StrengthReport {
        total_chars,
        unique_chars,
        has_numbers,
        has_special_chars,
        strength: Strength::classify(total_chars, unique_chars),
    }
}

fn is_special(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || TURKISH_LETTERS.contains(c) || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_weak() {
        let report = score("ab-cd");
        assert_eq!(report.total_chars, 5);
        assert_eq!(report.unique_chars, 5);
        assert_eq!(report.strength, Strength::Weak);
    }

    #[test]
    fn test_boundaries_inclusive() {
        assert_eq!(Strength::classify(15, 8), Strength::Strong);
        assert_eq!(Strength::classify(20, 10), Strength::VeryStrong);
        assert_eq!(Strength::classify(10, 6), Strength::Medium);

        assert_eq!(Strength::classify(19, 10), Strength::Strong);
        assert_eq!(Strength::classify(20, 9), Strength::Strong);
        assert_eq!(Strength::classify(14, 8), Strength::Medium);
        assert_eq!(Strength::classify(9, 9), Strength::Weak);
        assert_eq!(Strength::classify(100, 5), Strength::Weak);
    }

    #[test]
    fn test_exact_strong_boundary_password() {
        // 15 chars, distinct: a b c d e f g - => 8
        let report = score("abcdefg-abcdefg");
        assert_eq!(report.total_chars, 15);
        assert_eq!(report.unique_chars, 8);
        assert_eq!(report.strength, Strength::Strong);
    }

    #[test]
    fn test_very_strong_password() {
        let report = score("pencere-kelebek-dolunay");
        assert_eq!(report.total_chars, 23);
        assert!(report.unique_chars >= 10);
        assert_eq!(report.strength, Strength::VeryStrong);
    }

    #[test]
    fn test_unique_chars_case_insensitive() {
        assert_eq!(score("AaBb").unique_chars, 2);
    }

    #[test]
    fn test_turkish_letters_counted_by_char() {
        let report = score("gökyüzü");
        assert_eq!(report.total_chars, 7);
        assert!(!report.has_special_chars);
    }

    #[test]
    fn test_composition_does_not_change_label() {
        let plain = score("abcdefghij");
        let mixed = score("abcdefgh1!");

        assert!(!plain.has_numbers);
        assert!(!plain.has_special_chars);
        assert!(mixed.has_numbers);
        assert!(mixed.has_special_chars);
        assert_eq!(plain.strength, mixed.strength);
    }

    #[test]
    fn test_separator_is_special() {
        assert!(score("deniz-bulut").has_special_chars);
        assert!(!score("deniz bulut").has_special_chars);
    }

    #[test]
    fn test_ordering_and_labels() {
        assert!(Strength::Weak < Strength::Medium);
        assert!(Strength::Strong < Strength::VeryStrong);
        assert_eq!(Strength::VeryStrong.label(), "Çok Güçlü");
        assert_eq!(Strength::VeryStrong.to_string(), "VeryStrong");
    }
}
