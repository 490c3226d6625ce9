//! Phonetic consonant and vowel categories checked by the scorer.

use serde::{Deserialize, Serialize};

const RETROFLEX: &[char] = &['ట', 'ఠ', 'డ', 'ఢ', 'ణ', 'ళ'];

const ASPIRATED: &[char] = &['ఖ', 'ఘ', 'ఛ', 'ఝ', 'ఠ', 'ఢ', 'థ', 'ధ', 'ఫ', 'భ'];

/// Long independent vowels and long vowel signs.
const LONG_VOWELS: &[char] = &[
    'ఆ', 'ఈ', 'ఊ', 'ఏ', 'ఐ', 'ఓ', 'ఔ',
    '\u{0C3E}', '\u{0C40}', '\u{0C42}', '\u{0C44}', '\u{0C47}', '\u{0C48}', '\u{0C4B}', '\u{0C4C}',
    'ౠ',
];

/// A class of sounds learners commonly flatten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneticCategory {
    Retroflex,
    Aspirated,
    LongVowel,
}

impl PhoneticCategory {
    /// All categories, in the order the scorer checks them.
    pub const ALL: [PhoneticCategory; 3] = [
        PhoneticCategory::Retroflex,
        PhoneticCategory::Aspirated,
        PhoneticCategory::LongVowel,
    ];

    pub fn members(&self) -> &'static [char] {
        match self {
            PhoneticCategory::Retroflex => RETROFLEX,
            PhoneticCategory::Aspirated => ASPIRATED,
            PhoneticCategory::LongVowel => LONG_VOWELS,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.members().binary_search(&c).is_ok()
    }

    /// True if any code point of `text` belongs to this category.
    pub fn occurs_in(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }
}

impl std::fmt::Display for PhoneticCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhoneticCategory::Retroflex => write!(f, "retroflex"),
            PhoneticCategory::Aspirated => write!(f, "aspirated"),
            PhoneticCategory::LongVowel => write!(f, "long-vowel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_sorted() {
        for category in PhoneticCategory::ALL {
            let members = category.members();
            assert!(members.windows(2).all(|w| w[0] < w[1]), "{}", category);
        }
    }

    #[test]
    fn test_occurs_in() {
        assert!(PhoneticCategory::Retroflex.occurs_in("రండి"));
        assert!(!PhoneticCategory::Retroflex.occurs_in("నమస్తే"));
        assert!(PhoneticCategory::Aspirated.occurs_in("ధన్యవాదాలు"));
        assert!(PhoneticCategory::LongVowel.occurs_in("నమస్తే"));
        assert!(!PhoneticCategory::LongVowel.occurs_in("అమ్మ"));
        assert!(!PhoneticCategory::Aspirated.occurs_in(""));
    }
}
