//! Glyph classification for Telugu code points.
//!
//! Membership tables are sorted by code point so lookups can binary search.

use serde::{Deserialize, Serialize};

/// Dependent long-vowel signs (dhirgas).
pub(crate) const LONG_VOWEL_SIGNS: &[char] = &[
    '\u{0C3E}', // ా
    '\u{0C40}', // ీ
    '\u{0C42}', // ూ
    '\u{0C44}', // ౄ
    '\u{0C47}', // ే
    '\u{0C48}', // ై
    '\u{0C4B}', // ో
    '\u{0C4C}', // ౌ
];

/// Short independent vowels and short dependent vowel signs.
pub(crate) const SHORT_VOWELS: &[char] = &[
    'అ', 'ఇ', 'ఉ', 'ఋ', 'ఌ', 'ఎ', 'ఒ',
    '\u{0C3F}', // ి
    '\u{0C41}', // ు
    '\u{0C43}', // ృ
    '\u{0C46}', // ె
    '\u{0C4A}', // ొ
];

pub(crate) const CONSONANTS: &[char] = &[
    'క', 'ఖ', 'గ', 'ఘ', 'ఙ', 'చ', 'ఛ', 'జ', 'ఝ', 'ఞ', 'ట', 'ఠ', 'డ', 'ఢ', 'ణ', 'త', 'థ',
    'ద', 'ధ', 'న', 'ప', 'ఫ', 'బ', 'భ', 'మ', 'య', 'ర', 'ఱ', 'ల', 'ళ', 'ఴ', 'వ', 'శ', 'ష',
    'స', 'హ', 'ౘ', 'ౙ', 'ౚ',
];

/// Combining marks that alter a consonant: virama, anusvara, visarga and friends.
pub(crate) const MODIFIERS: &[char] = &[
    '\u{0C00}', // combining candrabindu above
    '\u{0C01}', // ఁ
    '\u{0C02}', // ం
    '\u{0C03}', // ః
    '\u{0C04}', // combining anusvara above
    '\u{0C4D}', // ్ virama
    '\u{0C55}', // length mark
    '\u{0C56}', // ai length mark
];

/// Class of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphClass {
    LongVowelSign,
    ShortVowel,
    Consonant,
    Modifier,
}

impl GlyphClass {
    /// Look a code point up in the membership tables.
    ///
    /// Returns `None` for code points that belong to no table.
    pub fn lookup(c: char) -> Option<Self> {
        if LONG_VOWEL_SIGNS.binary_search(&c).is_ok() {
            Some(GlyphClass::LongVowelSign)
        } else if SHORT_VOWELS.binary_search(&c).is_ok() {
            Some(GlyphClass::ShortVowel)
        } else if MODIFIERS.binary_search(&c).is_ok() {
            Some(GlyphClass::Modifier)
        } else if CONSONANTS.binary_search(&c).is_ok() {
            Some(GlyphClass::Consonant)
        } else {
            None
        }
    }

    /// Classify a code point.
    ///
    /// Anything outside the tables (Latin letters, digits, long independent
    /// vowels, punctuation) is treated as a consonant. The reorder pattern
    /// relies on this: an unknown character can anchor either end of a match.
    pub fn of(c: char) -> Self {
        Self::lookup(c).unwrap_or(GlyphClass::Consonant)
    }
}

impl std::fmt::Display for GlyphClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphClass::LongVowelSign => write!(f, "long-vowel-sign"),
            GlyphClass::ShortVowel => write!(f, "short-vowel"),
            GlyphClass::Consonant => write!(f, "consonant"),
            GlyphClass::Modifier => write!(f, "modifier"),
        }
    }
}

/// A code point paired with its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    pub ch: char,
    pub class: GlyphClass,
    /// False when the class came from the consonant fallback.
    pub known: bool,
}

impl Glyph {
    pub fn new(ch: char) -> Self {
        let known = GlyphClass::lookup(ch);
        Self {
            ch,
            class: known.unwrap_or(GlyphClass::Consonant),
            known: known.is_some(),
        }
    }
}

/// Classify every code point of a word, in order.
pub fn classify(word: &str) -> Vec<Glyph> {
    word.chars().map(Glyph::new).collect()
}
