//! Error detection and learner suggestions.

use crate::script::PhoneticCategory;
use serde::{Deserialize, Serialize};

/// A problem found by comparing a transcript with its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Expected characters that appear nowhere in the transcript.
    MissingCharacters { chars: Vec<char> },
    /// Position-wise differences as (expected, actual) pairs.
    Mismatches { pairs: Vec<(char, char)> },
    /// A sound category present in the target but absent from the transcript.
    Phonetic { category: PhoneticCategory },
}

fn join_chars(chars: impl Iterator<Item = String>) -> String {
    chars.collect::<Vec<_>>().join(", ")
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::MissingCharacters { chars } => write!(
                f,
                "Missing characters: {}",
                join_chars(chars.iter().map(|c| c.to_string()))
            ),
            Issue::Mismatches { pairs } => write!(
                f,
                "Mismatched characters: {}",
                join_chars(pairs.iter().map(|(e, a)| format!("{}→{}", e, a)))
            ),
            Issue::Phonetic { category } => {
                let members = join_chars(category.members().iter().map(|c| c.to_string()));
                match category {
                    PhoneticCategory::Retroflex => {
                        write!(f, "Retroflex consonants ({}) were not pronounced", members)
                    }
                    PhoneticCategory::Aspirated => write!(
                        f,
                        "Aspirated consonants ({}) were pronounced without aspiration",
                        members
                    ),
                    PhoneticCategory::LongVowel => {
                        write!(f, "Long vowels ({}) were shortened", members)
                    }
                }
            }
        }
    }
}

impl Issue {
    pub fn category(&self) -> Option<PhoneticCategory> {
        match self {
            Issue::Phonetic { category } => Some(*category),
            _ => None,
        }
    }
}

/// Find issues between normalized `actual` and `expected` texts, in report order.
pub fn detect_issues(actual: &str, expected: &str, limit: usize) -> Vec<Issue> {
    let actual_chars: Vec<char> = actual.chars().collect();
    let expected_chars: Vec<char> = expected.chars().collect();
    let mut issues = Vec::new();

    // A limit of 0 lists nothing, for both lists.
    let mut missing: Vec<char> = Vec::new();
    for &c in &expected_chars {
        if missing.len() >= limit {
            break;
        }
        if c != ' ' && !actual_chars.contains(&c) && !missing.contains(&c) {
            missing.push(c);
        }
    }
    if !missing.is_empty() {
        issues.push(Issue::MissingCharacters { chars: missing });
    }

    let pairs: Vec<(char, char)> = expected_chars
        .iter()
        .zip(&actual_chars)
        .filter(|(e, a)| e != a)
        .map(|(&e, &a)| (e, a))
        .take(limit)
        .collect();
    if !pairs.is_empty() {
        issues.push(Issue::Mismatches { pairs });
    }

    for category in PhoneticCategory::ALL {
        if category.occurs_in(expected) && !category.occurs_in(actual) {
            issues.push(Issue::Phonetic { category });
        }
    }

    issues
}

pub const PRACTICE_TIP: &str =
    "Practice speaking slowly and clearly, one syllable at a time, then build up speed.";
pub const RETROFLEX_TIP: &str =
    "For retroflex sounds like ట, డ and ణ, curl the tip of your tongue back against the roof of your mouth.";
pub const ASPIRATION_TIP: &str =
    "For aspirated sounds like ఖ, ఘ, థ and ధ, release a strong puff of air with the consonant.";
pub const VOWEL_LENGTH_TIP: &str =
    "Hold long vowels like ా, ీ and ూ for about twice as long as their short forms.";
pub const ENCOURAGEMENT: &str = "Great pronunciation! Keep practicing to stay fluent.";

/// Build suggestions from the accuracy and detected issues.
///
/// Always returns at least one entry.
pub fn suggestions(accuracy: f64, issues: &[Issue], practice_threshold: f64) -> Vec<String> {
    let has = |category: PhoneticCategory| issues.iter().any(|i| i.category() == Some(category));

    let mut out = Vec::new();
    if accuracy < practice_threshold {
        out.push(PRACTICE_TIP.to_string());
    }
    if has(PhoneticCategory::Retroflex) {
        out.push(RETROFLEX_TIP.to_string());
    }
    if has(PhoneticCategory::Aspirated) {
        out.push(ASPIRATION_TIP.to_string());
    }
    if has(PhoneticCategory::LongVowel) {
        out.push(VOWEL_LENGTH_TIP.to_string());
    }
    if out.is_empty() {
        out.push(ENCOURAGEMENT.to_string());
    }
    out
}
