//! Letter reordering for word puzzles.
//!
//! Words are scanned for the four-glyph cluster consonant + long-vowel sign +
//! modifier + consonant. A matched cluster is kept together and emitted in its
//! original order; everything else passes through one glyph at a time.

use super::glyph::GlyphClass;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Class sequence recognized as a single cluster.
pub const CLUSTER_PATTERN: [GlyphClass; 4] = [
    GlyphClass::Consonant,
    GlyphClass::LongVowelSign,
    GlyphClass::Modifier,
    GlyphClass::Consonant,
];

/// One unit produced by the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    /// A run matching [`CLUSTER_PATTERN`].
    Cluster(String),
    /// A glyph that did not start a cluster.
    Single(char),
}

impl Segment {
    pub fn as_string(&self) -> String {
        match self {
            Segment::Cluster(s) => s.clone(),
            Segment::Single(c) => c.to_string(),
        }
    }
}

fn matches_cluster(classes: &[GlyphClass]) -> bool {
    classes == CLUSTER_PATTERN
}

/// Scan a word into clusters and single glyphs, left to right.
///
/// Also returns which code point indices were consumed by the scan.
fn scan(chars: &[char]) -> (Vec<Segment>, Vec<bool>) {
    let classes: Vec<GlyphClass> = chars.iter().map(|&c| GlyphClass::of(c)).collect();
    let mut consumed = vec![false; chars.len()];
    let mut segments = Vec::with_capacity(chars.len());

    let mut i = 0;
    while i < chars.len() {
        let window_end = i + CLUSTER_PATTERN.len();
        if window_end <= chars.len() && matches_cluster(&classes[i..window_end]) {
            // Same-order passthrough: the cluster is recognized, not permuted.
            segments.push(Segment::Cluster(chars[i..window_end].iter().collect()));
            consumed[i..window_end].fill(true);
            i = window_end;
        } else {
            segments.push(Segment::Single(chars[i]));
            consumed[i] = true;
            i += 1;
        }
    }

    (segments, consumed)
}

/// Split a word into its clusters and remaining glyphs.
pub fn segments(word: &str) -> Vec<Segment> {
    let chars: Vec<char> = word.chars().collect();
    scan(&chars).0
}

/// Reorder the letters of a word.
///
/// The multiset of code points is preserved and the output has the same
/// length as the input. With the single cluster pattern currently recognized
/// the result equals the input.
pub fn reorder(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let (segments, consumed) = scan(&chars);

    let mut out = String::with_capacity(word.len());
    for segment in &segments {
        match segment {
            Segment::Cluster(s) => out.push_str(s),
            Segment::Single(c) => out.push(*c),
        }
    }

    // Any index the scan skipped is appended in ascending order.
    for (idx, done) in consumed.iter().enumerate() {
        if !done {
            out.push(chars[idx]);
        }
    }

    trace!(
        input = word,
        clusters = segments
            .iter()
            .filter(|s| matches!(s, Segment::Cluster(_)))
            .count(),
        "reordered word"
    );
    out
}
