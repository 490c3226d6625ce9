//! Telugu script utilities.
//!
//! Glyph classification, the phonetic categories used by pronunciation
//! feedback, and cluster-aware letter reordering for word puzzles.

mod glyph;
mod phonetics;
mod reorder;

pub use glyph::{classify, Glyph, GlyphClass};
pub use phonetics::PhoneticCategory;
pub use reorder::{reorder, segments, Segment, CLUSTER_PATTERN};

