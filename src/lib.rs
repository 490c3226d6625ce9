//! telugu-tutor - pronunciation scoring and Telugu script utilities
//!
//! Library and CLI backing a Telugu language learning app.
//!
//! # Overview
//!
//! - Score a speech recognizer's transcript against the text a learner was
//!   asked to say, with accuracy, pronunciation and fluency percentages plus
//!   errors and tips aimed at common Telugu pronunciation mistakes.
//! - Split and reorder Telugu words for spelling puzzles without breaking
//!   consonant + long-vowel + virama + consonant clusters.
//! - Parse YouTube links for lesson video embeds.
//!
//! # Architecture
//!
//! - `script` - Glyph classes, phonetic categories, letter reordering
//! - `scoring` - Pronunciation scorer
//! - `media` - YouTube link parsing
//! - `config` - Configuration management
//! - `cli` - Command-line interface and HTTP API
//!
//! # Example
//!
//! ```rust
//! use telugu_tutor::scoring::PronunciationScorer;
//! use telugu_tutor::script::reorder;
//!
//! let scorer = PronunciationScorer::new();
//! let result = scorer.score("రండి", "రండి", 0.9);
//! assert_eq!(result.accuracy, 100.0);
//! assert!(result.errors.is_empty());
//!
//! assert_eq!(reorder("క్ష"), "క్ష");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod scoring;
pub mod script;

pub use error::{Result, TutorError};
