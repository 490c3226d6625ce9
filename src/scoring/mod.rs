//! Pronunciation scoring.
//!
//! Compares what a speech recognizer heard with the text a learner was asked
//! to say and turns the difference into scores, error messages and tips.
//!
//! # Metrics
//!
//! All three metrics are percentages in `0.0..=100.0`:
//!
//! - **accuracy**: position-wise character matches over the longer text.
//! - **pronunciation**: the mean of recognizer confidence and accuracy.
//! - **fluency**: transcript length relative to the target, penalized when the
//!   learner stopped early or ran on.

mod feedback;
mod normalize;
mod scorer;

pub use feedback::{detect_issues, suggestions, Issue};
pub use normalize::normalize;
pub use scorer::{PronunciationScorer, SIMULATED_NOTICE};

use serde::{Deserialize, Serialize};

/// A transcript produced by a speech recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recognized {
    pub text: String,
    /// Recognizer confidence in `0.0..=1.0`.
    pub confidence: f64,
}

/// One scoring request: what was heard, what was expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionSample {
    pub actual_text: String,
    pub expected_text: String,
    pub confidence: f64,
}

/// Scores and feedback for one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub accuracy: f64,
    pub pronunciation: f64,
    pub fluency: f64,
    pub errors: Vec<String>,
    pub suggestions: Vec<String>,
}

/// A score together with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "result", rename_all = "lowercase")]
pub enum Analysis {
    /// Scored from a real transcript.
    Live(ScoreResult),
    /// Placeholder produced because recognition failed.
    Simulated(ScoreResult),
}

impl Analysis {
    pub fn result(&self) -> &ScoreResult {
        match self {
            Analysis::Live(r) | Analysis::Simulated(r) => r,
        }
    }

    pub fn into_result(self) -> ScoreResult {
        match self {
            Analysis::Live(r) | Analysis::Simulated(r) => r,
        }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, Analysis::Simulated(_))
    }
}
