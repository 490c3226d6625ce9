//! Pronunciation scorer: compares a recognized transcript with its target text.

use super::feedback::{detect_issues, suggestions};
use super::normalize::normalize;
use super::{Analysis, RecognitionSample, Recognized, ScoreResult};
use crate::config::ScoringSettings;
use tracing::{debug, warn};

/// Heuristic pronunciation scorer.
///
/// Stateless apart from its thresholds; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct PronunciationScorer {
    settings: ScoringSettings,
}

impl PronunciationScorer {
    /// Create a scorer with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom thresholds.
    pub fn with_settings(settings: ScoringSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ScoringSettings {
        &self.settings
    }

    /// Score a transcript against the expected text.
    ///
    /// `confidence` is the recognizer's confidence in `0.0..=1.0`; values
    /// outside that range are clamped and non-finite values count as zero.
    pub fn score(&self, actual: &str, expected: &str, confidence: f64) -> ScoreResult {
        let actual = normalize(actual);
        let expected = normalize(expected);
        let actual_chars: Vec<char> = actual.chars().collect();
        let expected_chars: Vec<char> = expected.chars().collect();

        let accuracy = accuracy(&actual_chars, &expected_chars);
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let pronunciation = ((confidence * 100.0 + accuracy) / 2.0).min(100.0);
        let fluency = self.fluency(actual_chars.len(), expected_chars.len());

        let issues = detect_issues(&actual, &expected, self.settings.max_listed_errors);
        let suggestions = suggestions(accuracy, &issues, self.settings.practice_threshold);

        debug!(
            accuracy,
            pronunciation,
            fluency,
            issues = issues.len(),
            "scored transcript"
        );

        ScoreResult {
            accuracy,
            pronunciation,
            fluency,
            errors: issues.iter().map(|i| i.to_string()).collect(),
            suggestions,
        }
    }

    /// Score a captured recognition sample.
    pub fn score_sample(&self, sample: &RecognitionSample) -> ScoreResult {
        self.score(&sample.actual_text, &sample.expected_text, sample.confidence)
    }

    /// Score the outcome of a recognition attempt.
    ///
    /// `None` means live recognition failed; the result is then a placeholder
    /// marked [`Analysis::Simulated`] rather than a real score.
    pub fn analyze(&self, expected: &str, recognized: Option<&Recognized>) -> Analysis {
        match recognized {
            Some(r) => Analysis::Live(self.score(&r.text, expected, r.confidence)),
            None => {
                warn!("speech recognition unavailable, returning simulated analysis");
                Analysis::Simulated(self.simulated())
            }
        }
    }

    fn simulated(&self) -> ScoreResult {
        let value = self.settings.simulated_score;
        ScoreResult {
            accuracy: value,
            pronunciation: value,
            fluency: value,
            errors: Vec::new(),
            suggestions: vec![SIMULATED_NOTICE.to_string()],
        }
    }

    fn fluency(&self, actual_len: usize, expected_len: usize) -> f64 {
        if expected_len == 0 {
            return 0.0;
        }
        let ratio = actual_len as f64 / expected_len as f64;
        let capped = (ratio * 100.0).min(100.0);

        if ratio < self.settings.short_ratio {
            capped * self.settings.short_penalty
        } else if ratio > self.settings.long_ratio {
            capped * self.settings.long_penalty
        } else {
            capped
        }
    }
}

pub const SIMULATED_NOTICE: &str =
    "Speech could not be recognized, so this score is only an estimate. Try recording again.";

/// Position-wise match percentage over the longer of the two texts.
fn accuracy(actual: &[char], expected: &[char]) -> f64 {
    if expected.is_empty() {
        return 0.0;
    }
    let max_len = actual.len().max(expected.len());
    let matches = actual
        .iter()
        .zip(expected)
        .filter(|(a, e)| a == e)
        .count();
    matches as f64 / max_len as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::feedback::{ENCOURAGEMENT, PRACTICE_TIP, VOWEL_LENGTH_TIP};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn in_range(result: &ScoreResult) -> bool {
        [result.accuracy, result.pronunciation, result.fluency]
            .iter()
            .all(|v| (0.0..=100.0).contains(v))
    }

    #[test]
    fn test_exact_match() {
        let scorer = PronunciationScorer::new();
        let result = scorer.score("రండి", "రండి", 0.9);

        assert!(approx(result.accuracy, 100.0));
        assert!(approx(result.pronunciation, 95.0));
        assert!(approx(result.fluency, 100.0));
        assert!(result.errors.is_empty());
        assert_eq!(result.suggestions, vec![ENCOURAGEMENT]);
    }

    #[test]
    fn test_identical_text_scores_full_accuracy() {
        let scorer = PronunciationScorer::new();
        for text in ["నమస్తే", "మీరు ఎలా ఉన్నారు", "ధన్యవాదాలు"] {
            let result = scorer.score(text, text, 1.0);
            assert!(approx(result.accuracy, 100.0), "{}", text);
            assert!(approx(result.pronunciation, 100.0));
        }
    }

    #[test]
    fn test_empty_actual() {
        let scorer = PronunciationScorer::new();
        let result = scorer.score("", "నమస్తే", 1.0);

        assert!(approx(result.accuracy, 0.0));
        assert!(approx(result.pronunciation, 50.0));
        // ratio 0 is truncated speech: 0 * 0.7
        assert!(approx(result.fluency, 0.0));
        assert!(result.errors[0].starts_with("Missing characters"));
        assert_eq!(result.suggestions, vec![PRACTICE_TIP, VOWEL_LENGTH_TIP]);
    }

    #[test]
    fn test_empty_expected() {
        let scorer = PronunciationScorer::new();
        let result = scorer.score("నమస్తే", "", 0.8);
        assert!(approx(result.accuracy, 0.0));
        assert!(approx(result.fluency, 0.0));
        assert!(approx(result.pronunciation, 40.0));
        assert!(result.errors.is_empty());

        let result = scorer.score("", "", 0.0);
        assert!(in_range(&result));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_normalization_applies_before_comparison() {
        let scorer = PronunciationScorer::new();
        let result = scorer.score("  రండి!! ", "రండి", 1.0);
        assert!(approx(result.accuracy, 100.0));
        assert!(approx(result.fluency, 100.0));
    }

    #[test]
    fn test_partial_accuracy() {
        let scorer = PronunciationScorer::new();
        // 3 of 4 positions match
        let result = scorer.score("రండ\u{0C41}", "రండి", 1.0);
        assert!(approx(result.accuracy, 75.0));
        assert!(approx(result.pronunciation, 87.5));
        assert_eq!(result.errors, vec!["Missing characters: ి", "Mismatched characters: ి→ు"]);
    }

    #[test]
    fn test_accuracy_uses_longer_length() {
        let scorer = PronunciationScorer::new();
        let result = scorer.score("రండిరండి", "రండి", 1.0);
        assert!(approx(result.accuracy, 50.0));
        // ratio 2.0 is rambling: 100 * 0.8
        assert!(approx(result.fluency, 80.0));
    }

    #[test]
    fn test_fluency_bands() {
        let scorer = PronunciationScorer::new();
        assert!(approx(scorer.fluency(1, 4), 25.0 * 0.7));
        assert!(approx(scorer.fluency(2, 4), 50.0));
        assert!(approx(scorer.fluency(3, 4), 75.0));
        assert!(approx(scorer.fluency(6, 4), 100.0));
        assert!(approx(scorer.fluency(7, 4), 80.0));
        assert!(approx(scorer.fluency(0, 0), 0.0));
    }

    #[test]
    fn test_confidence_is_clamped() {
        let scorer = PronunciationScorer::new();
        let high = scorer.score("రండి", "రండి", 7.0);
        assert!(approx(high.pronunciation, 100.0));
        let negative = scorer.score("రండి", "రండి", -1.0);
        assert!(approx(negative.pronunciation, 50.0));
        let nan = scorer.score("రండి", "రండి", f64::NAN);
        assert!(approx(nan.pronunciation, 50.0));
    }

    #[test]
    fn test_scores_stay_in_range() {
        let scorer = PronunciationScorer::new();
        let texts = ["", "క", "నమస్తే", "hello", "రండి రండి రండి", "ఖఘ ఠఢ ఆఈ"];
        for actual in texts {
            for expected in texts {
                for confidence in [0.0, 0.5, 1.0] {
                    let result = scorer.score(actual, expected, confidence);
                    assert!(in_range(&result), "{:?} vs {:?}", actual, expected);
                    assert!(!result.suggestions.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let scorer = PronunciationScorer::with_settings(ScoringSettings {
            practice_threshold: 101.0,
            ..Default::default()
        });
        let result = scorer.score("రండి", "రండి", 1.0);
        assert_eq!(result.suggestions, vec![PRACTICE_TIP]);
    }

    #[test]
    fn test_zero_listed_errors_keeps_advisories() {
        let scorer = PronunciationScorer::with_settings(ScoringSettings {
            max_listed_errors: 0,
            ..Default::default()
        });
        assert!(scorer.settings().validate().is_ok());

        let result = scorer.score("", "నమస్తే", 1.0);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Long vowels"));

        let result = scorer.score("తల", "దల", 1.0);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_score_sample() {
        let scorer = PronunciationScorer::new();
        let sample = RecognitionSample {
            actual_text: "నమస్తే".to_string(),
            expected_text: "నమస్తే".to_string(),
            confidence: 0.6,
        };
        let result = scorer.score_sample(&sample);
        assert!(approx(result.pronunciation, 80.0));
    }

    #[test]
    fn test_analyze_live_and_simulated() {
        let scorer = PronunciationScorer::new();

        let recognized = Recognized {
            text: "రండి".to_string(),
            confidence: 0.9,
        };
        let live = scorer.analyze("రండి", Some(&recognized));
        assert!(!live.is_simulated());
        assert!(approx(live.result().accuracy, 100.0));

        let simulated = scorer.analyze("రండి", None);
        assert!(simulated.is_simulated());
        assert!(approx(simulated.result().accuracy, 50.0));
        assert_eq!(simulated.result().suggestions, vec![SIMULATED_NOTICE]);
    }
}
