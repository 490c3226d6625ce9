//! Score command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::scoring::{PronunciationScorer, ScoreResult};
use anyhow::Result;

/// Run the score command.
pub fn run_score(
    expected: &str,
    actual: &str,
    confidence: f64,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    if !(0.0..=1.0).contains(&confidence) {
        anyhow::bail!("confidence must be between 0.0 and 1.0, got {}", confidence);
    }

    let scorer = PronunciationScorer::with_settings(settings.scoring.clone());
    let result = scorer.score(actual, expected, confidence);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(expected, actual, &result);
    }

    Ok(())
}

fn print_report(expected: &str, actual: &str, result: &ScoreResult) {
    Output::header("Pronunciation Report");
    Output::kv("Expected", expected);
    Output::kv("Heard", if actual.is_empty() { "(nothing)" } else { actual });
    println!();

    Output::metric("Accuracy", result.accuracy);
    Output::metric("Pronunciation", result.pronunciation);
    Output::metric("Fluency", result.fluency);

    if !result.errors.is_empty() {
        Output::header("Errors");
        for error in &result.errors {
            Output::list_item(error);
        }
    }

    Output::header("Suggestions");
    for suggestion in &result.suggestions {
        Output::list_item(suggestion);
    }
}
