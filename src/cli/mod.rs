//! CLI module for telugu-tutor.

pub mod commands;
mod output;

pub use output::{format_offset, Output};

use clap::{Parser, Subcommand};

/// telugu-tutor - pronunciation scoring and Telugu script tools
///
/// Scores spoken attempts against target text, prepares words for spelling
/// puzzles, parses lesson video links, and serves all of it over HTTP.
#[derive(Parser, Debug)]
#[command(name = "telugu-tutor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TELUGU_TUTOR_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a recognized transcript against the expected text
    Score {
        /// Text the learner was asked to say
        expected: String,

        /// Transcript returned by the speech recognizer
        actual: String,

        /// Recognizer confidence (0.0-1.0)
        #[arg(short = 'C', long, default_value = "1.0")]
        confidence: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reorder words for spelling puzzles
    Reorder {
        /// Words to reorder
        #[arg(required = true)]
        words: Vec<String>,

        /// Also print the glyph class of every character
        #[arg(long)]
        classes: bool,
    },

    /// Parse a YouTube link into embed details
    Video {
        /// YouTube URL or video ID
        input: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start HTTP API server for the learning app frontend
    Serve {
        /// Host to bind to (defaults to server.host from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration file if none exists
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score() {
        let cli = Cli::try_parse_from(["telugu-tutor", "-v", "score", "రండి", "రండ", "-C", "0.8"])
            .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Score {
                expected,
                actual,
                confidence,
                json,
            } => {
                assert_eq!(expected, "రండి");
                assert_eq!(actual, "రండ");
                assert_eq!(confidence, 0.8);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_reorder_requires_words() {
        assert!(Cli::try_parse_from(["telugu-tutor", "reorder"]).is_err());
    }
}
