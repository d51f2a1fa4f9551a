//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexiguessArgs, OutputFormat};
use crate::error::Result;

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeSummary {
    pub lexeme_count: usize,
    pub word_like_count: usize,
    pub other_character_count: usize,
    pub distinct_word_keys: usize,
}

/// Result structure for the render command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResult {
    pub rendered: String,
    pub revealed_count: usize,
    pub total: usize,
}

/// Result structure for a finished game.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayResult {
    pub score: usize,
    pub total: usize,
    pub guesses: usize,
    pub completed: bool,
}

/// Print a command result in the requested output format.
///
/// Human format prints the message followed by the payload's pretty JSON;
/// JSON format prints the payload only, pretty-printed when `--pretty` is
/// set.
pub fn output_result<T: Serialize>(
    message: &str,
    payload: &T,
    args: &LexiguessArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
            }
            println!("{}", serde_json::to_string_pretty(payload)?);
        }
        OutputFormat::Json => {
            if args.pretty {
                println!("{}", serde_json::to_string_pretty(payload)?);
            } else {
                println!("{}", serde_json::to_string(payload)?);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_summary_serialization() {
        let summary = AnalyzeSummary {
            lexeme_count: 5,
            word_like_count: 3,
            other_character_count: 2,
            distinct_word_keys: 3,
        };

        let json = serde_json::to_string(&summary).unwrap();
        let parsed: AnalyzeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.lexeme_count, 5);
        assert_eq!(parsed.word_like_count, 3);
    }
}
