//! Command line argument parsing for the lexiguess CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lexiguess - lexeme analysis for word-guessing games
#[derive(Parser, Debug, Clone)]
#[command(name = "lexiguess")]
#[command(about = "Analyze texts into guessable lexemes and play them in the terminal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexiguessArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexiguessArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a text into its lexeme sequence and group index
    Analyze(AnalyzeArgs),

    /// Print the masked rendering of a text after applying guesses
    Render(RenderArgs),

    /// Play the guessing game interactively
    Play(PlayArgs),
}

/// Arguments for analyzing a text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the text file (reads stdin when omitted)
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: Option<PathBuf>,

    /// Include the full lexeme sequence in human output
    #[arg(short, long)]
    pub lexemes: bool,
}

/// Arguments for rendering a text
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Path to the text file (reads stdin when omitted)
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: Option<PathBuf>,

    /// Leak the first letter of every masked word
    #[arg(long)]
    pub first_letters: bool,

    /// Words to reveal before rendering (repeatable)
    #[arg(short = 'r', long = "reveal", value_name = "WORD")]
    pub reveal: Vec<String>,
}

/// Arguments for the interactive game
#[derive(Parser, Debug, Clone)]
pub struct PlayArgs {
    /// Path to the text file with the hidden text
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Leak the first letter of every masked word
    #[arg(long)]
    pub first_letters: bool,
}
