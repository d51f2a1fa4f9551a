//! Command implementations for the lexiguess CLI.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use crate::analysis::analyzer::LexemeAnalyzer;
use crate::analysis::lexeme::LexemeAnalysis;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::game::render::render_masked;
use crate::game::session::GuessSession;

/// Execute a CLI command.
pub fn execute_command(args: LexiguessArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Render(render_args) => render_text(render_args.clone(), &args),
        Command::Play(play_args) => play_game(play_args.clone(), &args),
    }
}

/// Read the input text from a file, or from stdin when no path is given.
fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn analyze(text: &str) -> LexemeAnalysis {
    LexemeAnalyzer::new().analyze(text)
}

/// Analyze a text and print the summary or the full analysis.
fn analyze_text(args: AnalyzeArgs, cli_args: &LexiguessArgs) -> Result<()> {
    let text = read_text(args.text_file.as_deref())?;
    let analysis = analyze(&text);

    if args.lexemes || cli_args.output_format == OutputFormat::Json {
        return output_result("Analysis complete", &analysis, cli_args);
    }

    let summary = AnalyzeSummary {
        lexeme_count: analysis.lexemes.len(),
        word_like_count: analysis.word_like_count,
        other_character_count: analysis.other_character_count,
        distinct_word_keys: analysis.lexemes_by_word_like.len(),
    };

    output_result("Analysis complete", &summary, cli_args)
}

/// Print the masked rendering after applying the requested reveals.
fn render_text(args: RenderArgs, cli_args: &LexiguessArgs) -> Result<()> {
    let text = read_text(args.text_file.as_deref())?;
    let mut session = GuessSession::new(analyze(&text));

    for word in &args.reveal {
        session.guess(word);
    }

    let rendered = render_masked(session.analysis(), session.revealed(), args.first_letters);

    match cli_args.output_format {
        OutputFormat::Human => {
            println!("{rendered}");
            if cli_args.verbosity() > 1 {
                println!("[{}/{}]", session.score(), session.total());
            }
            Ok(())
        }
        OutputFormat::Json => output_result(
            "Rendered",
            &RenderResult {
                rendered,
                revealed_count: session.score(),
                total: session.total(),
            },
            cli_args,
        ),
    }
}

/// Interactive game loop: read guesses from stdin until the text is complete
/// or input ends.
fn play_game(args: PlayArgs, cli_args: &LexiguessArgs) -> Result<()> {
    let text = fs::read_to_string(&args.text_file)?;
    let mut session = GuessSession::new(analyze(&text));
    let mut guesses = 0usize;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_complete() {
        println!(
            "\n{}",
            render_masked(session.analysis(), session.revealed(), args.first_letters)
        );
        println!("[{}/{}]", session.score(), session.total());
        print!("guess> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let word = line?;
        if word.trim().is_empty() {
            continue;
        }

        guesses += 1;
        let revealed = session.guess(&word);
        if revealed == 0 && cli_args.verbosity() > 0 {
            println!("no match for '{}'", word.trim());
        }
    }

    if session.is_complete() && cli_args.verbosity() > 0 {
        println!(
            "\n{}",
            render_masked(session.analysis(), session.revealed(), args.first_letters)
        );
        println!("Completed!");
    }

    output_result(
        "Game over",
        &PlayResult {
            score: session.score(),
            total: session.total(),
            guesses,
            completed: session.is_complete(),
        },
        cli_args,
    )
}
