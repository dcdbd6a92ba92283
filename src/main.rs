//! Property Wordle - CLI
//!
//! Daily property-themed word guessing game with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use property_wordle::{
    commands::{PrintSink, run_simple},
    core::Word,
    game::{GameSession, SessionConfig},
    interactive::{App, run_tui},
    words::{DailyList, FixedWord, RandomPick, WordLookup, WordSource, loader},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "property_wordle",
    about = "Daily property-themed word guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Accepted-words file, one word per line (fail-open when absent)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Practice against a random word instead of today's
    #[arg(long, global = true, conflicts_with = "target")]
    random: bool,

    /// Practice against a specific target word
    #[arg(long, global = true)]
    target: Option<String>,

    /// Skip the registration interstitial (already signed in)
    #[arg(long, global = true)]
    registered: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (interactive game without TUI)
    Simple,
}

/// Build the accepted-word lookup from the -w flag
///
/// A missing or unreadable file degrades to the fail-open lookup so play is
/// never blocked on the dictionary.
fn load_lookup(wordlist: Option<&PathBuf>) -> WordLookup {
    match wordlist {
        Some(path) => match loader::load_accepted_words(path) {
            Ok(lookup) => lookup,
            Err(err) => {
                eprintln!(
                    "Warning: could not read wordlist {}: {err}; accepting all words",
                    path.display()
                );
                WordLookup::unavailable()
            }
        },
        None => WordLookup::unavailable(),
    }
}

/// Pick the target word source from the CLI flags
fn word_source(cli: &Cli) -> Result<Box<dyn WordSource>> {
    if let Some(text) = &cli.target {
        let word = Word::new(text.as_str())?;
        Ok(Box::new(FixedWord(word)))
    } else if cli.random {
        Ok(Box::new(RandomPick))
    } else {
        Ok(Box::new(DailyList))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lookup = load_lookup(cli.wordlist.as_ref());
    let source = word_source(&cli)?;

    let config = SessionConfig {
        registered: cli.registered,
        ..SessionConfig::default()
    };
    let mut session = GameSession::new(lookup, config);

    // The game is not ready until the word source resolves
    let Some(target) = source.today() else {
        println!("Today's word is not available yet - please try again soon.");
        return Ok(());
    };
    session.provide_target(target, Instant::now());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_simple(session, &mut PrintSink).map_err(|e| anyhow::anyhow!(e)),
    }
}
