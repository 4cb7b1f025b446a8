//! Palpite - CLI
//!
//! Five-letter word-guessing puzzle with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use palpite::{
    commands::{check_guess, run_simple},
    config::{CliOverrides, Settings, load_settings},
    game::Difficulty,
    interactive::{App, run_tui},
    logging::{LogTarget, init_tracing},
    output::{print_check_result, print_stats},
    session::Session,
    store::{JsonFileStore, KeyValueStore, MemoryStore},
    wordlists::{WordList, loader::load_from_file},
};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "palpite",
    about = "Guess the five-letter word in a limited number of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty for the first round: easy (8), medium (6) or hard (4 attempts)
    #[arg(short, long, global = true, value_enum)]
    difficulty: Option<Difficulty>,

    /// Load target words from a file instead of the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Where stats and preferences are saved (default: .palpite.json)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Keep stats and preferences in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Write logs to this file (filter with `RUST_LOG`)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Pause before the next round starts, in milliseconds
    #[arg(long, global = true)]
    restart_delay_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Evaluate one guess against a given target
    Check {
        /// The word to guess
        target: String,

        /// The guess to evaluate
        guess: String,
    },

    /// Show saved win/loss statistics
    Stats {
        /// Zero the counters
        #[arg(long)]
        reset: bool,
    },
}

/// Commands that run on top of a session
enum SessionCommand {
    Play,
    Simple,
    Stats { reset: bool },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let settings = load_settings(CliOverrides {
        difficulty: cli.difficulty,
        wordlist: cli.wordlist,
        state_file: cli.state_file,
        no_save: cli.no_save,
        log_file: cli.log_file,
        restart_delay_ms: cli.restart_delay_ms,
    });

    let owns_terminal = matches!(command, Commands::Play);
    init_tracing(LogTarget::choose(settings.log_file.as_deref(), owns_terminal))?;

    let session_command = match command {
        Commands::Check { target, guess } => return run_check_command(&target, &guess),
        Commands::Play => SessionCommand::Play,
        Commands::Simple => SessionCommand::Simple,
        Commands::Stats { reset } => SessionCommand::Stats { reset },
    };

    let words = load_words(settings.wordlist.as_deref())?;

    match settings.state_file.as_deref().map(JsonFileStore::open) {
        Some(Ok(store)) => run_session_command(session_command, words, store, &settings),
        Some(Err(e)) => {
            warn!(error = %e, "state file unusable, progress will not be saved");
            eprintln!(
                "{} {e}; progress will not be saved this time",
                "⚠️".yellow()
            );
            run_session_command(session_command, words, MemoryStore::new(), &settings)
        }
        None => run_session_command(session_command, words, MemoryStore::new(), &settings),
    }
}

/// Load the target words: the built-in list, or a file given with -w
fn load_words(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list from {}", path.display())),
        None => WordList::embedded().context("built-in word list is invalid"),
    }
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let checked = check_guess(target, guess)?;
    print_check_result(&checked.guess, &checked.result);
    Ok(())
}

fn run_session_command<S: KeyValueStore>(
    command: SessionCommand,
    words: WordList,
    store: S,
    settings: &Settings,
) -> Result<()> {
    let mut session = Session::new(words, store, settings.session_options());

    match command {
        SessionCommand::Play => run_tui(App::new(session)),
        SessionCommand::Simple => run_simple(&mut session),
        SessionCommand::Stats { reset } => {
            if reset {
                session.reset_stats();
                println!("Statistics reset.");
            }
            if let Some(warning) = session.take_store_warning() {
                eprintln!("{}", warning.yellow());
            }
            print_stats(&session.stats());
            Ok(())
        }
    }
}
