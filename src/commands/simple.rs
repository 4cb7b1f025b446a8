//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::game::Difficulty;
use crate::output::{print_round, print_round_end, print_stats};
use crate::session::{Session, SubmitOutcome};
use crate::store::KeyValueStore;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineCommand {
    Quit,
    NewRound,
    Difficulty(Difficulty),
    Stats,
    Help,
    Guess(String),
}

fn parse_line(line: &str) -> LineCommand {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return LineCommand::Guess(trimmed.to_string());
    };

    match command.to_lowercase().as_str() {
        "q" | "quit" | "exit" => LineCommand::Quit,
        "n" | "new" => LineCommand::NewRound,
        "stats" => LineCommand::Stats,
        other => other
            .parse()
            .map_or(LineCommand::Help, LineCommand::Difficulty),
    }
}

fn print_help() {
    println!("Guess the five-letter word. After each guess:");
    println!("  {} correct letter in the correct position", " A ".black().on_green());
    println!("  {} letter is in the word, elsewhere", " A ".black().on_yellow());
    println!("  {} letter is not in the word", " A ".white().on_bright_black());
    println!("\nCommands: :new, :easy, :medium, :hard, :stats, :help, :quit\n");
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: KeyValueStore, R: Rng>(session: &mut Session<S, R>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, stdin.lock())
}

/// Run the simple mode reading lines from `input`
///
/// Returns when input ends or `:quit` is entered.
///
/// # Errors
///
/// Returns an error if reading a line or flushing stdout fails.
pub fn run_simple_with<S, R, B>(session: &mut Session<S, R>, mut input: B) -> Result<()>
where
    S: KeyValueStore,
    R: Rng,
    B: BufRead,
{
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║              Palpite - Simple Mode           ║");
    println!("╚══════════════════════════════════════════════╝\n");
    print_help();
    announce_round(session);

    let mut line = String::new();
    loop {
        print!("Guess: ");
        io::stdout().flush().context("failed to flush stdout")?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            println!();
            break;
        }

        match parse_line(&line) {
            LineCommand::Quit => break,
            LineCommand::NewRound => {
                session.new_round();
                announce_round(session);
            }
            LineCommand::Difficulty(difficulty) => {
                session.set_difficulty(difficulty);
                println!(
                    "Difficulty set to {} ({} attempts), from the next round.\n",
                    difficulty.to_string().bright_cyan(),
                    difficulty.max_attempts()
                );
            }
            LineCommand::Stats => print_stats(&session.stats()),
            LineCommand::Help => print_help(),
            LineCommand::Guess(text) => handle_guess(session, &text),
        }

        if let Some(warning) = session.take_store_warning() {
            println!("{}", warning.yellow());
        }
    }

    println!("👋 Thanks for playing!\n");
    Ok(())
}

fn handle_guess<S: KeyValueStore, R: Rng>(session: &mut Session<S, R>, text: &str) {
    match session.submit_text(text, Instant::now()) {
        SubmitOutcome::Accepted(evaluation) => {
            print_round(session.round());
            if evaluation.status.is_over() {
                print_round_end(session.round());
                session.new_round();
                announce_round(session);
            } else {
                println!();
            }
        }
        SubmitOutcome::Rejected(error) => println!("{} {error}\n", "❌".red()),
        SubmitOutcome::Incomplete => {}
    }
}

fn announce_round<S: KeyValueStore, R: Rng>(session: &Session<S, R>) {
    let round = session.round();
    println!(
        "🔄 New round: {} letters, {} attempts ({})\n",
        crate::core::WORD_LENGTH,
        round.max_attempts(),
        round.difficulty()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionOptions;
    use crate::store::MemoryStore;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn session() -> Session<MemoryStore> {
        let words = WordList::from_slice(&["ABRIR"]).unwrap();
        Session::with_rng(
            words,
            StdRng::seed_from_u64(2),
            MemoryStore::new(),
            SessionOptions::default(),
        )
    }

    #[test]
    fn parse_commands_and_guesses() {
        assert_eq!(parse_line(":q\n"), LineCommand::Quit);
        assert_eq!(parse_line(":NEW"), LineCommand::NewRound);
        assert_eq!(parse_line(":hard"), LineCommand::Difficulty(Difficulty::Hard));
        assert_eq!(parse_line(":stats"), LineCommand::Stats);
        assert_eq!(parse_line(":whatever"), LineCommand::Help);
        assert_eq!(parse_line("  abrir \n"), LineCommand::Guess("abrir".into()));
    }

    #[test]
    fn plays_until_input_ends() {
        let mut s = session();
        let input = Cursor::new("zzzzz\nabc\nabrir\n");
        run_simple_with(&mut s, input).unwrap();

        assert_eq!(s.stats().wins, 1);
        // A fresh round was started after the win
        assert_eq!(s.round().attempt_index(), 0);
    }

    #[test]
    fn quit_stops_reading() {
        let mut s = session();
        let input = Cursor::new(":quit\nabrir\n");
        run_simple_with(&mut s, input).unwrap();
        assert_eq!(s.stats().wins, 0);
    }

    #[test]
    fn difficulty_command_applies_next_round() {
        let mut s = session();
        let input = Cursor::new(":easy\nzzzzz\n:new\n");
        run_simple_with(&mut s, input).unwrap();
        assert_eq!(s.round().max_attempts(), 8);
        assert_eq!(s.stats(), crate::store::Stats::default());
    }
}
