//! Display functions for command results

use super::formatters::{absent_letters_list, create_progress_bar, guess_tiles};
use crate::core::{GuessResult, Word};
use crate::game::{Round, RoundStatus};
use crate::store::Stats;
use colored::Colorize;

/// Print the result of evaluating one guess against a target
pub fn print_check_result(guess: &Word, result: &GuessResult) {
    println!("\n  {}", guess_tiles(guess, result));
    println!("  {}", result.to_emoji());

    let absent = result.absent_letters(guess);
    if !absent.is_empty() {
        let letters: Vec<String> = absent.iter().map(char::to_string).collect();
        println!("  Absent letters: {}", letters.join(", ").bright_black());
    }

    if result.is_perfect() {
        println!("\n  {}", "✅ Correct!".green().bold());
    }
    println!();
}

/// Print every guess of a round so far, plus the absent letters
pub fn print_round(round: &Round) {
    println!();
    for (guess, result) in round.guesses().iter().zip(round.results()) {
        println!("  {}", guess_tiles(guess, result));
    }

    if !round.absent_letters().is_empty() {
        println!(
            "\n  Absent letters: {}",
            absent_letters_list(round.absent_letters()).bright_black()
        );
    }

    println!(
        "  Attempt {}/{}",
        round.attempt_index().to_string().bright_cyan(),
        round.max_attempts()
    );
}

/// Print the reveal after a round ends
pub fn print_round_end(round: &Round) {
    match round.status() {
        RoundStatus::Won => {
            let attempts = round.attempt_index();
            println!(
                "\n{}",
                format!(
                    "🎉 Got it in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        RoundStatus::Lost => {
            println!(
                "\n{} {}",
                "❌ Out of attempts! The word was".red().bold(),
                round.target().text().bright_yellow().bold()
            );
        }
        RoundStatus::InProgress => {}
    }

    let history: Vec<String> = round.results().iter().map(GuessResult::to_emoji).collect();
    if !history.is_empty() {
        println!("\n  {}", history.join("\n  "));
    }
    println!();
}

/// Print persisted win/loss counters
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {}", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("  Played:   {}", stats.total().to_string().bright_white().bold());
    println!("  Wins:     {}", stats.wins.to_string().green().bold());
    println!("  Losses:   {}", stats.losses.to_string().red().bold());
    println!(
        "  Win rate: [{}] {:.0}%",
        create_progress_bar(stats.win_rate(), 100.0, 20),
        stats.win_rate()
    );
    println!();
}
