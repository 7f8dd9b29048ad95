//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. One prompt per guess; the grid and
//! keyboard status are reprinted after every accepted submission.

use std::io::{self, Write as _};

use crate::core::Word;
use crate::output::{print_grid, print_keyboard, print_outcome, print_rejection};
use crate::round::{GameConfig, Round};
use crate::wordlists::{Lexicon, WordSource};

/// Run the simple interactive CLI game
///
/// A fixed target can be forced (for practicing a specific word); otherwise
/// each round draws one from the word source.
///
/// # Errors
///
/// Returns an error if the word source is empty or reading user input fails.
pub fn run_simple(
    lexicon: &Lexicon,
    source: &WordSource,
    config: GameConfig,
    forced_target: Option<Word>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Guessword - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden word. After each guess you'll see per-letter");
    println!("feedback: green = right spot, yellow = wrong spot, dim = absent.");
    println!("Commands: 'quit' to exit, 'new' for a new round.\n");

    let mut rng = rand::rng();
    let mut round = Round::new(
        lexicon,
        config,
        next_target(source, &mut rng, forced_target.as_ref())?,
    );

    loop {
        println!(
            "Word has {} letters, {} of {} attempts used.",
            round.state().target().len(),
            round.state().attempt_index(),
            round.state().budget()
        );
        print_grid(round.state());
        print_keyboard(round.state());
        println!();

        let input = get_user_input("Your guess")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                round.restart(next_target(source, &mut rng, forced_target.as_ref())?);
                println!("\n🔄 New round started!\n");
                continue;
            }
            _ => {}
        }

        match round.submit(&input) {
            Ok(report) => {
                if report.outcome.is_over() {
                    print_grid(round.state());
                    print_outcome(&report.outcome);

                    let answer = get_user_input("Play again? (y/n)")?;
                    if answer.eq_ignore_ascii_case("y") {
                        round.restart(next_target(source, &mut rng, forced_target.as_ref())?);
                        println!("\n🔄 New round started!\n");
                    } else {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Err(error) => print_rejection(error),
        }
    }
}

fn next_target<R: rand::Rng>(
    source: &WordSource,
    rng: &mut R,
    forced: Option<&Word>,
) -> Result<Word, String> {
    if let Some(word) = forced {
        return Ok(word.clone());
    }
    source
        .draw(rng)
        .cloned()
        .ok_or_else(|| "Word source is empty".to_string())
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_string())
}
