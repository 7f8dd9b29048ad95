//! Guessword - CLI
//!
//! Terminal word-guessing game with a TUI and a plain CLI mode.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use guessword::{
    commands::{eval_pair, run_simple},
    core::Word,
    interactive::{App, run_tui},
    output::formatters::feedback_row,
    round::{GameConfig, Round},
    wordlists::{DEFAULT_LEXICON, DEFAULT_WORDLIST, Lexicon, WordSource, loader},
};

#[derive(Parser)]
#[command(
    name = "guessword",
    about = "Guess the hidden word within a length-scaled number of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Force a specific target word instead of drawing one at random
    #[arg(long, global = true)]
    word: Option<String>,

    /// Attempts granted per target letter (budget = ceil(length × factor))
    #[arg(long, global = true, default_value_t = 1.5)]
    tries_factor: f64,

    /// Path to a category JSON target pool (default: embedded word list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Path to a line-per-word lexicon file (default: embedded lexicon)
    #[arg(short = 'l', long, global = true)]
    lexicon: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game loop without TUI)
    Simple,

    /// Show the feedback for a guess against a target
    Eval {
        /// The hidden target word
        target: String,

        /// The guess to evaluate
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        tries_per_letter: cli.tries_factor,
    };
    if !config.tries_per_letter.is_finite() || config.tries_per_letter <= 0.0 {
        bail!("--tries-factor must be positive");
    }

    match cli.command.unwrap_or(Commands::Play) {
        // Eval needs no word data
        Commands::Eval { target, guess } => {
            let result = eval_pair(&target, &guess).map_err(|e| anyhow::anyhow!(e))?;
            println!(
                "{}  {}",
                feedback_row(&result.guess, &result.feedback),
                result.feedback.to_emoji()
            );
            Ok(())
        }
        command => {
            let (lexicon, source) =
                load_word_data(cli.wordlist.as_deref(), cli.lexicon.as_deref())?;

            let forced_target = cli
                .word
                .as_deref()
                .map(Word::new)
                .transpose()
                .map_err(|e| anyhow::anyhow!("Invalid --word: {e}"))?;

            match command {
                Commands::Simple => run_simple(&lexicon, &source, config, forced_target)
                    .map_err(|e| anyhow::anyhow!(e)),
                _ => run_play(&lexicon, &source, config, forced_target),
            }
        }
    }
}

/// Load the lexicon and word source from flags or the embedded defaults
fn load_word_data(
    wordlist_path: Option<&str>,
    lexicon_path: Option<&str>,
) -> Result<(Lexicon, WordSource)> {
    let source = match wordlist_path {
        Some(path) => loader::load_wordlist_from_file(path)
            .with_context(|| format!("Failed to load word list from {path}"))?,
        None => loader::parse_wordlist(DEFAULT_WORDLIST).context("Embedded word list is broken")?,
    };

    let lexicon = match lexicon_path {
        Some(path) => loader::load_lexicon_from_file(path)
            .with_context(|| format!("Failed to load lexicon from {path}"))?,
        None => loader::parse_lexicon(DEFAULT_LEXICON),
    };

    if source.is_empty() {
        bail!("Word list contains no usable categories");
    }
    if lexicon.is_empty() {
        bail!("Lexicon contains no usable words");
    }

    Ok((lexicon, source))
}

fn run_play(
    lexicon: &Lexicon,
    source: &WordSource,
    config: GameConfig,
    forced_target: Option<Word>,
) -> Result<()> {
    let target = match &forced_target {
        Some(word) => word.clone(),
        None => source
            .draw(&mut rand::rng())
            .cloned()
            .context("Word source is empty")?,
    };

    let round = Round::new(lexicon, config, target);
    let app = App::new(round, source, forced_target);
    run_tui(app)
}
