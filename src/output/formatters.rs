//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Feedback, LetterFeedback, Word};
use crate::round::{KeyboardStatus, LetterStatus};

/// Color a single letter according to its feedback tag
#[must_use]
pub fn paint_letter(letter: char, tag: LetterFeedback) -> ColoredString {
    let s = letter.to_string();
    match tag {
        LetterFeedback::Correct => s.black().on_green().bold(),
        LetterFeedback::Present => s.black().on_yellow().bold(),
        LetterFeedback::Absent => s.white().dimmed(),
    }
}

/// Format a guess with its feedback as a colored row like ` H O R S E `
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.tags())
        .map(|(letter, &tag)| format!(" {}", paint_letter(letter, tag)))
        .collect::<String>()
        + " "
}

/// Format the A-Z keyboard status as a single colored line
///
/// Unknown letters render plain, everything else reuses the feedback colors.
#[must_use]
pub fn keyboard_row(status: &KeyboardStatus) -> String {
    status
        .iter()
        .map(|(letter, letter_status)| {
            let s = (letter as char).to_string();
            let painted = match letter_status {
                LetterStatus::Correct => s.black().on_green().bold(),
                LetterStatus::Present => s.black().on_yellow().bold(),
                LetterStatus::Absent => s.white().dimmed(),
                LetterStatus::Unknown => s.normal(),
            };
            format!("{painted} ")
        })
        .collect()
}

/// Format a row of unrevealed cells for attempts not yet made
#[must_use]
pub fn empty_row(width: usize) -> String {
    " ·".repeat(width) + " "
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_width() {
        assert_eq!(empty_row(3), " · · · ");
        assert_eq!(empty_row(0), " ");
    }

    #[test]
    fn feedback_row_covers_every_letter() {
        let guess = Word::new("horse").unwrap();
        let target = Word::new("house").unwrap();
        let feedback = Feedback::evaluate(&guess, &target);

        let row = feedback_row(&guess, &feedback);
        for letter in ['H', 'O', 'R', 'S', 'E'] {
            assert!(row.contains(letter), "missing {letter} in row");
        }
    }

    #[test]
    fn keyboard_row_lists_alphabet() {
        let row = keyboard_row(&KeyboardStatus::default());
        for letter in 'A'..='Z' {
            assert!(row.contains(letter));
        }
    }
}
