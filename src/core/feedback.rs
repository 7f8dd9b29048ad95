//! Guess feedback calculation and representation
//!
//! Feedback assigns one of three tags to every position of a guess:
//! - `Absent` (letter not in the target, or all occurrences already used)
//! - `Present` (letter in the target, wrong position)
//! - `Correct` (letter in the correct position)

use super::Word;

/// Per-position verdict for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

/// Feedback for a full guess, one tag per position
///
/// Length always equals the target length the feedback was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Calculate the feedback when `guess` is guessed and `target` is the answer
    ///
    /// Implements the standard duplicate-letter rules: greens claim their
    /// target letters first, then yellows are handed out left to right while
    /// unclaimed occurrences remain.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (`Correct`) and remove each
    ///    matched letter from the target's remaining-count table
    /// 2. Second pass, left to right: mark `Present` only if the guessed
    ///    letter still has an unclaimed occurrence, consuming one per mark
    ///
    /// # Panics
    /// Panics in debug mode if the lengths differ; callers validate length
    /// before evaluation.
    ///
    /// # Examples
    /// ```
    /// use guessword::core::{Feedback, LetterFeedback, Word};
    ///
    /// let target = Word::new("monkey").unwrap();
    /// let guess = Word::new("donkey").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.tags()[0], LetterFeedback::Absent); // D
    /// assert_eq!(feedback.tags()[1], LetterFeedback::Correct); // O
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have equal length"
        );

        let len = target.len();
        let mut result = vec![LetterFeedback::Absent; len];
        let mut remaining = target.letter_counts();

        // First pass: exact position matches claim their letters
        // Allow: index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess.bytes()[i] == target.bytes()[i] {
                result[i] = LetterFeedback::Correct;

                let letter = guess.bytes()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: left-to-right, misplaced letters while any remain
        // Allow: index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if result[i] == LetterFeedback::Absent {
                let letter = guess.bytes()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterFeedback::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// The per-position tags, in guess order
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is `Correct` (winning guess)
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.0.iter().all(|&tag| tag == LetterFeedback::Correct)
    }

    /// Count the number of `Correct` tags
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&tag| tag == LetterFeedback::Correct)
            .count()
    }

    /// Count the number of `Present` tags
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&tag| tag == LetterFeedback::Present)
            .count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API; length is unknown until parsed
    pub fn from_str(s: &str) -> Option<Self> {
        let mut tags = Vec::new();

        for ch in s.chars() {
            let tag = match ch {
                'G' | 'g' | '🟩' => LetterFeedback::Correct,
                'Y' | 'y' | '🟨' => LetterFeedback::Present,
                '-' | '_' | '⬜' => LetterFeedback::Absent,
                _ => return None,
            };
            tags.push(tag);
        }

        if tags.is_empty() { None } else { Some(Self(tags)) }
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|tag| match tag {
                LetterFeedback::Correct => '🟩',
                LetterFeedback::Present => '🟨',
                LetterFeedback::Absent => '⬜',
            })
            .collect()
    }
}
