//! Word representation
//!
//! A Word stores an uppercase word of arbitrary length. The target word's
//! length drives both the grid width and the attempt budget for a round.

use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase ASCII word of any non-zero length
///
/// Both targets and guesses are represented as Words. Construction
/// normalizes case, so `Word::new("Horse")` and `Word::new("HORSE")`
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty, contains non-ASCII
    /// characters, or contains non-alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use guessword::core::Word;
    ///
    /// let word = Word::new("monkey").unwrap();
    /// assert_eq!(word.text(), "MONKEY");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("h0rse").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True for the zero-length word (unreachable via `new`)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator as the consumption table for duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.text.as_bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("horse").unwrap();
        assert_eq!(word.text(), "HORSE");
        assert_eq!(word.bytes(), b"HORSE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("monkey").unwrap();
        assert_eq!(word.text(), "MONKEY");

        let word2 = Word::new("MoNkEy").unwrap();
        assert_eq!(word2.text(), "MONKEY");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("ox").unwrap().len(), 2);
        assert_eq!(Word::new("giraffe").unwrap().len(), 7);
        assert_eq!(Word::new("a").unwrap().len(), 1);
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("hors3").is_err()); // Number
        assert!(Word::new("hor se").is_err()); // Space
        assert!(Word::new("horse!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("doodle").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'D'), Some(&2));
        assert_eq!(counts.get(&b'O'), Some(&2));
        assert_eq!(counts.get(&b'L'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&1));
    }

    #[test]
    fn word_letter_counts_all_unique() {
        let word = Word::new("horse").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("horse").unwrap();
        assert_eq!(format!("{word}"), "HORSE");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("horse").unwrap();
        let word2 = Word::new("HORSE").unwrap();
        let word3 = Word::new("otter").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
