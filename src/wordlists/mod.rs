//! Word data sources
//!
//! Two collaborators feed the game: the [`Lexicon`] answers "is this a real
//! word" during guess validation, and the [`WordSource`] supplies targets.
//! The source keeps the two-level category structure of its JSON form so
//! that target selection stays category-first: each category is equally
//! likely, then each word within it, regardless of category size.

pub mod loader;

use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

use crate::core::Word;

/// Embedded default target pool (nested category JSON)
pub const DEFAULT_WORDLIST: &str = include_str!("../../data/wordlist.json");

/// Embedded default lexicon, one word per line
pub const DEFAULT_LEXICON: &str = include_str!("../../data/lexicon.txt");

/// Membership set of valid guessable words
///
/// Case-normalized to uppercase on construction; lookups normalize too.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from an iterator of words, skipping invalid entries
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|s| Word::new(s.as_ref().trim()).ok())
            .map(|w| w.text().to_string())
            .collect();
        Self { words }
    }

    /// Check whether a word is guessable (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Number of words in the lexicon
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// One named group of candidate target words
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub words: Vec<Word>,
}

/// Target pool organized as category → words
///
/// Deliberately not flattened: `draw` picks a category uniformly first,
/// then a word within it, so words in small categories are more likely
/// than words in large ones.
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    categories: Vec<Category>,
}

impl WordSource {
    /// Build a source from (name, words) pairs, dropping empty categories
    /// and invalid words
    pub fn from_categories<I, S, W>(categories: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<W>)>,
        S: Into<String>,
        W: AsRef<str>,
    {
        let categories = categories
            .into_iter()
            .filter_map(|(name, words)| {
                let words: Vec<Word> = words
                    .iter()
                    .filter_map(|w| Word::new(w.as_ref().trim()).ok())
                    .collect();
                if words.is_empty() {
                    None
                } else {
                    Some(Category {
                        name: name.into(),
                        words,
                    })
                }
            })
            .collect();
        Self { categories }
    }

    /// Draw a target: random category first, then random word within it
    ///
    /// Returns `None` only for an empty source.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        let category = self.categories.choose(rng)?;
        category.words.choose(rng)
    }

    /// All categories in their load order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of candidate targets across all categories
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_membership_is_case_insensitive() {
        let lexicon = Lexicon::from_words(["horse", "OTTER"]);
        assert!(lexicon.contains("HORSE"));
        assert!(lexicon.contains("horse"));
        assert!(lexicon.contains("Otter"));
        assert!(!lexicon.contains("ZEBRA"));
    }

    #[test]
    fn lexicon_skips_invalid_entries() {
        let lexicon = Lexicon::from_words(["horse", "h0rse", "", "otter"]);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn source_draw_returns_member() {
        let source = WordSource::from_categories([
            ("animals", vec!["horse", "otter"]),
            ("food", vec!["bread"]),
        ]);
        let mut rng = rand::rng();

        for _ in 0..20 {
            let target = source.draw(&mut rng).unwrap();
            assert!(["HORSE", "OTTER", "BREAD"].contains(&target.text()));
        }
    }

    #[test]
    fn source_drops_empty_categories() {
        let source = WordSource::from_categories([
            ("animals", vec!["horse"]),
            ("empty", Vec::<&str>::new()),
        ]);
        assert_eq!(source.categories().len(), 1);
        assert_eq!(source.word_count(), 1);
    }

    #[test]
    fn source_empty_draw_is_none() {
        let source = WordSource::default();
        let mut rng = rand::rng();
        assert!(source.draw(&mut rng).is_none());
    }

    #[test]
    fn default_wordlist_parses() {
        let source = loader::parse_wordlist(DEFAULT_WORDLIST).unwrap();
        assert!(!source.is_empty());
        assert!(source.word_count() > 20);
    }

    #[test]
    fn default_lexicon_parses() {
        let lexicon = loader::parse_lexicon(DEFAULT_LEXICON);
        assert!(lexicon.len() > 100);
    }

    #[test]
    fn default_targets_subset_of_default_lexicon() {
        let source = loader::parse_wordlist(DEFAULT_WORDLIST).unwrap();
        let lexicon = loader::parse_lexicon(DEFAULT_LEXICON);

        for category in source.categories() {
            for word in &category.words {
                assert!(
                    lexicon.contains(word.text()),
                    "target '{word}' missing from lexicon"
                );
            }
        }
    }
}
