//! Word list loading utilities
//!
//! Parses the nested category JSON for the target pool and plain
//! line-per-word text for the lexicon, from embedded defaults or files.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use super::{Lexicon, WordSource};

/// On-disk shape of the target pool: `{ "category": ["word", ...] }`
///
/// A `BTreeMap` keeps category order stable across loads.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct WordlistFile(BTreeMap<String, Vec<String>>);

/// Parse a target pool from its JSON form
///
/// Category order follows the sorted key order, so load results are
/// deterministic regardless of JSON key order.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON of the expected shape.
pub fn parse_wordlist(json: &str) -> io::Result<WordSource> {
    let raw: WordlistFile = serde_json::from_str(json).map_err(io::Error::other)?;

    Ok(WordSource::from_categories(raw.0))
}

/// Parse a lexicon from line-per-word text, skipping blanks and invalid entries
#[must_use]
pub fn parse_lexicon(text: &str) -> Lexicon {
    Lexicon::from_words(text.lines().filter(|line| !line.trim().is_empty()))
}

/// Load a target pool from a JSON file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or is not valid
/// category JSON.
///
/// # Examples
/// ```no_run
/// use guessword::wordlists::loader::load_wordlist_from_file;
///
/// let source = load_wordlist_from_file("data/wordlist.json").unwrap();
/// println!("Loaded {} targets", source.word_count());
/// ```
pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordSource> {
    let content = fs::read_to_string(path)?;
    parse_wordlist(&content)
}

/// Load a lexicon from a line-per-word text file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_lexicon_from_file<P: AsRef<Path>>(path: P) -> io::Result<Lexicon> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lexicon(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_wordlist_nested_shape() {
        let json = r#"{"animals": ["horse", "otter"], "food": ["bread"]}"#;
        let source = parse_wordlist(json).unwrap();

        assert_eq!(source.categories().len(), 2);
        assert_eq!(source.categories()[0].name, "animals");
        assert_eq!(source.categories()[0].words.len(), 2);
        assert_eq!(source.categories()[1].words[0].text(), "BREAD");
    }

    #[test]
    fn parse_wordlist_skips_invalid_words() {
        let json = r#"{"mixed": ["horse", "h0rse", ""]}"#;
        let source = parse_wordlist(json).unwrap();
        assert_eq!(source.word_count(), 1);
    }

    #[test]
    fn parse_wordlist_rejects_malformed_json() {
        assert!(parse_wordlist("not json").is_err());
        assert!(parse_wordlist(r#"["flat", "list"]"#).is_err());
    }

    #[test]
    fn parse_lexicon_skips_blanks() {
        let lexicon = parse_lexicon("horse\n\n  \notter\n");
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("HORSE"));
        assert!(lexicon.contains("otter"));
    }
}
