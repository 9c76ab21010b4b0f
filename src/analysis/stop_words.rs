//! Stop-word sources.
//!
//! Stop words are loaded once at startup, lowercased and NFC-normalized so
//! they compare equal to tokens coming out of the normalizer.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::info;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, StemlineError};

/// Built-in Russian stop-word list, one word per line.
const RUSSIAN_STOP_WORDS: &str = include_str!("../../data/stop_words_ru.txt");

/// Default Russian stop words as a HashSet.
pub static DEFAULT_RUSSIAN_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| parse_word_list(RUSSIAN_STOP_WORDS));

/// Parse a one-word-per-line list, skipping blank lines and `#` comments.
pub fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|word| word.nfc().collect::<String>().to_lowercase())
        .collect()
}

/// Load a stop-word list from a file.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        StemlineError::resource_unavailable(format!(
            "Failed to read stop words {}: {e}",
            path.display()
        ))
    })?;
    let words = parse_word_list(&content);
    info!("Loaded {} stop words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_russian_list() {
        assert!(DEFAULT_RUSSIAN_STOP_WORDS_SET.contains("по"));
        assert!(DEFAULT_RUSSIAN_STOP_WORDS_SET.contains("и"));
        assert!(DEFAULT_RUSSIAN_STOP_WORDS_SET.contains("между"));
        assert!(!DEFAULT_RUSSIAN_STOP_WORDS_SET.contains("кошка"));
        assert!(!DEFAULT_RUSSIAN_STOP_WORDS_SET.iter().any(|w| w.starts_with('#')));
    }

    #[test]
    fn test_parse_word_list() {
        let words = parse_word_list("# comment\nThe\n\n  и  \ne\u{0301}te\n");
        assert_eq!(words.len(), 3);
        assert!(words.contains("the"));
        assert!(words.contains("и"));
        assert!(words.contains("\u{00e9}te"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_word_list("/nonexistent/stop_words.txt").unwrap_err();
        assert!(matches!(err, StemlineError::ResourceUnavailable(_)));
    }
}
