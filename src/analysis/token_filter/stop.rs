//! Stop filter implementation.
//!
//! Removes whole tokens found in the stop-word set, together with tokens
//! that are empty. Membership is exact and case-sensitive; the filter is
//! meant to run after lowercasing.
//!
//! # Examples
//!
//! ```
//! use stemline::analysis::token_filter::Filter;
//! use stemline::analysis::token_filter::stop::StopFilter;
//! use stemline::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses default Russian stop words
//! let tokens = vec![
//!     Token::new("кошка", 0),
//!     Token::new("и", 1),
//!     Token::new("собака", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "кошка");
//! assert_eq!(result[1].text, "собака");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::stop_words::DEFAULT_RUSSIAN_STOP_WORDS_SET;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words and empty tokens from the token stream.
///
/// The word set is shared behind an `Arc`, so clones are cheap and all
/// clones see the same read-only set.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default Russian stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use stemline::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("по"));
    /// assert!(!filter.is_stop_word("дом"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_RUSSIAN_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use stemline::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.filter(move |token| {
            !token.is_empty() && !self.is_stop_word(&token.text)
        })))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
