//! Regex-based tokenizer implementation.

use std::iter;
use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, StemlineError};

/// Default separator class: one or more whitespace or backslash characters.
pub const DEFAULT_SEPARATOR_PATTERN: &str = r"[\s\\]+";

/// A tokenizer that splits text on runs of separator characters.
///
/// The pattern describes the separators (the gaps between tokens), so
/// leading and trailing separators never produce empty tokens.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern matching separator runs
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer splitting on whitespace and backslashes.
    pub fn new() -> Result<Self> {
        Self::with_separator(DEFAULT_SEPARATOR_PATTERN)
    }

    /// Create a tokenizer with a custom separator pattern.
    ///
    /// Patterns that can match the empty string are rejected, since they
    /// would split between every character.
    pub fn with_separator(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| StemlineError::config(format!("Invalid separator pattern: {e}")))?;
        if regex.is_match("") {
            return Err(StemlineError::config(format!(
                "Separator pattern '{pattern}' matches the empty string"
            )));
        }

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the separator pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default separator pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        let mut separators = self.pattern.find_iter(text);
        let mut last_end = 0;
        let mut exhausted = false;

        let spans = iter::from_fn(move || {
            while !exhausted {
                let (start, end) = match separators.next() {
                    Some(mat) => {
                        let span = (last_end, mat.start());
                        last_end = mat.end();
                        span
                    }
                    None => {
                        exhausted = true;
                        (last_end, text.len())
                    }
                };
                if end > start {
                    return Some((start, end));
                }
            }
            None
        });

        Ok(Box::new(spans.enumerate().map(move |(position, (start, end))| {
            Token::with_offsets(&text[start..end], position, start, end)
        })))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
