//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step after normalization, responsible for
//! splitting a paragraph into raw tokens.
//!
//! # Examples
//!
//! ```
//! use stemline::analysis::tokenizer::Tokenizer;
//! use stemline::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The returned stream is lazy and borrows the input; calling `tokenize`
/// again on the same text restarts the sequence.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use self::regex::RegexTokenizer;
