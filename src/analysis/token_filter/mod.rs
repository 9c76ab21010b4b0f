//! Token filter implementations for token transformation.
//!
//! Filters receive a token stream and produce a new one. The stemming
//! pipeline chains them in a fixed order:
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Script Stem
//! ```
//!
//! # Examples
//!
//! ```
//! use stemline::analysis::token_filter::Filter;
//! use stemline::analysis::token_filter::lowercase::LowercaseFilter;
//! use stemline::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Привет", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "привет");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod stem;
pub mod stop;

// Re-export all filters for convenient access
pub use lowercase::LowercaseFilter;
pub use stem::ScriptStemFilter;
pub use stop::StopFilter;
