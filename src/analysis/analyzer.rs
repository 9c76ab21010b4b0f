//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is a complete text processing chain, from a raw
//! paragraph to its final tokens:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Char Filters
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! [`StemmingPipeline`](crate::pipeline::StemmingPipeline) is the analyzer
//! used throughout the crate.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve paragraphs
/// from many threads at once.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
