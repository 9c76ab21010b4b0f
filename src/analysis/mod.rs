//! Text analysis module for Stemline.
//!
//! This module provides the building blocks of the stemming pipeline:
//! Unicode normalization, tokenization, token classification, script
//! splitting, stop-word filtering and the two stemming strategies.
//!
//! ```text
//! Paragraph → CharFilter (NFC) → Tokenizer → Lowercase → Stop → ScriptStem → Stems
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod classify;
pub mod morph;
pub mod script;
pub mod stem;
pub mod stop_words;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::Analyzer;
pub use classify::{TokenClass, classify};
pub use morph::{MorphAnalyzer, Parse};
pub use script::{Script, split_letters};
pub use stem::{StemDispatcher, Stemmer};
pub use token::{Token, TokenStream};
