//! Token types for the stemming pipeline.
//!
//! A [`Token`] is the unit that flows from the tokenizer through the token
//! filters. Tokens produced by the tokenizer carry the raw paragraph text;
//! after the stem filter a token's text is the final stem, while its offsets
//! still point at the whitespace-delimited token it came from.
//!
//! # Examples
//!
//! ```
//! use stemline::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::classify::TokenClass;
use crate::analysis::script::Script;

/// A token represents a single unit of text in the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Index of the source token in the paragraph (0-based)
    pub position: usize,

    /// The byte offset where the source token starts in the paragraph
    pub start_offset: usize,

    /// The byte offset where the source token ends in the paragraph
    pub end_offset: usize,

    /// Class assigned by the classifier, once classified
    pub class: Option<TokenClass>,

    /// Script of the fragment a stem was produced from
    pub script: Option<Script>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            class: None,
            script: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            class: None,
            script: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the token class.
    pub fn with_class(mut self, class: TokenClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Set the script.
    pub fn with_script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream is a lazy sequence of tokens.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;
