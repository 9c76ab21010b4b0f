//! Error types for the Stemline library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`StemlineError`] enum. Classification and script splitting never fail;
//! errors come from resource loading, input validation and the two external
//! stemming capabilities.
//!
//! # Examples
//!
//! ```
//! use stemline::error::{StemlineError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(StemlineError::resource_unavailable("dictionary not found"))
//! }
//!
//! assert!(load().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Stemline operations.
#[derive(Error, Debug)]
pub enum StemlineError {
    /// I/O errors (reading dictionaries, stop-word lists, input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stop-word set, lemmatizer or stemmer could not be initialized.
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// A paragraph is not valid text.
    #[error("Malformed input in paragraph {paragraph}: {reason}")]
    MalformedInput { paragraph: usize, reason: String },

    /// The lemmatizer or the suffix stemmer failed on a fragment.
    #[error("{}", analyzer_failure_message(*paragraph, fragment, reason))]
    AnalyzerFailure {
        paragraph: Option<usize>,
        fragment: String,
        reason: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),


    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

fn analyzer_failure_message(paragraph: Option<usize>, fragment: &str, reason: &str) -> String {
    match paragraph {
        Some(index) => {
            format!("Analyzer failure in paragraph {index} on fragment '{fragment}': {reason}")
        }
        None => format!("Analyzer failure on fragment '{fragment}': {reason}"),
    }
}

/// Result type alias for operations that may fail with StemlineError.
pub type Result<T> = std::result::Result<T, StemlineError>;

impl StemlineError {
    /// Create a new resource unavailable error.
    pub fn resource_unavailable<S: Into<String>>(msg: S) -> Self {
        StemlineError::ResourceUnavailable(msg.into())
    }

    /// Create a new malformed input error for the given paragraph.
    pub fn malformed_input<S: Into<String>>(paragraph: usize, reason: S) -> Self {
        StemlineError::MalformedInput {
            paragraph,
            reason: reason.into(),
        }
    }

    /// Create a new analyzer failure for a fragment, without paragraph context.
    pub fn analyzer_failure<F: Into<String>, S: Into<String>>(fragment: F, reason: S) -> Self {
        StemlineError::AnalyzerFailure {
            paragraph: None,
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StemlineError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemlineError::Other(msg.into())
    }

    /// Attach the index of the failing paragraph.
    ///
    /// Only analyzer failures that do not carry an index yet are changed.
    pub fn with_paragraph(self, index: usize) -> Self {
        match self {
            StemlineError::AnalyzerFailure {
                paragraph: None,
                fragment,
                reason,
            } => StemlineError::AnalyzerFailure {
                paragraph: Some(index),
                fragment,
                reason,
            },
            other => other,
        }
    }

    /// Index of the paragraph this error belongs to, if known.
    pub fn paragraph(&self) -> Option<usize> {
        match self {
            StemlineError::MalformedInput { paragraph, .. } => Some(*paragraph),
            StemlineError::AnalyzerFailure { paragraph, .. } => *paragraph,
            _ => None,
        }
    }
}
