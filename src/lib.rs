//! # Stemline
//!
//! Paragraph normalization and stemming for mixed Russian and English text.
//!
//! ## Features
//!
//! - Unicode (NFC) normalization and whitespace/backslash tokenization
//! - Whole-token stop-word filtering
//! - Verbatim numbers and punctuated abbreviations
//! - Dictionary lemmatization for Cyrillic, Snowball stemming for Latin
//! - Order-preserving parallel batch processing

pub mod analysis;
pub mod cli;
pub mod error;
pub mod pipeline;

pub mod prelude {
    pub use crate::analysis::{Analyzer, Script, TokenClass};
    pub use crate::error::{Result, StemlineError};
    pub use crate::pipeline::{
        FailurePolicy, PipelineConfig, StemmingPipeline, StemmingRequest, StemmingResponse,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
