//! Morphological analysis for Cyrillic fragments.
//!
//! A [`MorphAnalyzer`] turns an inflected word into ranked candidate parses.
//! The stemming pipeline only ever consumes the first candidate's normal
//! form, so ranking policy belongs entirely to the analyzer.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod dictionary;

pub use dictionary::DictionaryAnalyzer;

/// One candidate analysis of a word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parse {
    /// Dictionary (lemma) form of the word.
    pub normal_form: String,
    /// Ranking score; higher is better.
    pub score: f64,
}

impl Parse {
    pub fn new<S: Into<String>>(normal_form: S, score: f64) -> Self {
        Parse {
            normal_form: normal_form.into(),
            score,
        }
    }
}

/// Trait for dictionary-backed morphological analyzers.
///
/// Implementations must be immutable after construction so a single
/// instance can be shared across threads without locking.
pub trait MorphAnalyzer: Send + Sync {
    /// Analyze a lowercase word and return candidate parses, best first.
    fn analyze(&self, word: &str) -> Result<Vec<Parse>>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}
