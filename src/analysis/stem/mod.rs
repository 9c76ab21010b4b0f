//! Stemming strategies and script-based dispatch.
//!
//! Cyrillic fragments are lemmatized by a [`MorphAnalyzer`]; Latin fragments
//! go through a rule-based suffix [`Stemmer`]. The [`StemDispatcher`] picks
//! the strategy once per fragment from its [`Script`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use stemline::analysis::morph::DictionaryAnalyzer;
//! use stemline::analysis::stem::StemDispatcher;
//! use stemline::analysis::stem::snowball::{LatinAlgorithm, SnowballStemmer};
//!
//! let dispatcher = StemDispatcher::new(
//!     Arc::new(DictionaryAnalyzer::builtin().unwrap()),
//!     Arc::new(SnowballStemmer::new(LatinAlgorithm::English)),
//! );
//!
//! assert_eq!(dispatcher.stem("running").unwrap(), "run");
//! assert_eq!(dispatcher.stem("кошек").unwrap(), "кошка");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::morph::MorphAnalyzer;
use crate::analysis::script::Script;
use crate::error::{Result, StemlineError};

pub mod snowball;

pub use snowball::{LatinAlgorithm, SnowballStemmer};

/// Trait for rule-based stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> Result<String>;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Routes fragments to the lemmatizer or the suffix stemmer by script.
#[derive(Clone)]
pub struct StemDispatcher {
    lemmatizer: Arc<dyn MorphAnalyzer>,
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for StemDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemDispatcher")
            .field("lemmatizer", &self.lemmatizer.name())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemDispatcher {
    /// Create a dispatcher from the two shared stemming capabilities.
    pub fn new(lemmatizer: Arc<dyn MorphAnalyzer>, stemmer: Arc<dyn Stemmer>) -> Self {
        StemDispatcher {
            lemmatizer,
            stemmer,
        }
    }

    /// Get the morphological analyzer used for Cyrillic fragments.
    pub fn lemmatizer(&self) -> &Arc<dyn MorphAnalyzer> {
        &self.lemmatizer
    }

    /// Get the suffix stemmer used for Latin fragments.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    /// Stem a non-empty fragment.
    pub fn stem(&self, fragment: &str) -> Result<String> {
        self.stem_fragment(fragment).map(|(_, stem)| stem)
    }

    /// Stem a non-empty fragment and report the script it was routed by.
    ///
    /// Failures of either capability become [`StemlineError::AnalyzerFailure`]
    /// naming the fragment. An empty result is a failure as well.
    pub fn stem_fragment(&self, fragment: &str) -> Result<(Script, String)> {
        if fragment.is_empty() {
            return Err(StemlineError::analyzer_failure(fragment, "empty fragment"));
        }

        let script = Script::of(fragment);
        let stem = match script {
            Script::Cyrillic => {
                let parses = self
                    .lemmatizer
                    .analyze(fragment)
                    .map_err(|e| as_analyzer_failure(e, fragment))?;
                parses
                    .into_iter()
                    .next()
                    .map(|parse| parse.normal_form)
                    .ok_or_else(|| {
                        StemlineError::analyzer_failure(
                            fragment,
                            format!("{} returned no parses", self.lemmatizer.name()),
                        )
                    })?
            }
            Script::Latin => self
                .stemmer
                .stem(fragment)
                .map_err(|e| as_analyzer_failure(e, fragment))?,
        };

        if stem.is_empty() {
            return Err(StemlineError::analyzer_failure(
                fragment,
                format!("{script} stemming produced an empty stem"),
            ));
        }
        Ok((script, stem))
    }
}

fn as_analyzer_failure(error: StemlineError, fragment: &str) -> StemlineError {
    match error {
        StemlineError::AnalyzerFailure { .. } => error,
        other => StemlineError::analyzer_failure(fragment, other.to_string()),
    }
}
