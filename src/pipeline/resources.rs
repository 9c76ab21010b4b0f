//! Process-wide read-only resources.
//!
//! Stop words, the morphological analyzer and the suffix stemmer are built
//! once at startup and shared by every pipeline and every thread. Any
//! failure here is fatal: the pipeline refuses to start rather than run with
//! a missing resource.

use std::fmt;
use std::sync::Arc;

use log::{info, warn};

use crate::analysis::morph::{DictionaryAnalyzer, MorphAnalyzer};
use crate::analysis::stem::{SnowballStemmer, StemDispatcher, Stemmer};
use crate::analysis::stop_words::{DEFAULT_RUSSIAN_STOP_WORDS_SET, load_word_list};
use crate::analysis::token_filter::StopFilter;
use crate::error::{Result, StemlineError};
use crate::pipeline::config::PipelineConfig;

/// Shared resources the stemming pipeline depends on.
#[derive(Clone)]
pub struct Resources {
    stop_filter: StopFilter,
    lemmatizer: Arc<dyn MorphAnalyzer>,
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources")
            .field("stop_words", &self.stop_filter.len())
            .field("lemmatizer", &self.lemmatizer.name())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl Resources {
    /// Assemble resources from already constructed parts.
    pub fn new(
        stop_filter: StopFilter,
        lemmatizer: Arc<dyn MorphAnalyzer>,
        stemmer: Arc<dyn Stemmer>,
    ) -> Self {
        Resources {
            stop_filter,
            lemmatizer,
            stemmer,
        }
    }

    /// Load all resources described by the configuration.
    pub fn load(config: &PipelineConfig) -> Result<Self> {
        let stop_filter = Self::load_stop_words(config)?;
        let lemmatizer = Self::load_lemmatizer(config)?;
        let stemmer = SnowballStemmer::new(config.latin_algorithm);
        info!(
            "Resources loaded: {} stop words, {} lexicon forms, {:?} stemmer",
            stop_filter.len(),
            lemmatizer.len(),
            config.latin_algorithm
        );

        Ok(Resources::new(
            stop_filter,
            Arc::new(lemmatizer),
            Arc::new(stemmer),
        ))
    }

    fn load_stop_words(config: &PipelineConfig) -> Result<StopFilter> {
        let mut words = if config.builtin_stop_words {
            DEFAULT_RUSSIAN_STOP_WORDS_SET.clone()
        } else {
            Default::default()
        };
        if let Some(path) = &config.stop_words_path {
            words.extend(load_word_list(path)?);
        }
        if words.is_empty() {
            warn!("Stop-word set is empty; no tokens will be filtered");
        }
        Ok(StopFilter::with_stop_words(words))
    }

    fn load_lemmatizer(config: &PipelineConfig) -> Result<DictionaryAnalyzer> {
        let mut analyzer = if config.builtin_dictionary {
            DictionaryAnalyzer::builtin()?
        } else {
            DictionaryAnalyzer::new()
        };
        if let Some(path) = &config.dictionary_path {
            analyzer.load_file(path)?;
        }
        if analyzer.is_empty() {
            return Err(StemlineError::resource_unavailable(
                "no lexicon configured for the lemmatizer",
            ));
        }
        Ok(analyzer.guess_unknown(config.guess_unknown))
    }

    /// Get the stop filter.
    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }

    /// Get the morphological analyzer.
    pub fn lemmatizer(&self) -> &Arc<dyn MorphAnalyzer> {
        &self.lemmatizer
    }

    /// Get the suffix stemmer.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    /// Build a dispatcher over the shared stemming capabilities.
    pub fn dispatcher(&self) -> StemDispatcher {
        StemDispatcher::new(Arc::clone(&self.lemmatizer), Arc::clone(&self.stemmer))
    }
}
