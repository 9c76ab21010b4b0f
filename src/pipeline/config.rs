//! Configuration for the stemming pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::NormalizationForm;
use crate::analysis::stem::LatinAlgorithm;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::analysis::tokenizer::regex::DEFAULT_SEPARATOR_PATTERN;
use crate::error::{Result, StemlineError};

/// What to do when one paragraph of a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Fail the whole batch on the first failing paragraph.
    #[default]
    AbortBatch,

    /// Report the failing paragraph and keep the others.
    IsolateParagraph,
}

/// Configuration for the stemming pipeline and the resources it loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Regex matching separator runs between tokens.
    pub separator_pattern: String,

    /// Unicode normalization applied before tokenization.
    pub normalization: NormalizationForm,

    /// Whether to include the built-in Russian stop words.
    pub builtin_stop_words: bool,

    /// Extra stop-word file, one word per line.
    pub stop_words_path: Option<PathBuf>,

    /// Whether to include the built-in Russian lexicon.
    pub builtin_dictionary: bool,

    /// Extra lexicon file (`form<TAB>lemma[<TAB>score]`).
    pub dictionary_path: Option<PathBuf>,

    /// Whether unknown Cyrillic words are guessed from their endings.
    pub guess_unknown: bool,

    /// Snowball algorithm for Latin-script fragments.
    pub latin_algorithm: LatinAlgorithm,

    /// Whether paragraphs are processed in parallel.
    pub parallel: bool,

    /// Size of a dedicated thread pool.
    /// If None, uses the global pool (one thread per CPU core).
    pub threads: Option<usize>,

    /// Batch failure handling.
    pub failure_policy: FailurePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            separator_pattern: DEFAULT_SEPARATOR_PATTERN.to_string(),
            normalization: NormalizationForm::NFC,
            builtin_stop_words: true,
            stop_words_path: None,
            builtin_dictionary: true,
            dictionary_path: None,
            guess_unknown: true,
            latin_algorithm: LatinAlgorithm::Russian,
            parallel: true,
            threads: None,
            failure_policy: FailurePolicy::AbortBatch,
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StemlineError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(StemlineError::config("threads must be greater than zero"));
        }
        RegexTokenizer::with_separator(&self.separator_pattern)?;
        Ok(())
    }

    /// Number of worker threads paragraphs are spread over.
    pub fn effective_threads(&self) -> usize {
        if !self.parallel {
            1
        } else {
            self.threads.unwrap_or_else(num_cpus::get)
        }
    }

    /// Set the failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Set the Latin stemming algorithm.
    pub fn with_latin_algorithm(mut self, algorithm: LatinAlgorithm) -> Self {
        self.latin_algorithm = algorithm;
        self
    }
}
