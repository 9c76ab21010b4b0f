//! Paragraph stemming pipeline.
//!
//! [`StemmingPipeline`] chains char filters, a tokenizer and token filters
//! into one [`Analyzer`], and runs it over batches of paragraphs. The
//! standard chain built by [`StemmingPipeline::from_resources`] is:
//!
//! 1. Char filter: Unicode normalization (NFC by default)
//! 2. Tokenizer: split on whitespace and backslash runs
//! 3. Lowercase filter
//! 4. Stop filter: drops stop words and empty tokens
//! 5. Script stem filter: classification, fragment splitting, stemming
//!
//! Paragraphs are independent, so a batch is fanned out over a rayon pool
//! and collected by index, keeping output order equal to input order.
//!
//! # Examples
//!
//! ```
//! use stemline::pipeline::{PipelineConfig, StemmingPipeline};
//!
//! let pipeline = StemmingPipeline::from_config(&PipelineConfig::default()).unwrap();
//! let stems = pipeline.run(&["5 кошек бежали по-домам"]).unwrap();
//!
//! assert_eq!(stems, vec![vec!["5", "кошка", "бежать", "по", "дом"]]);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str;
use std::sync::Arc;

use log::{debug, info, warn};
use rayon::ThreadPool;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::{CharFilter, UnicodeNormalizationCharFilter};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{Filter, LowercaseFilter, ScriptStemFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::{Result, StemlineError};

pub mod config;
pub mod request;
pub mod resources;
pub mod trace;

pub use config::{FailurePolicy, PipelineConfig};
pub use request::{ErrorResponse, ParagraphError, StemmingRequest, StemmingResponse};
pub use resources::Resources;
pub use trace::{FragmentTrace, TokenTrace, Tracer};

/// A configurable analyzer that turns paragraphs into stems.
#[derive(Clone)]
pub struct StemmingPipeline {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    parallel: bool,
    thread_pool: Option<Arc<ThreadPool>>,
    failure_policy: FailurePolicy,
}

impl StemmingPipeline {
    /// Create a new pipeline with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        StemmingPipeline {
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
            parallel: true,
            thread_pool: None,
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Build the standard chain over already loaded resources.
    pub fn from_resources(resources: &Resources, config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = RegexTokenizer::with_separator(&config.separator_pattern)?;

        let mut pipeline = StemmingPipeline::new(Arc::new(tokenizer))
            .add_char_filter(Arc::new(UnicodeNormalizationCharFilter::new(
                config.normalization,
            )))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(resources.stop_filter().clone()))
            .add_filter(Arc::new(ScriptStemFilter::new(resources.dispatcher())))
            .parallel(config.parallel)
            .with_failure_policy(config.failure_policy);

        if config.parallel {
            if let Some(threads) = config.threads {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| {
                        StemlineError::resource_unavailable(format!(
                            "Failed to build thread pool: {e}"
                        ))
                    })?;
                pipeline = pipeline.with_thread_pool(Arc::new(pool));
            }
        }

        info!(
            "Stemming pipeline ready: {} worker thread(s), {:?} policy",
            config.effective_threads(),
            config.failure_policy
        );
        Ok(pipeline)
    }

    /// Load resources and build the standard chain.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let resources = Resources::load(config)?;
        Self::from_resources(&resources, config)
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Enable or disable parallel processing of paragraphs.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run parallel batches on a dedicated thread pool.
    pub fn with_thread_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    /// Set the failure policy used by [`process`](Self::process).
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Get the failure policy.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Stem one paragraph.
    pub fn stem_paragraph(&self, paragraph: &str) -> Result<Vec<String>> {
        let stems: Vec<String> = self.analyze(paragraph)?.map(|token| token.text).collect();
        debug!(
            "Stemmed paragraph of {} bytes into {} stems",
            paragraph.len(),
            stems.len()
        );
        Ok(stems)
    }

    /// Stem a batch, failing on the first failing paragraph.
    ///
    /// When several paragraphs fail, the error of the lowest index is
    /// returned.
    pub fn run<S>(&self, paragraphs: &[S]) -> Result<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        self.run_isolated(paragraphs).into_iter().collect()
    }

    /// Stem a batch, keeping a separate result for every paragraph.
    pub fn run_isolated<S>(&self, paragraphs: &[S]) -> Vec<Result<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        self.map_indexed(paragraphs, |index, paragraph| {
            self.stem_paragraph(paragraph.as_ref())
                .map_err(|e| e.with_paragraph(index))
        })
    }

    /// Stem a batch of raw byte paragraphs.
    ///
    /// Paragraphs that are not valid UTF-8 fail with
    /// [`StemlineError::MalformedInput`]; the others are unaffected.
    pub fn run_bytes<B>(&self, paragraphs: &[B]) -> Vec<Result<Vec<String>>>
    where
        B: AsRef<[u8]> + Sync,
    {
        self.map_indexed(paragraphs, |index, bytes| {
            let paragraph = str::from_utf8(bytes.as_ref())
                .map_err(|e| StemlineError::malformed_input(index, e.to_string()))?;
            self.stem_paragraph(paragraph)
                .map_err(|e| e.with_paragraph(index))
        })
    }

    /// Handle a request according to the configured failure policy.
    pub fn process(&self, request: &StemmingRequest) -> Result<StemmingResponse> {
        self.respond(self.run_isolated(&request.paragraphs))
    }

    /// Handle raw byte paragraphs according to the configured failure policy.
    pub fn process_bytes<B>(&self, paragraphs: &[B]) -> Result<StemmingResponse>
    where
        B: AsRef<[u8]> + Sync,
    {
        self.respond(self.run_bytes(paragraphs))
    }

    fn respond(&self, results: Vec<Result<Vec<String>>>) -> Result<StemmingResponse> {
        match self.failure_policy {
            FailurePolicy::AbortBatch => Ok(StemmingResponse {
                stems: results.into_iter().collect::<Result<_>>()?,
                errors: Vec::new(),
            }),
            FailurePolicy::IsolateParagraph => {
                let mut response = StemmingResponse::default();
                for (index, result) in results.into_iter().enumerate() {
                    match result {
                        Ok(stems) => response.stems.push(stems),
                        Err(e) => {
                            warn!("Paragraph {index} failed: {e}");
                            response.stems.push(Vec::new());
                            response.errors.push(ParagraphError {
                                paragraph: index,
                                error: e.to_string(),
                            });
                        }
                    }
                }
                Ok(response)
            }
        }
    }

    fn map_indexed<I, T, F>(&self, items: &[I], f: F) -> Vec<T>
    where
        I: Sync,
        T: Send,
        F: Fn(usize, &I) -> T + Sync + Send,
    {
        if !self.parallel || items.len() < 2 {
            return items.iter().enumerate().map(|(i, item)| f(i, item)).collect();
        }

        let work = || {
            items
                .par_iter()
                .enumerate()
                .map(|(i, item)| f(i, item))
                .collect()
        };
        match &self.thread_pool {
            Some(pool) => pool.install(work),
            None => work(),
        }
    }
}

impl Analyzer for StemmingPipeline {
    fn analyze<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        let mut filtered_text = Cow::Borrowed(text);
        for char_filter in &self.char_filters {
            filtered_text = Cow::Owned(char_filter.filter(&filtered_text));
        }

        // The filtered text is local, so tokens are detached from it here.
        let raw: Vec<Token> = self.tokenizer.tokenize(&filtered_text)?.collect();
        let mut tokens: TokenStream<'a> = Box::new(raw.into_iter());

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "stemming_pipeline"
    }
}

impl fmt::Debug for StemmingPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemmingPipeline")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field("parallel", &self.parallel)
            .field("failure_policy", &self.failure_policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::morph::{DictionaryAnalyzer, MorphAnalyzer, Parse};
    use crate::analysis::stem::{LatinAlgorithm, SnowballStemmer};
    use crate::analysis::token_filter::StopFilter;

    /// Analyzer that fails on one specific word.
    struct BrittleAnalyzer {
        inner: DictionaryAnalyzer,
        poison: &'static str,
    }

    impl MorphAnalyzer for BrittleAnalyzer {
        fn analyze(&self, word: &str) -> Result<Vec<Parse>> {
            if word == self.poison {
                return Err(StemlineError::analyzer_failure(word, "poisoned"));
            }
            self.inner.analyze(word)
        }

        fn name(&self) -> &'static str {
            "brittle"
        }
    }

    fn english_config() -> PipelineConfig {
        PipelineConfig::default().with_latin_algorithm(LatinAlgorithm::English)
    }

    fn pipeline() -> StemmingPipeline {
        StemmingPipeline::from_config(&english_config()).unwrap()
    }

    fn brittle_pipeline(policy: FailurePolicy) -> StemmingPipeline {
        let resources = Resources::new(
            StopFilter::new(),
            Arc::new(BrittleAnalyzer {
                inner: DictionaryAnalyzer::builtin().unwrap(),
                poison: "яд",
            }),
            Arc::new(SnowballStemmer::new(LatinAlgorithm::English)),
        );
        StemmingPipeline::from_resources(&resources, &english_config().with_failure_policy(policy))
            .unwrap()
    }

    #[test]
    fn test_concrete_scenario() {
        let stems = pipeline().run(&["5 кошек бежали по-домам"]).unwrap();
        // "по" is a stop word, but only whole tokens are filtered.
        assert_eq!(stems, vec![vec!["5", "кошка", "бежать", "по", "дом"]]);
    }

    #[test]
    fn test_verbatim_and_routing() {
        let pipeline = pipeline();
        assert_eq!(pipeline.stem_paragraph("5 apples").unwrap(), vec!["5", "appl"]);
        assert_eq!(pipeline.stem_paragraph("и т.д.").unwrap(), vec!["т.д."]);
        assert_eq!(pipeline.stem_paragraph("Running").unwrap(), vec!["run"]);
        assert_eq!(pipeline.stem_paragraph("бежал").unwrap(), vec!["бежать"]);
        assert_eq!(
            pipeline.stem_paragraph("hello-world").unwrap(),
            vec!["hello", "world"]
        );
    }

    #[test]
    fn test_stop_words_and_empty_paragraphs() {
        let pipeline = pipeline();
        assert!(pipeline.stem_paragraph("и в на по").unwrap().is_empty());
        assert!(pipeline.stem_paragraph("").unwrap().is_empty());
        assert!(pipeline.stem_paragraph(" \t\\\\ ").unwrap().is_empty());
        // Capitalised stop words are lowercased before the lookup.
        assert!(pipeline.stem_paragraph("И По").unwrap().is_empty());
    }

    #[test]
    fn test_normalization_before_lookup() {
        let pipeline = pipeline();
        // "ё" decomposed into "е" + U+0308
        let stems = pipeline.stem_paragraph("\u{0415}\u{0308}лки").unwrap();
        assert_eq!(stems, vec!["ёлка"]);
    }

    #[test]
    fn test_batch_order_and_length() {
        let pipeline = pipeline();
        let paragraphs: Vec<String> = (0..64).map(|i| format!("{i} кошек")).collect();
        let stems = pipeline.run(&paragraphs).unwrap();

        assert_eq!(stems.len(), paragraphs.len());
        for (i, paragraph_stems) in stems.iter().enumerate() {
            assert_eq!(paragraph_stems, &vec![i.to_string(), "кошка".to_string()]);
        }
    }

    #[test]
    fn test_dedicated_thread_pool() {
        let config = PipelineConfig {
            threads: Some(2),
            ..english_config()
        };
        let pipeline = StemmingPipeline::from_config(&config).unwrap();
        let stems = pipeline.run(&["дома", "running", "3,5"]).unwrap();
        assert_eq!(stems, vec![vec!["дом"], vec!["run"], vec!["3,5"]]);
    }

    #[test]
    fn test_abort_batch_reports_lowest_index() {
        let pipeline = brittle_pipeline(FailurePolicy::AbortBatch);
        let err = pipeline.run(&["кошек", "яд", "дом", "яд"]).unwrap_err();

        assert_eq!(err.paragraph(), Some(1));
        assert!(err.to_string().contains("'яд'"));
        assert!(pipeline.process(&StemmingRequest::new(["яд"])).is_err());
    }

    #[test]
    fn test_isolated_failures() {
        let pipeline = brittle_pipeline(FailurePolicy::IsolateParagraph);
        let results = pipeline.run_isolated(&["кошек", "яд", "дом"]);

        assert_eq!(results[0].as_ref().unwrap(), &vec!["кошка".to_string()]);
        assert_eq!(results[1].as_ref().unwrap_err().paragraph(), Some(1));
        assert_eq!(results[2].as_ref().unwrap(), &vec!["дом".to_string()]);

        let response = pipeline
            .process(&StemmingRequest::new(["кошек", "яд"]))
            .unwrap();
        assert_eq!(response.stems, vec![vec!["кошка".to_string()], vec![]]);
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].paragraph, 1);
    }

    #[test]
    fn test_malformed_bytes() {
        let pipeline = pipeline();
        let paragraphs: Vec<Vec<u8>> = vec![
            "кошек".as_bytes().to_vec(),
            vec![0xff, 0xfe, 0x20],
            b"cats".to_vec(),
        ];
        let results = pipeline.run_bytes(&paragraphs);

        assert_eq!(results[0].as_ref().unwrap(), &vec!["кошка".to_string()]);
        assert!(matches!(
            results[1],
            Err(StemlineError::MalformedInput { paragraph: 1, .. })
        ));
        assert_eq!(results[2].as_ref().unwrap(), &vec!["cat".to_string()]);

        let response = pipeline
            .with_failure_policy(FailurePolicy::IsolateParagraph)
            .process_bytes(&paragraphs)
            .unwrap();
        assert_eq!(response.stems.len(), 3);
        assert_eq!(response.errors[0].paragraph, 1);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let paragraphs = ["Кошки бегут домой", "hello-world 42", "т.е. ничего"];
        let parallel = pipeline().run(&paragraphs).unwrap();
        let sequential = pipeline().parallel(false).run(&paragraphs).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_offsets_point_at_source_token() {
        let pipeline = pipeline();
        let text = "5 по-домам";
        let tokens: Vec<Token> = pipeline.analyze(text).unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert!(tokens[1..].iter().all(|t| &text[t.start_offset..t.end_offset] == "по-домам"));
        assert!(tokens[1..].iter().all(|t| t.position == 1));
    }

    #[test]
    fn test_debug_lists_chain() {
        let debug = format!("{:?}", pipeline());
        assert!(debug.contains("regex"));
        assert!(debug.contains("unicode_normalization"));
        assert!(debug.contains("script_stem"));
    }
}
