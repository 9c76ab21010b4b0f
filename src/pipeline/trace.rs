//! Step-by-step view of how a paragraph is stemmed.
//!
//! The tracer runs the same stages as [`StemmingPipeline`](super::StemmingPipeline)
//! but records the intermediate decision for every token instead of only
//! emitting stems.

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, UnicodeNormalizationCharFilter};
use crate::analysis::classify::{TokenClass, classify};
use crate::analysis::script::{Script, split_letters};
use crate::analysis::stem::StemDispatcher;
use crate::analysis::token_filter::StopFilter;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::resources::Resources;

/// One stemmed letter fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentTrace {
    pub fragment: String,
    pub script: Script,
    pub stem: String,
}

/// Everything that happened to one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTrace {
    pub position: usize,
    /// Token as it appeared in the normalized paragraph.
    pub token: String,
    pub lowercased: String,
    pub stopped: bool,
    /// Absent for stop words, which are never classified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<TokenClass>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<FragmentTrace>,
    pub stems: Vec<String>,
}

/// Records per-token pipeline decisions.
#[derive(Debug, Clone)]
pub struct Tracer {
    normalizer: UnicodeNormalizationCharFilter,
    tokenizer: RegexTokenizer,
    stop_filter: StopFilter,
    dispatcher: StemDispatcher,
}

impl Tracer {
    pub fn new(resources: &Resources, config: &PipelineConfig) -> Result<Self> {
        Ok(Tracer {
            normalizer: UnicodeNormalizationCharFilter::new(config.normalization),
            tokenizer: RegexTokenizer::with_separator(&config.separator_pattern)?,
            stop_filter: resources.stop_filter().clone(),
            dispatcher: resources.dispatcher(),
        })
    }

    /// Trace a single paragraph.
    pub fn trace(&self, paragraph: &str) -> Result<Vec<TokenTrace>> {
        let normalized = self.normalizer.filter(paragraph);
        let mut traces = Vec::new();

        for token in self.tokenizer.tokenize(&normalized)? {
            let lowercased = token.text.to_lowercase();
            let mut trace = TokenTrace {
                position: token.position,
                token: token.text,
                stopped: self.stop_filter.is_stop_word(&lowercased),
                lowercased,
                class: None,
                fragments: Vec::new(),
                stems: Vec::new(),
            };

            if !trace.stopped {
                let class = classify(&trace.lowercased);
                match class {
                    TokenClass::Numeric | TokenClass::Abbreviation => {
                        trace.stems.push(trace.lowercased.clone());
                    }
                    TokenClass::Letters => {
                        for fragment in split_letters(&trace.lowercased) {
                            let (script, stem) = self.dispatcher.stem_fragment(fragment)?;
                            trace.stems.push(stem.clone());
                            trace.fragments.push(FragmentTrace {
                                fragment: fragment.to_string(),
                                script,
                                stem,
                            });
                        }
                    }
                    TokenClass::Other => {}
                }
                trace.class = Some(class);
            }

            traces.push(trace);
        }

        Ok(traces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stem::LatinAlgorithm;
    use crate::pipeline::StemmingPipeline;

    fn tracer() -> Tracer {
        let config = PipelineConfig::default().with_latin_algorithm(LatinAlgorithm::English);
        let resources = Resources::load(&config).unwrap();
        Tracer::new(&resources, &config).unwrap()
    }

    #[test]
    fn test_trace_scenario() {
        let traces = tracer().trace("5 кошек бежали по-домам и").unwrap();
        assert_eq!(traces.len(), 5);

        assert_eq!(traces[0].class, Some(TokenClass::Numeric));
        assert_eq!(traces[0].stems, vec!["5"]);

        assert_eq!(traces[3].fragments.len(), 2);
        assert_eq!(traces[3].fragments[1].fragment, "домам");
        assert_eq!(traces[3].fragments[1].script, Script::Cyrillic);
        assert_eq!(traces[3].stems, vec!["по", "дом"]);

        assert!(traces[4].stopped);
        assert_eq!(traces[4].class, None);
        assert!(traces[4].stems.is_empty());
    }

    #[test]
    fn test_trace_keeps_original_case() {
        let traces = tracer().trace("Running ---").unwrap();
        assert_eq!(traces[0].token, "Running");
        assert_eq!(traces[0].lowercased, "running");
        assert_eq!(traces[0].fragments[0].script, Script::Latin);
        assert_eq!(traces[0].stems, vec!["run"]);
        assert_eq!(traces[1].class, Some(TokenClass::Other));
    }

    #[test]
    fn test_trace_matches_pipeline() {
        let config = PipelineConfig::default().with_latin_algorithm(LatinAlgorithm::English);
        let resources = Resources::load(&config).unwrap();
        let tracer = Tracer::new(&resources, &config).unwrap();
        let pipeline = StemmingPipeline::from_resources(&resources, &config).unwrap();

        let paragraph = "Кошки и т.д. hello-world 3,14 «»";
        let traced: Vec<String> = tracer
            .trace(paragraph)
            .unwrap()
            .into_iter()
            .flat_map(|t| t.stems)
            .collect();
        assert_eq!(traced, pipeline.stem_paragraph(paragraph).unwrap());
    }
}
