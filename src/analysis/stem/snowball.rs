//! Snowball suffix-stripping stemmer for Latin-script fragments.

use std::fmt;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

use super::Stemmer;
use crate::error::Result;

/// Snowball algorithms available for Latin-script fragments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatinAlgorithm {
    Arabic,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    #[default]
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Turkish,
}

impl LatinAlgorithm {
    fn to_algorithm(self) -> Algorithm {
        match self {
            LatinAlgorithm::Arabic => Algorithm::Arabic,
            LatinAlgorithm::Danish => Algorithm::Danish,
            LatinAlgorithm::Dutch => Algorithm::Dutch,
            LatinAlgorithm::English => Algorithm::English,
            LatinAlgorithm::Finnish => Algorithm::Finnish,
            LatinAlgorithm::French => Algorithm::French,
            LatinAlgorithm::German => Algorithm::German,
            LatinAlgorithm::Greek => Algorithm::Greek,
            LatinAlgorithm::Hungarian => Algorithm::Hungarian,
            LatinAlgorithm::Italian => Algorithm::Italian,
            LatinAlgorithm::Norwegian => Algorithm::Norwegian,
            LatinAlgorithm::Portuguese => Algorithm::Portuguese,
            LatinAlgorithm::Romanian => Algorithm::Romanian,
            LatinAlgorithm::Russian => Algorithm::Russian,
            LatinAlgorithm::Spanish => Algorithm::Spanish,
            LatinAlgorithm::Swedish => Algorithm::Swedish,
            LatinAlgorithm::Tamil => Algorithm::Tamil,
            LatinAlgorithm::Turkish => Algorithm::Turkish,
        }
    }
}

/// Stemmer backed by the Snowball algorithms of `rust-stemmers`.
///
/// The Russian algorithm only strips Cyrillic endings, so Latin fragments
/// pass through it unchanged; pick another algorithm to reduce them.
pub struct SnowballStemmer {
    algorithm: LatinAlgorithm,
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    /// Create a new stemmer for the given algorithm.
    pub fn new(algorithm: LatinAlgorithm) -> Self {
        SnowballStemmer {
            algorithm,
            inner: rust_stemmers::Stemmer::create(algorithm.to_algorithm()),
        }
    }

    /// Get the configured algorithm.
    pub fn algorithm(&self) -> LatinAlgorithm {
        self.algorithm
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new(LatinAlgorithm::default())
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        Ok(self.inner.stem(word).into_owned())
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}
