//! Lexicon-based morphological analyzer.
//!
//! Known word forms are looked up in a form → lemma lexicon. Unknown forms
//! go through a suffix predictor learned from the same lexicon: for every
//! known form, the endings of up to [`MAX_SUFFIX_LEN`] characters vote for
//! the rewrite (characters to cut, ending to append) that turns the form
//! into its lemma. The longest ending of an unknown word that has votes
//! decides its guesses.
//!
//! # Lexicon format
//!
//! ```text
//! # comment
//! кошек<TAB>кошка
//! стали<TAB>стать<TAB>0.7
//! стали<TAB>сталь<TAB>0.3
//! ```
//!
//! # Examples
//!
//! ```
//! use stemline::analysis::morph::{DictionaryAnalyzer, MorphAnalyzer};
//!
//! let analyzer = DictionaryAnalyzer::builtin().unwrap();
//! let parses = analyzer.analyze("бежали").unwrap();
//! assert_eq!(parses[0].normal_form, "бежать");
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::info;
use unicode_normalization::UnicodeNormalization;

use super::{MorphAnalyzer, Parse};
use crate::error::{Result, StemlineError};

/// Lexicon compiled into the binary.
const BUILTIN_LEXICON: &str = include_str!("../../../data/ru_lexicon.tsv");

/// Longest word ending the suffix predictor learns from.
pub const MAX_SUFFIX_LEN: usize = 5;

/// Upper bound for the score of a guessed parse.
pub const GUESS_WEIGHT: f64 = 0.5;

/// Maximum number of guessed parses returned for an unknown word.
pub const MAX_GUESSES: usize = 3;

/// Rewrite turning a word form into its lemma.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SuffixRule {
    /// Number of trailing characters to remove from the form.
    cut: usize,
    /// Ending appended after the cut.
    ending: String,
}

impl SuffixRule {
    fn learn(form: &str, lemma: &str) -> Self {
        let common = form
            .chars()
            .zip(lemma.chars())
            .take_while(|(a, b)| a == b)
            .count();
        SuffixRule {
            cut: form.chars().count() - common,
            ending: lemma.chars().skip(common).collect(),
        }
    }

    fn apply(&self, word: &str) -> Option<String> {
        let len = word.chars().count();
        if self.cut >= len {
            return None;
        }
        let mut lemma: String = word.chars().take(len - self.cut).collect();
        lemma.push_str(&self.ending);
        Some(lemma)
    }
}

/// A morphological analyzer backed by an in-memory lexicon.
#[derive(Clone, Debug)]
pub struct DictionaryAnalyzer {
    /// Word form → parses, best first.
    lexicon: HashMap<String, Vec<Parse>>,
    /// Word ending → (rule, votes), in first-seen order.
    predictor: HashMap<String, Vec<(SuffixRule, u32)>>,
    /// Whether unknown words are guessed from their endings.
    guess_unknown: bool,
}

impl Default for DictionaryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryAnalyzer {
    /// Create an analyzer with an empty lexicon.
    pub fn new() -> Self {
        DictionaryAnalyzer {
            lexicon: HashMap::new(),
            predictor: HashMap::new(),
            guess_unknown: true,
        }
    }

    /// Create an analyzer loaded with the built-in Russian lexicon.
    pub fn builtin() -> Result<Self> {
        let mut analyzer = Self::new();
        analyzer.add_tsv(BUILTIN_LEXICON, "builtin")?;
        Ok(analyzer)
    }

    /// Create an analyzer from `(form, lemma, score)` entries.
    pub fn from_entries<I, F, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (F, L, f64)>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let mut analyzer = Self::new();
        for (form, lemma, score) in entries {
            analyzer.insert(form.as_ref(), lemma.as_ref(), score);
        }
        analyzer
    }

    /// Enable or disable guessing of unknown words.
    ///
    /// With guessing disabled an unknown word is returned unchanged.
    pub fn guess_unknown(mut self, enabled: bool) -> Self {
        self.guess_unknown = enabled;
        self
    }

    /// Number of distinct word forms in the lexicon.
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Check if a form is present in the lexicon.
    pub fn contains(&self, form: &str) -> bool {
        self.lexicon.contains_key(form)
    }

    /// Load a lexicon file and merge it into this analyzer.
    ///
    /// Returns the number of entries read.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StemlineError::resource_unavailable(format!(
                "Failed to read lexicon {}: {e}",
                path.display()
            ))
        })?;
        let count = self.add_tsv(&content, &path.display().to_string())?;
        info!("Loaded {count} lexicon entries from {}", path.display());
        Ok(count)
    }

    /// Parse lexicon lines and merge them into this analyzer.
    ///
    /// `origin` names the source in error messages.
    pub fn add_tsv(&mut self, content: &str, origin: &str) -> Result<usize> {
        let mut count = 0;
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed = |reason: &str| {
                StemlineError::resource_unavailable(format!(
                    "{origin}:{}: {reason}: '{line}'",
                    index + 1
                ))
            };

            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            let (form, lemma, score) = match fields.as_slice() {
                [form, lemma] => (*form, *lemma, 1.0),
                [form, lemma, score] => {
                    let score: f64 = score.parse().map_err(|_| malformed("invalid score"))?;
                    if !score.is_finite() || score < 0.0 {
                        return Err(malformed("score must be a non-negative number"));
                    }
                    (*form, *lemma, score)
                }
                _ => return Err(malformed("expected 2 or 3 tab-separated fields")),
            };
            if form.is_empty() || lemma.is_empty() {
                return Err(malformed("empty form or lemma"));
            }

            let form = form.nfc().collect::<String>().to_lowercase();
            let lemma = lemma.nfc().collect::<String>().to_lowercase();
            self.insert(&form, &lemma, score);
            count += 1;
        }
        Ok(count)
    }

    /// Add one form → lemma entry.
    ///
    /// A repeated (form, lemma) pair keeps the higher score. Parses of a form
    /// stay sorted by descending score; equal scores keep insertion order.
    pub fn insert(&mut self, form: &str, lemma: &str, score: f64) {
        let parses = self.lexicon.entry(form.to_string()).or_default();
        let existing = parses.iter().position(|p| p.normal_form == lemma);
        match existing {
            Some(at) if parses[at].score >= score => return,
            Some(at) => {
                parses.remove(at);
            }
            None => self.learn(form, lemma),
        }

        let parses = self.lexicon.entry(form.to_string()).or_default();
        let at = parses
            .iter()
            .position(|p| p.score < score)
            .unwrap_or(parses.len());
        parses.insert(at, Parse::new(lemma, score));
    }

    fn learn(&mut self, form: &str, lemma: &str) {
        let rule = SuffixRule::learn(form, lemma);
        let chars: Vec<char> = form.chars().collect();
        // The ending must cover the rewritten part and leave a stem behind.
        let shortest = rule.cut.max(1);
        let longest = MAX_SUFFIX_LEN.min(chars.len().saturating_sub(1));

        for len in shortest..=longest {
            let ending: String = chars[chars.len() - len..].iter().collect();
            let votes = self.predictor.entry(ending).or_default();
            match votes.iter_mut().find(|(known, _)| *known == rule) {
                Some((_, count)) => *count += 1,
                None => votes.push((rule.clone(), 1)),
            }
        }
    }

    fn lookup(&self, word: &str) -> Option<Vec<Parse>> {
        if let Some(parses) = self.lexicon.get(word) {
            return Some(parses.clone());
        }
        if !word.contains('ё') {
            return None;
        }

        let parses = self.lexicon.get(&word.replace('ё', "е"))?;
        Some(
            parses
                .iter()
                .map(|parse| Parse::new(restore_yo(word, &parse.normal_form), parse.score))
                .collect(),
        )
    }

    fn guess(&self, word: &str) -> Vec<Parse> {
        let chars: Vec<char> = word.chars().collect();
        let longest = MAX_SUFFIX_LEN.min(chars.len().saturating_sub(1));

        for len in (1..=longest).rev() {
            let ending: String = chars[chars.len() - len..].iter().collect();
            let Some(votes) = self.predictor.get(&ending) else {
                continue;
            };

            let mut ranked = votes.clone();
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            let total: u32 = ranked.iter().map(|(_, count)| count).sum();

            let mut guesses: Vec<Parse> = Vec::new();
            for (rule, count) in ranked {
                let Some(lemma) = rule.apply(word) else {
                    continue;
                };
                if guesses.iter().any(|p| p.normal_form == lemma) {
                    continue;
                }
                guesses.push(Parse::new(
                    lemma,
                    GUESS_WEIGHT * f64::from(count) / f64::from(total),
                ));
                if guesses.len() == MAX_GUESSES {
                    break;
                }
            }
            if !guesses.is_empty() {
                return guesses;
            }
        }
        Vec::new()
    }
}

/// Put `ё` back into a lemma found through its `е` spelling.
///
/// Only positions where the word has `ё` and the lemma has `е` change.
fn restore_yo(word: &str, lemma: &str) -> String {
    let word: Vec<char> = word.chars().collect();
    lemma
        .chars()
        .enumerate()
        .map(|(i, c)| match word.get(i) {
            Some('ё') if c == 'е' => 'ё',
            _ => c,
        })
        .collect()
}

impl MorphAnalyzer for DictionaryAnalyzer {
    fn analyze(&self, word: &str) -> Result<Vec<Parse>> {
        if word.is_empty() {
            return Err(StemlineError::analyzer_failure(word, "empty word"));
        }

        if let Some(parses) = self.lookup(word) {
            return Ok(parses);
        }

        if self.guess_unknown {
            let guesses = self.guess(word);
            if !guesses.is_empty() {
                return Ok(guesses);
            }
        }

        Ok(vec![Parse::new(word, 0.0)])
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
