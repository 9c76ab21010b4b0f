//! Char filter implementations for text normalization.
//!
//! A char filter rewrites raw text before it reaches the tokenizer. The
//! pipeline uses it to bring every token into one canonical Unicode form, so
//! that visually identical characters encoded differently compare equal in
//! the stop-word lookup, the classifier and the lemmatizer.
//!
//! # Examples
//!
//! ```
//! use stemline::analysis::char_filter::CharFilter;
//! use stemline::analysis::char_filter::unicode_normalize::{
//!     NormalizationForm, UnicodeNormalizationCharFilter,
//! };
//!
//! let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::NFC);
//! assert_eq!(filter.filter("e\u{0301}"), "\u{00e9}");
//! ```

/// Trait for character filters that transform text before further processing.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod unicode_normalize;

pub use unicode_normalize::{NormalizationForm, UnicodeNormalizationCharFilter};
