//! Token classification.
//!
//! Each lowercased, normalized token is assigned one [`TokenClass`]. The
//! checks run in a fixed order: numeric first, then abbreviation, then
//! letters. A decimal such as `3.14` would also satisfy the abbreviation
//! pattern, so the numeric check must come first.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::script::is_script_letter;

/// An integer or a decimal with a single `.` or `,` separator.
static NUMERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+([.,]\d+)?$").expect("numeric pattern is valid"));

/// A dot with any character on both sides, anywhere in the token.
static ABBREVIATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".\..").expect("abbreviation pattern is valid"));

/// Classification of a token, deciding which downstream rule applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    /// Numeric literal, emitted verbatim.
    Numeric,
    /// Punctuated abbreviation such as `т.д.`, emitted verbatim.
    Abbreviation,
    /// Contains script letters; split into fragments and stemmed.
    Letters,
    /// No script letters at all; contributes no stems.
    Other,
}

impl TokenClass {
    /// Whether tokens of this class are emitted unchanged.
    pub fn is_verbatim(self) -> bool {
        matches!(self, TokenClass::Numeric | TokenClass::Abbreviation)
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenClass::Numeric => "numeric",
            TokenClass::Abbreviation => "abbreviation",
            TokenClass::Letters => "letters",
            TokenClass::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// Check whether a token is a numeric literal.
pub fn is_numeric(token: &str) -> bool {
    NUMERIC_PATTERN.is_match(token)
}

/// Check whether a token contains an interior dot surrounded by characters.
pub fn is_abbreviation(token: &str) -> bool {
    ABBREVIATION_PATTERN.is_match(token)
}

/// Classify a lowercased, normalized token.
pub fn classify(token: &str) -> TokenClass {
    if is_numeric(token) {
        TokenClass::Numeric
    } else if is_abbreviation(token) {
        TokenClass::Abbreviation
    } else if token.chars().any(is_script_letter) {
        TokenClass::Letters
    } else {
        TokenClass::Other
    }
}
