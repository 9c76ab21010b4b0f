//! Script detection and letter-run splitting.
//!
//! Only two scripts are recognised: basic Latin (`A-Z`, `a-z`) and the
//! Russian Cyrillic alphabet (`А-Я`, `а-я`, `Ё`, `ё`). Every other character,
//! digits and punctuation included, acts as a separator when a token is split
//! into fragments.
//!
//! # Examples
//!
//! ```
//! use stemline::analysis::script::{Script, split_letters};
//!
//! let fragments: Vec<_> = split_letters("по-домам").collect();
//! assert_eq!(fragments, vec!["по", "домам"]);
//! assert_eq!(Script::of("домам"), Script::Cyrillic);
//! assert_eq!(Script::of("hello"), Script::Latin);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Writing system of a fragment, which selects the stemming strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// At least one Cyrillic letter; routed to the morphological analyzer.
    Cyrillic,
    /// Latin letters only; routed to the suffix stemmer.
    Latin,
}

impl Script {
    /// Resolve the script of a fragment.
    ///
    /// A fragment containing any Cyrillic letter is Cyrillic, even when it
    /// also contains Latin letters.
    pub fn of(fragment: &str) -> Script {
        if fragment.chars().any(is_cyrillic_letter) {
            Script::Cyrillic
        } else {
            Script::Latin
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Cyrillic => write!(f, "cyrillic"),
            Script::Latin => write!(f, "latin"),
        }
    }
}

/// Check whether a character is a letter of the Russian Cyrillic alphabet.
#[inline]
pub fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

/// Check whether a character is a basic Latin letter.
#[inline]
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check whether a character belongs to either supported script.
#[inline]
pub fn is_script_letter(c: char) -> bool {
    is_latin_letter(c) || is_cyrillic_letter(c)
}

/// Split a token on every non-letter character, dropping empty fragments.
///
/// Fragments are returned lazily and in source order.
pub fn split_letters(token: &str) -> impl Iterator<Item = &str> + '_ {
    token
        .split(|c: char| !is_script_letter(c))
        .filter(|fragment| !fragment.is_empty())
}
