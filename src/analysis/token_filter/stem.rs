//! Script-aware stemming filter.
//!
//! Classifies every token and expands it into zero or more stem tokens:
//! numeric literals and abbreviations pass through verbatim, letter tokens
//! are split into script fragments and each fragment is stemmed, anything
//! else is dropped.

use crate::analysis::classify::{TokenClass, classify};
use crate::analysis::script::split_letters;
use crate::analysis::stem::StemDispatcher;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Filter that turns classified tokens into stems.
#[derive(Clone, Debug)]
pub struct ScriptStemFilter {
    dispatcher: StemDispatcher,
}

impl ScriptStemFilter {
    /// Create a new filter stemming through the given dispatcher.
    pub fn new(dispatcher: StemDispatcher) -> Self {
        ScriptStemFilter { dispatcher }
    }

    /// Get the dispatcher used by this filter.
    pub fn dispatcher(&self) -> &StemDispatcher {
        &self.dispatcher
    }

    /// Expand one lowercased token into its stems, in fragment order.
    pub fn stem_token(&self, token: &Token) -> Result<Vec<Token>> {
        let class = classify(&token.text);
        match class {
            TokenClass::Numeric | TokenClass::Abbreviation => {
                Ok(vec![token.clone().with_class(class)])
            }
            TokenClass::Letters => split_letters(&token.text)
                .map(|fragment| {
                    let (script, stem) = self.dispatcher.stem_fragment(fragment)?;
                    Ok(token
                        .with_text(stem)
                        .with_class(class)
                        .with_script(script))
                })
                .collect(),
            TokenClass::Other => Ok(Vec::new()),
        }
    }
}

impl Filter for ScriptStemFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        let mut stems = Vec::new();
        for token in tokens {
            stems.extend(self.stem_token(&token)?);
        }
        Ok(Box::new(stems.into_iter()))
    }

    fn name(&self) -> &'static str {
        "script_stem"
    }
}
