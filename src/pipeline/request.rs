//! Request and response shapes for batch stemming.
//!
//! These are the JSON documents accepted and produced by the CLI.
//!
//! ```json
//! {"paragraphs": ["5 кошек бежали по-домам"]}
//! {"stems": [["5", "кошка", "бежать", "по", "дом"]]}
//! ```

use serde::{Deserialize, Serialize};

/// A batch of paragraphs to stem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmingRequest {
    pub paragraphs: Vec<String>,
}

impl StemmingRequest {
    pub fn new<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StemmingRequest {
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Stems for every paragraph of a request, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmingResponse {
    pub stems: Vec<Vec<String>>,

    /// Paragraphs that failed under the isolating failure policy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ParagraphError>,
}

/// A failure attached to one paragraph of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphError {
    pub paragraph: usize,
    pub error: String,
}

/// Error document for a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(error: S) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}
