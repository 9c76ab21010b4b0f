use serde::{Deserialize, Serialize};
use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfc_quick};

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NormalizationForm {
    #[default]
    NFC,
    NFD,
    NFKC,
    NFKD,
}

/// A char filter that performs Unicode normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        match self.form {
            NormalizationForm::NFC => {
                // Most input is already composed.
                if is_nfc_quick(input.chars()) == IsNormalized::Yes {
                    input.to_string()
                } else {
                    input.nfc().collect()
                }
            }
            NormalizationForm::NFD => input.nfd().collect(),
            NormalizationForm::NFKC => input.nfkc().collect(),
            NormalizationForm::NFKD => input.nfkd().collect(),
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}
