use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnsupportedLanguage;

/// Languages offered in the target dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    Spanish,
    French,
    Urdu,
    Arabic,
    German,
    Chinese,
    Hindi,
    Turkish,
    Italian,
}

impl TargetLanguage {
    /// All supported languages, in dropdown order.
    pub const ALL: [TargetLanguage; 9] = [
        TargetLanguage::Spanish,
        TargetLanguage::French,
        TargetLanguage::Urdu,
        TargetLanguage::Arabic,
        TargetLanguage::German,
        TargetLanguage::Chinese,
        TargetLanguage::Hindi,
        TargetLanguage::Turkish,
        TargetLanguage::Italian,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::French => "French",
            TargetLanguage::Urdu => "Urdu",
            TargetLanguage::Arabic => "Arabic",
            TargetLanguage::German => "German",
            TargetLanguage::Chinese => "Chinese",
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Turkish => "Turkish",
            TargetLanguage::Italian => "Italian",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TargetLanguage {
    type Err = UnsupportedLanguage;

    /// Labels must match exactly as shown in the dropdown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetLanguage::ALL
            .into_iter()
            .find(|lang| lang.label() == s)
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

/// Body of `POST /api/translate`. Missing fields read as blank and are
/// rejected by the handler like any other blank input.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target_lang: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub target_lang: TargetLanguage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_in_dropdown_order() {
        let labels: Vec<&str> = TargetLanguage::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            ["Spanish", "French", "Urdu", "Arabic", "German", "Chinese", "Hindi", "Turkish", "Italian"]
        );
        for lang in TargetLanguage::ALL {
            assert_eq!(lang.label().parse::<TargetLanguage>(), Ok(lang));
        }
    }

    #[test]
    fn unknown_or_differently_cased_labels_are_rejected() {
        assert_eq!(
            "Klingon".parse::<TargetLanguage>(),
            Err(UnsupportedLanguage("Klingon".to_string()))
        );
        assert!("spanish".parse::<TargetLanguage>().is_err());
        assert!("".parse::<TargetLanguage>().is_err());
    }

    #[test]
    fn spanish_is_preselected() {
        assert_eq!(TargetLanguage::default(), TargetLanguage::Spanish);
    }

    #[test]
    fn unsupported_language_message_names_the_label() {
        let err = "Klingon".parse::<TargetLanguage>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported target language: Klingon");
    }

    #[test]
    fn missing_request_fields_read_as_blank() {
        let request: TranslateRequest = serde_json::from_str(r#"{"target_lang":"French"}"#).unwrap();
        assert_eq!(request.text, "");
        assert_eq!(request.target_lang, "French");
    }
}
