use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// The closed set of languages an analysis model is served for. Codes
/// outside this set are rejected before any model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    French,
    English,
}

impl Language {
    pub fn from_code(code: &str) -> Result<Self, ServiceError> {
        match code {
            "fr" => Ok(Language::French),
            "en" => Ok(Language::English),
            other => Err(ServiceError::ModelUnavailable(format!(
                "unknown language code '{other}'"
            ))),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
        }
    }

    /// Identifier of the segmentation/tagging model served for this language.
    pub fn nlp_model(&self) -> &'static str {
        match self {
            Language::French => "fr_core_news_md",
            Language::English => "en_core_web_md",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Cache key for one translation direction. Displays as `fr_to_en`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    pub fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    /// Identifier of the translation model for this pair in the serving
    /// registry.
    pub fn model_name(&self) -> String {
        format!(
            "Helsinki-NLP/opus-mt-{}-{}",
            self.source.code(),
            self.target.code()
        )
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_to_{}", self.source.code(), self.target.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_codes() {
        assert_eq!(Language::from_code("fr").unwrap(), Language::French);
        assert_eq!(Language::from_code("en").unwrap(), Language::English);
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = Language::from_code("de").unwrap_err();
        assert!(matches!(err, ServiceError::ModelUnavailable(_)));
        assert!(err.to_string().contains("de"));
    }

    #[test]
    fn pair_key_and_model_name() {
        let pair = LanguagePair::new(Language::French, Language::English);
        assert_eq!(pair.to_string(), "fr_to_en");
        assert_eq!(pair.model_name(), "Helsinki-NLP/opus-mt-fr-en");
    }

    #[test]
    fn nlp_model_names() {
        assert_eq!(Language::French.nlp_model(), "fr_core_news_md");
        assert_eq!(Language::English.nlp_model(), "en_core_web_md");
    }
}
