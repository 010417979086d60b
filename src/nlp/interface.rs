use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// One token of a sentence and its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: String,
}

/// Sentence segmentation and part-of-speech tagging for one language.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Split raw text into sentences, in reading order.
    async fn segment(&self, text: &str) -> Result<Vec<String>, anyhow::Error>;

    /// Tag every token of one sentence, left to right.
    async fn tag(&self, sentence: &str) -> Result<Vec<Token>, anyhow::Error>;
}

/// Loads the analysis capability for a language. Must fail for languages
/// whose model cannot be served.
#[async_trait]
pub trait LanguageModelProvider: Send + Sync {
    async fn load(&self, language: Language) -> Result<Arc<dyn LanguageModel>, anyhow::Error>;
}
