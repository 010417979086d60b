use std::sync::Arc;

use async_trait::async_trait;

use crate::language::LanguagePair;

/// Translation for one fixed language pair.
#[async_trait]
pub trait TranslationModel: Send + Sync {
    /// Translate a sentence, bounding the output at `max_length` units.
    async fn translate(&self, text: &str, max_length: usize) -> Result<String, anyhow::Error>;
}

/// Loads the translation capability for a language pair. Must fail for
/// pairs no model exists for.
#[async_trait]
pub trait TranslationModelProvider: Send + Sync {
    async fn load(&self, pair: LanguagePair) -> Result<Arc<dyn TranslationModel>, anyhow::Error>;
}
