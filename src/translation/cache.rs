use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use super::interface::{TranslationModel, TranslationModelProvider};
use crate::error::ServiceError;
use crate::language::LanguagePair;

/// Process-wide map of loaded translation models, one per language pair.
/// Entries are inserted on first use and never evicted. Two requests
/// racing on the same new pair may both load the model; the later insert
/// wins and both instances are valid, so no per-key lock is taken.
pub struct TranslatorCache {
    entries: DashMap<LanguagePair, Arc<dyn TranslationModel>>,
    provider: Arc<dyn TranslationModelProvider>,
}

impl TranslatorCache {
    pub fn new(provider: Arc<dyn TranslationModelProvider>) -> Self {
        Self {
            entries: DashMap::new(),
            provider,
        }
    }

    /// Returns the translation model for the pair, loading it on first use.
    /// A load failure caches nothing, so a later request retries the load.
    pub async fn resolve(
        &self,
        pair: LanguagePair,
    ) -> Result<Arc<dyn TranslationModel>, ServiceError> {
        if let Some(entry) = self.entries.get(&pair) {
            debug!("Translator cache hit for {}", pair);
            return Ok(entry.value().clone());
        }

        let translator = self
            .provider
            .load(pair)
            .await
            .map_err(|e| ServiceError::ModelUnavailable(e.to_string()))?;
        self.entries.insert(pair, translator.clone());
        Ok(translator)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
