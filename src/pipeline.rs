use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ServiceError;
use crate::language::{Language, LanguagePair};
use crate::nlp::Token;
use crate::state::AppState;

/// Output length bound passed to every translation call.
pub const MAX_TRANSLATION_LENGTH: usize = 512;

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source_lang: String,
    #[serde(default)]
    pub target_lang: String,
}

/// One segmented sentence with its translation and tagged tokens, in the
/// order the sentence appears in the source text.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceRecord {
    pub original: String,
    pub translation: String,
    pub tokens: Vec<Token>,
}

/// Runs one translate-analyse request end to end: validate, resolve both
/// model capabilities, then walk the segmented sentences in order. The
/// first failing sentence aborts the whole request; no partial results.
pub async fn process(
    state: &AppState,
    request: &TranslateRequest,
) -> Result<Vec<SentenceRecord>, ServiceError> {
    let text = request.text.trim();
    let source_code = request.source_lang.trim();
    let target_code = request.target_lang.trim();

    if text.is_empty() || source_code.is_empty() || target_code.is_empty() {
        return Err(ServiceError::InvalidRequest);
    }

    let source = Language::from_code(source_code)?;
    let target = Language::from_code(target_code)?;
    let pair = LanguagePair::new(source, target);

    let nlp = state
        .language_models
        .load(source)
        .await
        .map_err(|e| ServiceError::ModelUnavailable(e.to_string()))?;
    let translator = state.translators.resolve(pair).await?;

    let sentences = nlp
        .segment(text)
        .await
        .map_err(|e| ServiceError::ModelUnavailable(e.to_string()))?;
    info!("Processing {} sentences for {}", sentences.len(), pair);

    let mut records = Vec::with_capacity(sentences.len());
    for sentence in &sentences {
        let original = sentence.trim();
        let translation = translator
            .translate(original, MAX_TRANSLATION_LENGTH)
            .await
            .map_err(|e| ServiceError::TranslationFailure(e.to_string()))?;
        let tokens = nlp
            .tag(original)
            .await
            .map_err(|e| ServiceError::ModelUnavailable(e.to_string()))?;
        debug!("Sentence of {} tokens translated", tokens.len());

        records.push(SentenceRecord {
            original: original.to_string(),
            translation,
            tokens,
        });
    }

    Ok(records)
}
