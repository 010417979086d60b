use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tracing::{debug, error, info};

use super::interface::{LanguageModel, LanguageModelProvider, Token};
use crate::language::Language;
use crate::model_service::ModelServiceClient;

/// Analysis capability backed by one loaded model on the model service.
pub struct RemoteLanguageModel {
    service: Arc<ModelServiceClient>,
    model: &'static str,
}

#[async_trait]
impl LanguageModel for RemoteLanguageModel {
    async fn segment(&self, text: &str) -> Result<Vec<String>, anyhow::Error> {
        let response = self.service.segment(self.model, text).await?;
        if response.success {
            debug!(
                "Segmented text into {} sentences with {}",
                response.sentences.len(),
                self.model
            );
            Ok(response.sentences)
        } else {
            let error_msg = response
                .error
                .unwrap_or_else(|| "Unknown error".to_string());
            error!("Segmentation failed: {}", error_msg);
            Err(anyhow!("segmentation failed: {}", error_msg))
        }
    }

    async fn tag(&self, sentence: &str) -> Result<Vec<Token>, anyhow::Error> {
        let response = self.service.tag(self.model, sentence).await?;
        if response.success {
            Ok(response.tokens)
        } else {
            let error_msg = response
                .error
                .unwrap_or_else(|| "Unknown error".to_string());
            error!("Tagging failed: {}", error_msg);
            Err(anyhow!("tagging failed: {}", error_msg))
        }
    }
}

/// Loads language models from the model service.
pub struct RemoteLanguageModelProvider {
    service: Arc<ModelServiceClient>,
}

impl RemoteLanguageModelProvider {
    pub fn new(service: Arc<ModelServiceClient>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LanguageModelProvider for RemoteLanguageModelProvider {
    async fn load(&self, language: Language) -> Result<Arc<dyn LanguageModel>, anyhow::Error> {
        let model = language.nlp_model();
        info!("Loading language model: {}", model);

        let response = self.service.load_nlp(model).await?;
        if !response.success {
            let error_msg = response
                .error
                .unwrap_or_else(|| format!("no model for language '{}'", language));
            error!("Language model load failed: {}", error_msg);
            return Err(anyhow!("{}", error_msg));
        }

        Ok(Arc::new(RemoteLanguageModel {
            service: self.service.clone(),
            model,
        }))
    }
}
