use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tracing::{debug, error, info};

use super::interface::{TranslationModel, TranslationModelProvider};
use crate::language::LanguagePair;
use crate::model_service::ModelServiceClient;

/// Translation capability backed by one loaded model on the model service.
pub struct RemoteTranslationModel {
    service: Arc<ModelServiceClient>,
    model: String,
}

#[async_trait]
impl TranslationModel for RemoteTranslationModel {
    async fn translate(&self, text: &str, max_length: usize) -> Result<String, anyhow::Error> {
        let response = self.service.translate(&self.model, text, max_length).await?;
        if response.success {
            debug!("Translated {} chars with {}", text.len(), self.model);
            Ok(response.translation)
        } else {
            let error_msg = response
                .error
                .unwrap_or_else(|| "Unknown error".to_string());
            error!("Translation failed: {}", error_msg);
            Err(anyhow!("{}", error_msg))
        }
    }
}

/// Loads translation models from the model service.
pub struct RemoteTranslationModelProvider {
    service: Arc<ModelServiceClient>,
}

impl RemoteTranslationModelProvider {
    pub fn new(service: Arc<ModelServiceClient>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TranslationModelProvider for RemoteTranslationModelProvider {
    async fn load(&self, pair: LanguagePair) -> Result<Arc<dyn TranslationModel>, anyhow::Error> {
        let model = pair.model_name();
        info!("Loading translation model: {}", model);

        let response = self.service.load_translator(&model).await?;
        if !response.success {
            let error_msg = response
                .error
                .unwrap_or_else(|| format!("no translation model for pair '{}'", pair));
            error!("Translation model load failed: {}", error_msg);
            return Err(anyhow!("{}", error_msg));
        }

        Ok(Arc::new(RemoteTranslationModel {
            service: self.service.clone(),
            model,
        }))
    }
}
