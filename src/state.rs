use std::sync::Arc;

use crate::config::Config;
use crate::model_service::ModelServiceClient;
use crate::nlp::{LanguageModelProvider, RemoteLanguageModelProvider};
use crate::translation::{RemoteTranslationModelProvider, TranslatorCache};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub model_service: Arc<ModelServiceClient>,
    pub language_models: Arc<dyn LanguageModelProvider>,
    pub translators: Arc<TranslatorCache>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model_service = Arc::new(ModelServiceClient::new(
            std::env::var("MODEL_SERVICE_URL")
                .unwrap_or_else(|_| config.system_config.model_service_url.clone()),
        ));

        let language_models = Arc::new(RemoteLanguageModelProvider::new(model_service.clone()));
        let translators = Arc::new(TranslatorCache::new(Arc::new(
            RemoteTranslationModelProvider::new(model_service.clone()),
        )));

        Self {
            config,
            model_service,
            language_models,
            translators,
        }
    }

    /// State wired to injected providers instead of the model service.
    #[cfg(test)]
    pub fn with_providers(
        language_models: Arc<dyn LanguageModelProvider>,
        translations: Arc<dyn crate::translation::interface::TranslationModelProvider>,
    ) -> Self {
        Self {
            config: Config::default(),
            model_service: Arc::new(ModelServiceClient::new("http://127.0.0.1:9".to_string())),
            language_models,
            translators: Arc::new(TranslatorCache::new(translations)),
        }
    }
}
