use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::nlp::Token;

/// HTTP client for the model-serving sidecar that hosts the NLP and
/// translation models. Models are addressed by registry name; load
/// endpoints report failure through the `success`/`error` fields rather
/// than HTTP status.
#[derive(Debug, Clone)]
pub struct ModelServiceClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadModelRequest {
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadModelResponse {
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentRequest {
    pub model: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentResponse {
    pub sentences: Vec<String>,
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagRequest {
    pub model: String,
    pub sentence: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagResponse {
    pub tokens: Vec<Token>,
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub model: String,
    pub text: String,
    pub max_length: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translation: String,
    pub success: bool,
    pub error: Option<String>,
}

impl ModelServiceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn load_nlp(&self, model: &str) -> Result<LoadModelResponse> {
        let url = format!("{}/nlp/load", self.base_url);
        let request = LoadModelRequest {
            model: model.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let result: LoadModelResponse = response.json().await?;
        Ok(result)
    }

    pub async fn segment(&self, model: &str, text: &str) -> Result<SegmentResponse> {
        let url = format!("{}/nlp/segment", self.base_url);
        let request = SegmentRequest {
            model: model.to_string(),
            text: text.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let result: SegmentResponse = response.json().await?;
        Ok(result)
    }

    pub async fn tag(&self, model: &str, sentence: &str) -> Result<TagResponse> {
        let url = format!("{}/nlp/tag", self.base_url);
        let request = TagRequest {
            model: model.to_string(),
            sentence: sentence.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let result: TagResponse = response.json().await?;
        Ok(result)
    }

    pub async fn load_translator(&self, model: &str) -> Result<LoadModelResponse> {
        let url = format!("{}/translation/load", self.base_url);
        let request = LoadModelRequest {
            model: model.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let result: LoadModelResponse = response.json().await?;
        Ok(result)
    }

    pub async fn translate(
        &self,
        model: &str,
        text: &str,
        max_length: usize,
    ) -> Result<TranslationResponse> {
        let url = format!("{}/translation/translate", self.base_url);
        let request = TranslationRequest {
            model: model.to_string(),
            text: text.to_string(),
            max_length,
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let result: TranslationResponse = response.json().await?;
        Ok(result)
    }

    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}
