use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while serving a translate-analyse request.
/// Each variant maps to one HTTP status; the Display strings are the exact
/// `error` payloads clients see.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Missing text or language codes")]
    InvalidRequest,

    #[error("Language not supported or failed to load model: {0}")]
    ModelUnavailable(String),

    #[error("Translation failed: {0}")]
    TranslationFailure(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidRequest => StatusCode::BAD_REQUEST,
            ServiceError::ModelUnavailable(_) | ServiceError::TranslationFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
