use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::error::ServiceError;
use crate::pipeline::{self, TranslateRequest};
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Liveness probe used to verify port-forwarding end to end
        .route("/hello", get(hello))
        // Health check including the model-serving sidecar
        .route("/api/health", get(health_check))
        .route("/translate-analyse", post(translate_analyse))
}

async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from Flask on Ubuntu VM!" }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let model_service_healthy = state.model_service.health_check().await.unwrap_or(false);
    Json(json!({
        "status": "ok",
        "model_service": model_service_healthy
    }))
}

async fn translate_analyse(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<Value>, ServiceError> {
    let sentences = pipeline::process(&state, &request).await.map_err(|e| {
        warn!("translate-analyse failed: {}", e);
        e
    })?;

    Ok(Json(json!({
        "sentences": sentences,
        "source_lang": request.source_lang.trim(),
        "target_lang": request.target_lang.trim(),
    })))
}
