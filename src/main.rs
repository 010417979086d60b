mod config;
mod error;
mod language;
mod model_service;
mod nlp;
mod pipeline;
mod routes;
mod state;
#[cfg(test)]
mod test_support;
mod translation;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("glossa_backend=debug,tower_http=debug")
        .init();

    // Load configuration - CONFIG_PATH first, then the conventional names
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                config = Some(cfg);
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
                continue;
            }
        }
    }

    let config = config.unwrap_or_else(|| {
        info!("No config file found, using defaults");
        Config::default()
    });

    // Initialize app state
    let app_state = AppState::new(config);
    let addr: SocketAddr = format!(
        "{}:{}",
        app_state.config.system_config.host, app_state.config.system_config.port
    )
    .parse()?;

    // Build application
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
