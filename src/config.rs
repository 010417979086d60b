use std::fs;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_model_service_url")]
    pub model_service_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_model_service_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model_service_url: default_model_service_url(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") || path_lower.ends_with(".jsonld") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}
