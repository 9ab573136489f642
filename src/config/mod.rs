mod types;

pub use types::*;

use crate::Result;
use std::env;
use std::path::Path;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let api_url_override = env::var("RAG_API_URL").ok();

    from_sources(&config_path, api_url_override).await
}

/// Resolves the configuration from an explicit file path and backend URL
/// override. A missing file is not an error: every field has a default.
pub async fn from_sources(config_path: &str, api_url_override: Option<String>) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        debug!("Loading configuration from: {}", config_path);

        let config_str = tokio::fs::read_to_string(config_path).await?;
        serde_yaml::from_str(&config_str)?
    } else {
        debug!("No configuration file at {}, using defaults", config_path);

        Config::default()
    };

    if let Some(api_url) = api_url_override {
        config.rag.api_url = api_url;
    }

    Ok(config)
}
