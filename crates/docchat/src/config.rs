//! Configuration for the docchat service
//!
//! Values come from the environment; the completion credential is
//! required at startup, never silently degraded.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Context store configuration
    pub store: StoreConfig,
    /// Completion service configuration
    pub llm: LlmConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
    /// Maximum upload size in bytes
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            allowed_origins: vec!["http://localhost:5173".to_string()],
            max_upload_size: 32 * 1024 * 1024, // 32MB
        }
    }
}

/// Context store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the append-only context file
    pub context_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            context_file: PathBuf::from("data.txt"),
        }
    }
}

/// Completion service (Gemini) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Generative Language API base URL
    pub base_url: String,
    /// API key
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            timeout_secs: 120,
        }
    }
}

impl AppConfig {
    /// Build configuration from the environment
    ///
    /// Fails when `GEMINI_API_KEY` is absent; everything else has a
    /// default.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        config.llm.api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| Error::Config("GEMINI_API_KEY is not set".to_string()))?;

        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.llm.model = model;
        }
        if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
            config.llm.base_url = base_url;
        }
        if let Ok(host) = env::var("DOCCHAT_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("DOCCHAT_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid DOCCHAT_PORT: {}", port)))?;
        }
        if let Ok(origins) = env::var("DOCCHAT_ALLOWED_ORIGINS") {
            config.server.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Ok(mb) = env::var("DOCCHAT_MAX_UPLOAD_MB") {
            let mb: usize = mb
                .parse()
                .map_err(|_| Error::Config(format!("Invalid DOCCHAT_MAX_UPLOAD_MB: {}", mb)))?;
            config.server.max_upload_size = mb * 1024 * 1024;
        }
        if let Ok(path) = env::var("DOCCHAT_DATA_FILE") {
            config.store.context_file = PathBuf::from(path);
        }

        Ok(config)
    }
}
