use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The Gemini credential is read once here and handed to the gateway client
/// at construction — no module reads ambient env state after startup. An
/// absent credential does not block startup; generation requests fail at
/// call time until one is provided.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub export_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or_else(|_| "exports".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
