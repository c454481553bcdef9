use anyhow::{Context, Result};

/// Configuration loaded from environment variables (a `.env` file is picked
/// up when present). Missing required keys fail fast at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub serper_api_key: String,
    pub anthropic_api_key: String,
    pub browserless_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            serper_api_key: require_env("SERPER_API_KEY")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            browserless_url: std::env::var("BROWSERLESS_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
