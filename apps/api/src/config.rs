use anyhow::{Context, Result};

const DEFAULT_PORT: &str = "5000";
/// 10 MiB
const DEFAULT_MAX_FILE_SIZE: &str = "10485760";

/// Application configuration loaded from environment variables.
/// Every variable is optional; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ats_api_url: Option<String>,
    pub ats_api_key: Option<String>,
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ats_api_url: optional_env("ATS_API_URL"),
            ats_api_key: optional_env("ATS_API_KEY"),
            cors_origins: optional_env("CORS_ORIGIN")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            max_upload_bytes: std::env::var("MAX_FILE_SIZE")
                .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE.to_string())
                .parse::<usize>()
                .context("MAX_FILE_SIZE must be a byte count")?,
        })
    }

    /// URL and key of the remote ATS API, when both are configured.
    pub fn external_scorer(&self) -> Option<(&str, &str)> {
        match (&self.ats_api_url, &self.ats_api_key) {
            (Some(url), Some(key)) => Some((url.as_str(), key.as_str())),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5000,
            rust_log: "info".to_string(),
            ats_api_url: None,
            ats_api_key: None,
            cors_origins: Vec::new(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
