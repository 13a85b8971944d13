use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_CHAT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_IMAGE_API_URL: &str = "https://pixabay.com/api/";
pub const DEFAULT_MODEL: &str = "gemma2-9b-it";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Runtime configuration, read once at startup and handed to each service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub chat_api_key: String,
    pub image_api_key: Option<String>,
    pub model_id: String,
    pub temperature: f32,
    pub chat_api_url: String,
    pub chat_timeout: Option<Duration>,
    pub image_api_url: String,
    pub image_lookup_enabled: bool,
    pub bind_addr: String,
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let chat_api_key = lookup("GROQ_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("GROQ_API_KEY must be set in .env file")?;

        let image_api_key = lookup("PIXABAY_API_KEY").filter(|key| !key.trim().is_empty());

        let temperature = match lookup("CHAT_TEMPERATURE") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .with_context(|| format!("CHAT_TEMPERATURE is not a number: {}", raw))?,
            None => DEFAULT_TEMPERATURE,
        };

        let chat_timeout = match lookup("CHAT_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("CHAT_TIMEOUT_SECS is not a whole number: {}", raw))?,
            )),
            None => None,
        };

        let image_lookup_enabled = match lookup("IMAGE_LOOKUP_ENABLED") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("IMAGE_LOOKUP_ENABLED must be true or false: {}", raw))?,
            None => true,
        };

        Ok(Self {
            chat_api_key,
            image_api_key,
            model_id: lookup("CHAT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            chat_api_url: lookup("CHAT_API_URL")
                .unwrap_or_else(|| DEFAULT_CHAT_API_URL.to_string()),
            chat_timeout,
            image_api_url: lookup("IMAGE_API_URL")
                .unwrap_or_else(|| DEFAULT_IMAGE_API_URL.to_string()),
            image_lookup_enabled,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
