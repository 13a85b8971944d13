use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::ChatService;
use crate::config::AppConfig;
use crate::models::ChatMessage;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Debug, Deserialize)]
struct MessageContent {
    content: String,
}

/// Client for Groq's OpenAI-compatible chat completions endpoint
pub struct GroqService {
    api_key: String,
    model: String,
    temperature: f32,
    api_url: String,
    client: reqwest::Client,
}

impl GroqService {
    pub fn new(api_key: String, model: String, temperature: f32, api_url: String) -> Self {
        Self {
            api_key,
            model,
            temperature,
            api_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut service = Self::new(
            config.chat_api_key.clone(),
            config.model_id.clone(),
            config.temperature,
            config.chat_api_url.clone(),
        );

        if let Some(timeout) = config.chat_timeout {
            service.client = reqwest::Client::builder().timeout(timeout).build()?;
        }

        Ok(service)
    }
}

#[async_trait::async_trait]
impl ChatService for GroqService {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
        };

        log::info!("🤖 Sending request to chat API with model: {}", self.model);
        log::debug!("📤 Request payload size: {} bytes", serde_json::to_string(&request)?.len());

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        log::debug!("📥 Chat API response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            log::error!("❌ Chat API error ({}): {}", status, error_text);
            anyhow::bail!("Chat API error ({}): {}", status, error_text);
        }

        let response_text = response.text().await?;
        log::debug!("📄 Raw chat response size: {} bytes", response_text.len());

        let chat_response: ChatResponse = serde_json::from_str(&response_text)?;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("Chat API returned no choices"))?;

        log::debug!("💬 Chat response content: {}", content);
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
