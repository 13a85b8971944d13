use anyhow::Result;

use crate::models::ChatMessage;

/// Trait for chat-completion backends (Groq, OpenRouter, etc.)
#[async_trait::async_trait]
pub trait ChatService: Send + Sync {
    /// Sends the messages and returns the assistant's raw text reply.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String>;

    fn model_name(&self) -> &str;
}

/// Canned replies for tests, no network involved.
#[cfg(test)]
pub struct MockChatService {
    reply: Result<String, String>,
    pub seen: std::sync::Mutex<Vec<Vec<ChatMessage>>>,
}

#[cfg(test)]
impl MockChatService {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl ChatService for MockChatService {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        self.seen.lock().unwrap().push(messages);
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => anyhow::bail!("{}", message),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
