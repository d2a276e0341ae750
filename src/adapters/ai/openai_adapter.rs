//! OpenAI-compatible adapter for page generation.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `GeneratorPort`: one chat completion, no retry, no streaming.

use crate::domain::{DomainError, GeneratedDocument, Profile, PromptTemplate, RenderedPrompt};
use crate::ports::GeneratorPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// OpenAI-compatible AI adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    template: PromptTemplate,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter with the portfolio prompt.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g., "gpt-3.5-turbo", "llama3.2")
    /// * `temperature` - Sampling temperature
    /// * `max_tokens` - Upper bound on generated tokens
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
            temperature,
            max_tokens,
            template: PromptTemplate::portfolio(),
        }
    }

    /// Replace the prompt template.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    fn build_request(&self, prompt: RenderedPrompt) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.user,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[async_trait::async_trait]
impl GeneratorPort for OpenAiAdapter {
    async fn generate(&self, profile: &Profile) -> Result<GeneratedDocument, DomainError> {
        let prompt = self.template.render(profile);
        info!(
            model = %self.model,
            prompt_len = prompt.user.len(),
            max_tokens = self.max_tokens,
            "sending profile to AI for page generation"
        );

        let request = self.build_request(prompt);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Ai(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::Ai(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Ai(format!("Failed to parse API response: {}", e)))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::Ai("No response choices returned".to_string()))?;

        debug!(html_len = content.len(), "received AI response");

        Ok(GeneratedDocument::new(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_sampling_bounds() {
        let adapter = OpenAiAdapter::new(
            "http://localhost".into(),
            "k".into(),
            "gpt-3.5-turbo".into(),
            0.2,
            2500,
        );
        let profile = Profile::from_body(r#"{"login":"alice"}"#).unwrap();
        let req = adapter.build_request(adapter.template.render(&profile));
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["max_tokens"], 2500);
        assert!((json["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert!(
            json["messages"][1]["content"]
                .as_str()
                .unwrap()
                .contains(r#"{"login":"alice"}"#)
        );
    }
}
