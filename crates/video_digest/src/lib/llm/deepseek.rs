use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{Summarizer, SummaryResponse};

/// Chat completion client for DeepSeek's OpenAI compatible API
#[derive(Clone)]
pub struct DeepSeekClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeepSeekError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status}")]
    Api { status: u16 },
    #[error("completion response has no content")]
    EmptyResponse,
    #[error("DEEPSEEK_API_KEY is not set")]
    MissingApiKey,
}

impl DeepSeekClient {
    const SYSTEM_PROMPT: &str = include_str!("./prompts/system_0.txt");
    const USER_PROMPT_PREFIX: &str = "Resume el siguiente texto en español:\n\n";

    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, DeepSeekError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_key))
    }

    pub fn with_client(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: "https://api.deepseek.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn completion_request<'a>(
        model_name: &'a str,
        transcript: &str,
    ) -> CompletionRequest<'a> {
        CompletionRequest {
            model: model_name,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: Self::SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("{}{}", Self::USER_PROMPT_PREFIX, transcript),
                },
            ],
            stream: false,
        }
    }

    pub async fn send_completion_request(
        &self,
        request: &CompletionRequest<'_>,
    ) -> Result<CompletionResponse, DeepSeekError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("DEEPSEEK_API_KEY is not set");
            DeepSeekError::MissingApiKey
        })?;

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            tracing::error!(status, %message, "Chat completion returned an error");
            return Err(DeepSeekError::Api { status });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

impl Summarizer for DeepSeekClient {
    const SUMMARIZER_MODEL: &'static str = "deepseek-chat";
    type Error = DeepSeekError;

    async fn summarize(&self, content: &str) -> Result<SummaryResponse, Self::Error> {
        let request = Self::completion_request(Self::SUMMARIZER_MODEL, content);

        let response = self
            .send_completion_request(&request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|s| !s.trim().is_empty())
            .ok_or(DeepSeekError::EmptyResponse)?;

        tracing::info!("Summary generated");
        Ok(SummaryResponse { summary })
    }
}
