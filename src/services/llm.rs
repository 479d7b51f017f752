// src/services/llm.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("LLM API returned error: {status} - {body}")]
    Api { status: u16, body: String },
    #[error("Failed to decode LLM response: {0}")]
    Decode(String),
    #[error("No response from LLM")]
    Empty,
}

impl LlmError {
    /// Provider quota or rate-limit condition, detected from the error text.
    pub fn is_quota(&self) -> bool {
        self.to_string().to_lowercase().contains("quota")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub json_mode: bool,
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            json_mode: false,
            temperature: None,
        }
    }

    pub fn json(mut self) -> Self {
        self.json_mode = true;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

/// Google Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    api_base: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiRequest {
    fn from_completion(request: CompletionRequest) -> Self {
        let config = GenerationConfig {
            temperature: request.temperature,
            response_mime_type: request.json_mode.then_some("application/json"),
        };
        let generation_config =
            (config.temperature.is_some() || config.response_mime_type.is_some()).then_some(config);

        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            generation_config,
        }
    }
}

impl GeminiResponse {
    fn into_text(self) -> Result<String, LlmError> {
        let parts = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default();
        if parts.is_empty() {
            return Err(LlmError::Empty);
        }
        Ok(parts.into_iter().map(|p| p.text).collect())
    }
}

impl GeminiClient {
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.clone(),
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let body = GeminiRequest::from_completion(request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!("Gemini API request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Gemini API error: {}", body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            LlmError::Decode(e.to_string())
        })?;

        parsed.into_text()
    }
}
