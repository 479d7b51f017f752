// src/services/reviewer.rs
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use super::analysis::AnalysisResult;
use super::context::{ContextError, context_from_raw};
use super::llm::{CompletionRequest, LlmClient, LlmError};
use super::normalizer::clean_json_response;
use super::prompts;

pub const ANALYSIS_TEMPERATURE: f32 = 0.5;
pub const CHAT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Provider(#[from] LlmError),
    #[error("Failed to parse AI response. Raw content: {raw}")]
    UnparsableOutput { raw: String, reason: String },
    #[error("Failed to process analysis data: {0}")]
    InvalidAnalysis(#[from] ContextError),
}

#[derive(Debug, Clone)]
pub struct AnalysisInput<'a> {
    pub restaurant_name: &'a str,
    pub analysis_type: &'a str,
    pub restaurant_location: Option<&'a str>,
}

/// Turns requests into prompts, calls the model, and shapes its replies.
#[derive(Clone)]
pub struct Reviewer {
    llm: Arc<dyn LlmClient>,
}

impl Reviewer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn analyze(&self, input: AnalysisInput<'_>) -> Result<AnalysisResult, ReviewError> {
        let prompt = prompts::analysis_prompt(
            input.restaurant_name,
            input.analysis_type,
            input.restaurant_location,
        );

        info!(
            restaurant = input.restaurant_name,
            analysis_type = input.analysis_type,
            location = ?input.restaurant_location,
            "Starting LLM analysis"
        );
        let started = Instant::now();

        let raw = self
            .llm
            .complete(
                CompletionRequest::text(prompt)
                    .json()
                    .temperature(ANALYSIS_TEMPERATURE),
            )
            .await?;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "LLM analysis completed"
        );

        parse_analysis(&raw)
    }

    pub async fn answer_question(
        &self,
        analysis_text_raw: &str,
        user_question: &str,
    ) -> Result<String, ReviewError> {
        let context = context_from_raw(analysis_text_raw)?;

        info!(question = user_question, "Starting chatbot query");
        let started = Instant::now();

        let answer = self
            .llm
            .complete(
                CompletionRequest::text(prompts::chatbot_prompt(&context, user_question))
                    .temperature(CHAT_TEMPERATURE),
            )
            .await?;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Chatbot query completed"
        );
        Ok(answer)
    }

    pub async fn recommend_dishes(&self, analysis_text_raw: &str) -> Result<String, ReviewError> {
        let context = context_from_raw(analysis_text_raw)?;
        let prompt = prompts::dish_recommendation_prompt(&context);
        Ok(self.llm.complete(CompletionRequest::text(prompt)).await?)
    }

    pub async fn generate_slogan(&self, analysis_text_raw: &str) -> Result<String, ReviewError> {
        let context = context_from_raw(analysis_text_raw)?;
        let prompt = prompts::slogan_prompt(&context);
        Ok(self.llm.complete(CompletionRequest::text(prompt)).await?)
    }
}

/// Clean the model reply and read it as an [`AnalysisResult`]. The error
/// carries the untouched reply for diagnosis.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, ReviewError> {
    let cleaned = clean_json_response(raw);
    let unparsable = |reason: String| {
        warn!(error = %reason, cleaned_content = %cleaned, "Model did not return valid analysis JSON");
        ReviewError::UnparsableOutput {
            raw: raw.to_string(),
            reason,
        }
    };

    let value: Value = serde_json::from_str(cleaned).map_err(|e| unparsable(e.to_string()))?;
    if !value.is_object() {
        return Err(unparsable("top-level value is not a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| unparsable(e.to_string()))
}
