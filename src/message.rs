// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`. Required fields are optional here so that a
/// missing value can be answered with our own 400 body.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub restaurant_name: Option<String>,
    pub analysis_type: Option<String>,
    pub restaurant_location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatbotRequest {
    pub analysis_text_raw: Option<String>,
    pub user_question: Option<String>,
}

/// Body of the legacy `/recommend_dishes` and `/generate_slogan` endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisTextRequest {
    pub analysis_text_raw: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatbotResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SloganResponse {
    pub slogan: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A present, non-blank field value.
pub fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}
