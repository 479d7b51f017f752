use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    error::{AppError, CHAT_QUOTA_MESSAGE, QUOTA_MESSAGE},
    message::{
        AnalysisTextRequest, AnalyzeRequest, ChatbotRequest, ChatbotResponse,
        RecommendationsResponse, SloganResponse, required,
    },
    services::{analysis::AnalysisResult, reviewer::AnalysisInput},
    state::SharedState,
};

pub async fn analyze_handler(
    State(state): State<SharedState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(payload) = payload?;

    let (Some(restaurant_name), Some(analysis_type)) = (
        required(&payload.restaurant_name),
        required(&payload.analysis_type),
    ) else {
        return Err(AppError::BadRequest(
            "Missing 'restaurant_name' or 'analysis_type'".to_string(),
        ));
    };

    let input = AnalysisInput {
        restaurant_name: restaurant_name.trim(),
        analysis_type: analysis_type.trim(),
        restaurant_location: payload.restaurant_location.as_deref(),
    };

    let result = state
        .reviewer
        .analyze(input)
        .await
        .map_err(|e| AppError::from_review(e, QUOTA_MESSAGE))?;

    Ok(Json(result))
}

pub async fn chatbot_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatbotRequest>, JsonRejection>,
) -> Result<Json<ChatbotResponse>, AppError> {
    let Json(payload) = payload?;

    let (Some(analysis_text_raw), Some(user_question)) = (
        required(&payload.analysis_text_raw),
        required(&payload.user_question),
    ) else {
        return Err(AppError::BadRequest(
            "Missing 'analysis_text_raw' or 'user_question'".to_string(),
        ));
    };

    let response = state
        .reviewer
        .answer_question(analysis_text_raw, user_question.trim())
        .await
        .map_err(|e| AppError::from_review(e, CHAT_QUOTA_MESSAGE))?;

    Ok(Json(ChatbotResponse { response }))
}

// Legacy endpoints, not used by the current frontend.

pub async fn recommend_dishes_handler(
    State(state): State<SharedState>,
    payload: Result<Json<AnalysisTextRequest>, JsonRejection>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let Json(payload) = payload?;
    let analysis_text_raw = required(&payload.analysis_text_raw)
        .ok_or_else(|| AppError::BadRequest("Missing 'analysis_text_raw'".to_string()))?;

    let recommendations = state
        .reviewer
        .recommend_dishes(analysis_text_raw)
        .await
        .map_err(|e| AppError::from_review(e, QUOTA_MESSAGE))?;

    Ok(Json(RecommendationsResponse { recommendations }))
}

pub async fn generate_slogan_handler(
    State(state): State<SharedState>,
    payload: Result<Json<AnalysisTextRequest>, JsonRejection>,
) -> Result<Json<SloganResponse>, AppError> {
    let Json(payload) = payload?;
    let analysis_text_raw = required(&payload.analysis_text_raw)
        .ok_or_else(|| AppError::BadRequest("Missing 'analysis_text_raw'".to_string()))?;

    let slogan = state
        .reviewer
        .generate_slogan(analysis_text_raw)
        .await
        .map_err(|e| AppError::from_review(e, QUOTA_MESSAGE))?;

    Ok(Json(SloganResponse { slogan }))
}
