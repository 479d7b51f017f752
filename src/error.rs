// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::reviewer::ReviewError;

pub const QUOTA_MESSAGE: &str =
    "You have exceeded the API quota. Please check your billing status or try again later.";
pub const CHAT_QUOTA_MESSAGE: &str =
    "You have exceeded the API quota for the chatbot. Please try again later.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Map a review failure to an HTTP error, swapping provider quota errors
    /// for `quota_message`.
    pub fn from_review(err: ReviewError, quota_message: &str) -> Self {
        match &err {
            ReviewError::Provider(e) if e.is_quota() => {
                tracing::warn!(error = %e, "LLM provider quota exceeded");
                AppError::Internal(quota_message.to_string())
            }
            ReviewError::InvalidAnalysis(_) => AppError::BadRequest(err.to_string()),
            _ => AppError::Internal(err.to_string()),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, "{}", self);
        } else {
            tracing::debug!(%status, "{}", self);
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::context::ContextError;
    use crate::services::llm::LlmError;

    #[test]
    fn quota_errors_are_rewritten() {
        let err = ReviewError::Provider(LlmError::Api {
            status: 429,
            body: "Quota exceeded for quota metric".into(),
        });
        let app = AppError::from_review(err, CHAT_QUOTA_MESSAGE);
        assert_eq!(app.to_string(), CHAT_QUOTA_MESSAGE);
        assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn other_provider_errors_keep_their_text() {
        let err = ReviewError::Provider(LlmError::Api {
            status: 503,
            body: "overloaded".into(),
        });
        let app = AppError::from_review(err, QUOTA_MESSAGE);
        assert_eq!(app.to_string(), "LLM API returned error: 503 - overloaded");
    }

    #[test]
    fn bad_analysis_is_a_client_error() {
        let err = ReviewError::InvalidAnalysis(ContextError::NotAnObject("a string"));
        let app = AppError::from_review(err, QUOTA_MESSAGE);
        assert_eq!(app.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            app.to_string(),
            "Failed to process analysis data: expected a JSON object, found a string"
        );
    }
}
