#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use restaurant_review_backend::routes::create_router;
use restaurant_review_backend::services::llm::{CompletionRequest, LlmClient, LlmError};
use restaurant_review_backend::state::AppState;
use tower::util::ServiceExt;

/// What the fake model answers with.
#[derive(Clone)]
pub enum Reply {
    Text(String),
    Api(u16, String),
}

/// An `LlmClient` that always gives the same reply and records every request.
pub struct ScriptedLlm {
    reply: Reply,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedLlm {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn text(reply: &str) -> Arc<Self> {
        Self::new(Reply::Text(reply.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> CompletionRequest {
        self.requests.lock().unwrap().last().cloned().expect("no LLM call recorded")
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Api(status, body) => Err(LlmError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

pub fn app(llm: Arc<ScriptedLlm>) -> Router {
    create_router().with_state(Arc::new(AppState::new(llm)))
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub const SAMPLE_ANALYSIS: &str = r#"{
  "restaurant_name": "Pista House",
  "summary": "Famous for haleem in Hyderabad.",
  "hygiene_rating": "4/5",
  "food_quality": "Great",
  "dietary_options": { "vegetarian": "Yes", "vegan": "No", "gluten_free": "Limited" },
  "popular_dishes": ["Haleem", "Biryani"]
}"#;
