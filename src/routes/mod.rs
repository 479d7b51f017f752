// src/routes/mod.rs
pub mod review;

use crate::state::SharedState;
use axum::{
    Router,
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use review::{analyze_handler, chatbot_handler, generate_slogan_handler, recommend_dishes_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/chatbot", post(chatbot_handler))
        .route("/recommend_dishes", post(recommend_dishes_handler))
        .route("/generate_slogan", post(generate_slogan_handler))
        .route("/health", get(|| async { "OK" }))
        .route("/", get(|| async { "Restaurant review backend is running" }))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

/// Tag every request with an id, echoed back in the response headers.
async fn request_id_middleware(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("request", request_id = %request_id);

    let mut response = next.run(req).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
