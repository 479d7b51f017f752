// src/state.rs
use std::sync::Arc;

use crate::services::llm::LlmClient;
use crate::services::reviewer::Reviewer;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub reviewer: Reviewer,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            reviewer: Reviewer::new(llm),
        }
    }
}
