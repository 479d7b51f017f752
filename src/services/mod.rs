pub mod analysis;
pub mod context;
pub mod llm;
pub mod normalizer;
pub mod prompts;
pub mod reviewer;
