// src/services/normalizer.rs
use std::sync::LazyLock;

use regex::Regex;

static JSON_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("fence pattern is valid")
});

/// Pull the payload out of the first ```json fenced block, or fall back to the
/// whole reply. The result is not checked for JSON validity.
pub fn clean_json_response(text: &str) -> &str {
    match JSON_FENCE.captures(text).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => text.trim(),
    }
}
