// src/services/context.rs
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Parse the serialized analysis the client sent back and flatten it.
pub fn context_from_raw(analysis_text_raw: &str) -> Result<String, ContextError> {
    match serde_json::from_str::<Value>(analysis_text_raw)? {
        Value::Object(map) => Ok(flatten_analysis(&map)),
        other => Err(ContextError::NotAnObject(kind(&other))),
    }
}

/// Render an analysis mapping as one `Label: value` line per field.
///
/// Nested objects become `Field - SubField: value` lines and arrays are joined
/// with `", "`. Field order follows the map's insertion order.
pub fn flatten_analysis(data: &Map<String, Value>) -> String {
    let mut lines = Vec::with_capacity(data.len());
    for (key, value) in data {
        match value {
            Value::Object(nested) => {
                for (sub_key, sub_value) in nested {
                    lines.push(format!(
                        "{} - {}: {}",
                        humanize_key(key),
                        humanize_key(sub_key),
                        render_scalar(sub_value)
                    ));
                }
            }
            Value::Array(items) => {
                let joined = items.iter().map(render_scalar).collect::<Vec<_>>().join(", ");
                lines.push(format!("{}: {}", humanize_key(key), joined));
            }
            other => lines.push(format!("{}: {}", humanize_key(key), render_scalar(other))),
        }
    }
    lines.join("\n")
}

/// `gluten_free` -> `Gluten Free`. Every alphabetic run starts upper case and
/// continues lower case.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_alpha = false;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn flattens_scalars_and_nested_maps_in_order() {
        let data = as_map(json!({
            "food_quality": "Great",
            "dietary_options": { "vegan": "Yes" }
        }));
        assert_eq!(
            flatten_analysis(&data),
            "Food Quality: Great\nDietary Options - Vegan: Yes"
        );
    }

    #[test]
    fn joins_lists_and_renders_non_strings() {
        let data = as_map(json!({
            "popular_dishes": ["Biryani", "Haleem"],
            "total_reviews": 120,
            "open": true,
            "parking": null
        }));
        assert_eq!(
            flatten_analysis(&data),
            "Popular Dishes: Biryani, Haleem\nTotal Reviews: 120\nOpen: true\nParking: null"
        );
    }

    #[test]
    fn empty_map_is_empty_text() {
        assert_eq!(flatten_analysis(&Map::new()), "");
    }

    #[test]
    fn humanizes_keys_like_title_case() {
        assert_eq!(humanize_key("gluten_free"), "Gluten Free");
        assert_eq!(humanize_key("private_space_for_parties"), "Private Space For Parties");
        assert_eq!(humanize_key("RUSH_hours"), "Rush Hours");
        assert_eq!(humanize_key("top3dishes"), "Top3Dishes");
    }

    #[test]
    fn raw_context_rejects_bad_input() {
        assert!(matches!(
            context_from_raw("not json"),
            Err(ContextError::InvalidJson(_))
        ));
        let err = context_from_raw("[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "expected a JSON object, found an array");
    }

    #[test]
    fn raw_context_round_trips_object() {
        let text = context_from_raw(r#"{"summary": "Cosy", "hygiene_rating": "4/5"}"#).unwrap();
        assert_eq!(text, "Summary: Cosy\nHygiene Rating: 4/5");
    }
}
