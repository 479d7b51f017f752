// src/services/analysis.rs
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// The structured review produced by `/analyze`. Every key is always
/// serialized; fields the model left out read `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default = "not_available", deserialize_with = "text")]
    pub restaurant_name: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub summary: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub healthiness_rating: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub hygiene_rating: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub price_rating: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub food_quality: String,
    #[serde(default, deserialize_with = "dietary")]
    pub dietary_options: DietaryOptions,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub ambiance: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub private_space_for_parties: String,
    #[serde(default, deserialize_with = "text_list")]
    pub popular_dishes: Vec<String>,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub service_experience: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub service_time: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub portion_quantity: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub rush_hours: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietaryOptions {
    #[serde(default = "not_available", deserialize_with = "text")]
    pub vegetarian: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub vegan: String,
    #[serde(default = "not_available", deserialize_with = "text")]
    pub gluten_free: String,
}

impl Default for DietaryOptions {
    fn default() -> Self {
        Self {
            vegetarian: not_available(),
            vegan: not_available(),
            gluten_free: not_available(),
        }
    }
}

fn scalar_to_text<E: de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Null => Ok(not_available()),
        Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        Value::Array(_) | Value::Object(_) => Err(E::custom("expected text, found a nested value")),
    }
}

/// Strings pass through; numbers and booleans are rendered; null reads "N/A".
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_to_text(Value::deserialize(deserializer)?)
}

/// A list of text values; a lone scalar becomes a one-item list, null an empty one.
fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(scalar_to_text).collect(),
        Value::Null => Ok(Vec::new()),
        scalar => Ok(vec![scalar_to_text(scalar)?]),
    }
}

fn dietary<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DietaryOptions, D::Error> {
    Ok(Option::<DietaryOptions>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_not_available() {
        let result: AnalysisResult =
            serde_json::from_value(json!({ "restaurant_name": "Pista House" })).unwrap();
        assert_eq!(result.restaurant_name, "Pista House");
        assert_eq!(result.summary, NOT_AVAILABLE);
        assert_eq!(result.dietary_options.vegan, NOT_AVAILABLE);
        assert!(result.popular_dishes.is_empty());
    }

    #[test]
    fn scalars_are_rendered_as_text() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "hygiene_rating": 4,
            "private_space_for_parties": true,
            "rush_hours": null,
            "service_time": "Fast",
            "popular_dishes": "Haleem",
            "dietary_options": { "vegetarian": "Yes", "other_diets": "Keto" }
        }))
        .unwrap();
        assert_eq!(result.hygiene_rating, "4");
        assert_eq!(result.private_space_for_parties, "true");
        assert_eq!(result.rush_hours, NOT_AVAILABLE);
        assert_eq!(result.popular_dishes, vec!["Haleem".to_string()]);
        assert_eq!(result.dietary_options.vegetarian, "Yes");
        assert_eq!(result.dietary_options.gluten_free, NOT_AVAILABLE);
    }

    #[test]
    fn nested_value_where_text_expected_fails() {
        let err = serde_json::from_value::<AnalysisResult>(json!({ "summary": { "a": 1 } }));
        assert!(err.is_err());
    }

    #[test]
    fn serializes_every_key_in_schema_order() {
        let result: AnalysisResult = serde_json::from_value(json!({})).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "restaurant_name",
                "summary",
                "healthiness_rating",
                "hygiene_rating",
                "price_rating",
                "food_quality",
                "dietary_options",
                "ambiance",
                "private_space_for_parties",
                "popular_dishes",
                "service_experience",
                "service_time",
                "portion_quantity",
                "rush_hours",
            ]
        );
    }
}
