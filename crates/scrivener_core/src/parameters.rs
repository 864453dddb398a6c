//! Open-ended generation parameters.

use serde_json::{Map, Value};

/// Parameters interpreted only by the selected strategy.
pub type Parameters = Map<String, Value>;

/// Returns the required keys that are missing from `parameters`.
///
/// A key counts as missing when it is absent or holds null, an empty
/// string, an empty array or an empty object. Order follows `required`.
///
/// # Examples
///
/// ```
/// use scrivener_core::{Parameters, missing_parameters};
/// use serde_json::json;
///
/// let mut parameters = Parameters::new();
/// parameters.insert("content".into(), json!("text"));
/// parameters.insert("claim".into(), json!(""));
/// assert_eq!(missing_parameters(&parameters, &["content", "claim"]), vec!["claim"]);
/// ```
pub fn missing_parameters<'a>(parameters: &Parameters, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|key| parameters.get(*key).is_none_or(is_blank))
        .collect()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
