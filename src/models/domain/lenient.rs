use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A decoded field that kept its raw JSON when it had the wrong type, so shape
/// validation can name the rule it breaks instead of decoding failing outright.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Valid(T),
    Invalid(Value),
}

impl<T> Lenient<T> {
    pub fn as_valid(&self) -> Option<&T> {
        match self {
            Lenient::Valid(value) => Some(value),
            Lenient::Invalid(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, Value> {
        match self {
            Lenient::Valid(value) => Ok(value),
            Lenient::Invalid(raw) => Err(raw),
        }
    }
}

/// Short description of a JSON value's type for error messages.
pub fn describe_json(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(items) if items.iter().all(Value::is_string) => "a list",
        Value::Array(_) => "a list with non-string items",
        Value::Object(_) => "an object",
    }
}
