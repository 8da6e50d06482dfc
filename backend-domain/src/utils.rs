// Response envelope handling
// The API may wrap any body in {"data": ...}; both shapes are accepted here
// so nothing above this layer looks at envelopes.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::entities::catalog::deserialize_id;
use crate::error::DomainError;

/// One page of a collection plus the link to the next page, if any.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Deserialize)]
struct CreatedResource {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
}

pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

pub fn decode_one<T: DeserializeOwned>(body: &str) -> Result<T, DomainError> {
    let value = parse_json(body)?;
    serde_json::from_value(unwrap_envelope(value)).map_err(|err| DomainError::Decode(err.to_string()))
}

pub fn decode_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>, DomainError> {
    let value = parse_json(body)?;
    let next = next_link(&value);
    let items = match unwrap_envelope(value) {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => {
            return Err(DomainError::Decode(format!(
                "expected a collection, got {}",
                kind_of(&other)
            )))
        }
    };
    let items = items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|err| DomainError::Decode(err.to_string()))?;
    Ok(Page { items, next })
}

/// Id of a freshly created resource.
pub fn decode_created_id(body: &str) -> Result<String, DomainError> {
    decode_one::<CreatedResource>(body).map(|created| created.id)
}

fn parse_json(body: &str) -> Result<Value, DomainError> {
    serde_json::from_str(body).map_err(|err| DomainError::Decode(format!("invalid json: {err}")))
}

fn next_link(value: &Value) -> Option<String> {
    value
        .get("links")
        .and_then(|links| links.get("next"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .map(ToString::to_string)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
