use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CopySeriesRequest {
    #[serde(default)]
    pub source_api_key: Option<String>,
    #[serde(default)]
    pub target_api_key: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub series_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceKeyQuery {
    #[serde(default)]
    pub source_api_key: Option<String>,
}

/// Series ids arrive as strings or, from older clients, as numbers.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "series_id must be a string or a number, got {}",
            other
        ))),
    }
}
