// Catalog entities as read from the remote API
// Series -> events -> ticket types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// An untyped field mapping, as read from or about to be written to the API.
pub type Record = Map<String, Value>;

/// Event fields the create endpoint accepts besides the flattened schedule.
pub const EVENT_SCHEDULING_FLAGS: [&str; 4] =
    ["hidden", "unavailable", "unavailable_status", "override_id"];

/// Schedule fields some payloads carry already flattened instead of nested.
pub const FLAT_SCHEDULE_FIELDS: [&str; 4] = ["start_date", "start_time", "end_date", "end_time"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSeries {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Record,
}

impl EventSeries {
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn to_record(&self) -> Record {
        with_id(&self.id, &self.fields)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub event_series_id: Option<Value>,
    #[serde(default)]
    pub start: Option<Value>,
    #[serde(default)]
    pub end: Option<Value>,
    #[serde(default)]
    pub start_date: Option<Value>,
    #[serde(default)]
    pub start_time: Option<Value>,
    #[serde(default)]
    pub end_date: Option<Value>,
    #[serde(default)]
    pub end_time: Option<Value>,
    #[serde(default)]
    pub hidden: Option<Value>,
    #[serde(default)]
    pub unavailable: Option<Value>,
    #[serde(default)]
    pub unavailable_status: Option<Value>,
    #[serde(default)]
    pub override_id: Option<Value>,
    #[serde(default)]
    pub ticket_types: Option<Vec<TicketType>>,
}

impl Event {
    /// The parent series id as text, when the record names one.
    pub fn series_id(&self) -> Option<String> {
        match self.event_series_id.as_ref()? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    /// The writable part of the event. Read-only fields, the source parent and
    /// embedded ticket types are left out.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("id".to_string(), Value::String(self.id.clone()));
        if let Some(start) = &self.start {
            record.insert("start".to_string(), start.clone());
        }
        if let Some(end) = &self.end {
            record.insert("end".to_string(), end.clone());
        }
        let flat = [
            &self.start_date,
            &self.start_time,
            &self.end_date,
            &self.end_time,
        ];
        let flags = [
            &self.hidden,
            &self.unavailable,
            &self.unavailable_status,
            &self.override_id,
        ];
        let named = FLAT_SCHEDULE_FIELDS
            .iter()
            .zip(flat)
            .chain(EVENT_SCHEDULING_FLAGS.iter().zip(flags));
        for (name, value) in named {
            if let Some(value) = value {
                record.insert((*name).to_string(), value.clone());
            }
        }
        record
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketType {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Record,
}

impl TicketType {
    pub fn to_record(&self) -> Record {
        with_id(&self.id, &self.fields)
    }
}

fn with_id(id: &str, fields: &Record) -> Record {
    let mut record = fields.clone();
    record.insert("id".to_string(), Value::String(id.to_string()));
    record
}

/// Ids are strings on current API versions; older payloads carry numbers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) if !text.trim().is_empty() => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or numeric id, got {}",
            other
        ))),
    }
}
