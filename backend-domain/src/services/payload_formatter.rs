use chrono::NaiveTime;
use serde_json::Value;

use crate::entities::{FormBody, Record, FLAT_SCHEDULE_FIELDS};
use crate::error::DomainError;

/// Server-assigned or account-specific fields that are never written.
pub const STRIPPED_FIELDS: [&str; 2] = ["id", "voucher_ids"];

/// Fields the API treats as arrays even when a read returns them as a comma list.
pub const ARRAY_FIELDS: [&str; 2] = ["voucher_ids", "ticket_type_ids"];

/// Nested {date, time, timezone} objects that writes expect flattened.
pub const SCHEDULE_FIELDS: [&str; 2] = ["start", "end"];

/// Turns a record read from the API into the form body a create call expects.
pub fn format_payload(entity: &'static str, record: &Record) -> Result<FormBody, DomainError> {
    let mut body = FormBody::new();
    for (key, value) in record {
        if STRIPPED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        if SCHEDULE_FIELDS.contains(&key.as_str()) {
            flatten_schedule(entity, key, value, &mut body)?;
            continue;
        }
        if FLAT_SCHEDULE_FIELDS.contains(&key.as_str()) {
            continue;
        }
        let is_array_field = ARRAY_FIELDS.contains(&key.as_str());
        match value {
            Value::Array(items) => {
                let repeated = repeated_key(key);
                for item in items {
                    if let Some(text) = wire_text(item) {
                        body.push(repeated.as_str(), text);
                    }
                }
            }
            Value::String(text) if is_array_field => {
                let repeated = repeated_key(key);
                for part in text.split(',') {
                    body.push(repeated.as_str(), part);
                }
            }
            Value::Null if is_array_field => body.push(repeated_key(key), ""),
            other => {
                if let Some(text) = wire_text(other) {
                    body.push(key.as_str(), text);
                }
            }
        }
    }
    apply_flat_schedule(entity, record, &mut body)?;
    Ok(body)
}

/// Already-flat schedule fields win over values derived from `start`/`end`.
fn apply_flat_schedule(
    entity: &'static str,
    record: &Record,
    body: &mut FormBody,
) -> Result<(), DomainError> {
    for key in FLAT_SCHEDULE_FIELDS {
        let Some(text) = record.get(key).and_then(wire_text) else {
            continue;
        };
        let text = if key.ends_with("_time") {
            normalize_time(&text).ok_or_else(|| {
                DomainError::malformed(entity, format!("'{key}' is not a clock time: '{text}'"))
            })?
        } else {
            text
        };
        body.set(key, text);
    }
    Ok(())
}

/// `HH:MM` or `HH:MM:SS` to `HH:MM:SS`.
pub fn normalize_time(raw: &str) -> Option<String> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
        .map(|time| time.format("%H:%M:%S").to_string())
}

fn flatten_schedule(
    entity: &'static str,
    key: &str,
    value: &Value,
    body: &mut FormBody,
) -> Result<(), DomainError> {
    let moment = match value {
        Value::Null => return Ok(()),
        Value::Object(moment) => moment,
        _ => {
            return Err(DomainError::malformed(
                entity,
                format!("'{key}' must be an object with date and time"),
            ))
        }
    };

    let date = required_text(entity, key, moment.get("date"), "date")?;
    let raw_time = required_text(entity, key, moment.get("time"), "time")?;
    let time = normalize_time(raw_time).ok_or_else(|| {
        DomainError::malformed(entity, format!("'{key}.time' is not a clock time: '{raw_time}'"))
    })?;

    body.push(format!("{key}_date"), date);
    body.push(format!("{key}_time"), time);
    if let Some(timezone) = moment.get("timezone").and_then(wire_text) {
        body.push(format!("{key}_timezone"), timezone);
    }
    Ok(())
}

fn required_text<'a>(
    entity: &'static str,
    key: &str,
    value: Option<&'a Value>,
    subkey: &str,
) -> Result<&'a str, DomainError> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| DomainError::malformed(entity, format!("'{key}.{subkey}' is missing")))
}

fn repeated_key(key: &str) -> String {
    format!("{key}[]")
}

fn wire_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
