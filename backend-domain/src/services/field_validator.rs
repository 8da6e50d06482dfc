use serde_json::Value;

use crate::entities::Record;

pub const PER_ORDER_FIELDS: [&str; 2] = ["min_per_order", "max_per_order"];
pub const PER_ORDER_MIN: u64 = 1;
pub const PER_ORDER_MAX: u64 = 500;

/// Sanitizes `min_per_order` / `max_per_order` so the target API accepts them.
/// Never fails: unusable values fall back to 1, out-of-range values are clamped,
/// and a minimum above the maximum is lowered to it. Absent fields stay absent.
pub fn clamp_order_limits(mut record: Record) -> Record {
    for field in PER_ORDER_FIELDS {
        if let Some(value) = record.get_mut(field) {
            *value = Value::from(coerce_per_order(value));
        }
    }

    let min = record.get("min_per_order").and_then(Value::as_u64);
    let max = record.get("max_per_order").and_then(Value::as_u64);
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            record.insert("min_per_order".to_string(), Value::from(max));
        }
    }
    record
}

/// Keeps only the digits of the value's text ("7 tickets" -> 7, "7.5" -> 75)
/// and clamps into [1, 500].
pub fn coerce_per_order(value: &Value) -> u64 {
    let text = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return PER_ORDER_MIN;
    }
    // Only digits remain, so a parse failure means the number overflowed.
    let parsed = digits.parse::<u64>().unwrap_or(PER_ORDER_MAX);
    parsed.clamp(PER_ORDER_MIN, PER_ORDER_MAX)
}
