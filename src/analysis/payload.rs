//! Engagement counter extraction from tweet JSON payloads
//!
//! Decoding is decode-or-default: a payload that cannot be read as a JSON
//! object is an error the caller counts, while a readable object with
//! missing or oddly-typed fields silently yields zeros for those fields.

use crate::errors::PayloadError;
use crate::types::{Metric, MetricValues};
use serde_json::{Map, Number, Value};

/// Decode a payload and extract every engagement metric.
///
/// # Errors
/// * [`PayloadError::Missing`] - the column was NULL or not text
/// * [`PayloadError::Malformed`] - invalid JSON syntax
/// * [`PayloadError::NotAnObject`] - valid JSON that is not an object
pub fn extract_metrics(payload: Option<&str>) -> Result<MetricValues, PayloadError> {
    let payload = payload.ok_or(PayloadError::Missing)?;
    let document: Value = serde_json::from_str(payload)?;

    match &document {
        Value::Object(fields) => Ok(metrics_from_object(fields)),
        other => Err(PayloadError::NotAnObject(json_type_name(other))),
    }
}

/// Pull each metric out of a decoded object
pub fn metrics_from_object(fields: &Map<String, Value>) -> MetricValues {
    let mut values = MetricValues::default();
    for metric in Metric::ALL {
        values.set(metric, metric_value(fields.get(metric.field_name())));
    }
    values
}

/// Integer value of one field: numbers are truncated, everything else is 0
pub fn metric_value(field: Option<&Value>) -> u64 {
    match field {
        Some(Value::Number(number)) => number_to_count(number),
        _ => 0,
    }
}

/// Truncate toward zero; negatives and NaN become 0, huge floats saturate.
fn number_to_count(number: &Number) -> u64 {
    if let Some(unsigned) = number.as_u64() {
        unsigned
    } else if number.is_i64() {
        // as_u64 failed, so the integer is negative
        0
    } else {
        number.as_f64().map(|f| f as u64).unwrap_or(0)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
