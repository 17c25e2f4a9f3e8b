//! Shared row-conversion helpers for the tweet queries

use rusqlite::types::ValueRef;

/// Read a loosely-typed column as text.
///
/// SQLite does not enforce column affinity, so archive rows can carry
/// BLOBs or numbers where text is expected. BLOBs are decoded as UTF-8
/// (lossily); numbers are rendered in decimal; NULL becomes `None`.
pub fn text_from_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
    }
}

/// Read a payload column: only TEXT or BLOB values can hold a JSON document
pub fn payload_from_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
        ValueRef::Null | ValueRef::Integer(_) | ValueRef::Real(_) => None,
    }
}

/// Convert a nullable SQL aggregate into a count.
///
/// `SUM` over an empty table yields NULL; counts are never negative.
pub fn count_from_aggregate(value: Option<i64>) -> u64 {
    value.unwrap_or(0).max(0) as u64
}
