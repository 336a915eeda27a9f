//! Lenient typed field lookups on decoded JSON data.
//!
//! A missing key or a value of the wrong type is `None` (or an empty
//! collection), never an error. On array data, a key in canonical decimal
//! form (`"0"`, `"12"`, not `"01"` or `"+1"`) addresses the element at that
//! index.

use serde_json::Value;

/// Characters stripped from both ends of string values.
const TRIMMED: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

fn lookup<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    match data {
        Value::Array(items) => key
            .parse::<usize>()
            .ok()
            .filter(|index| index.to_string() == key)
            .and_then(|index| items.get(index)),
        _ => data.get(key),
    }
}

pub fn get_string<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    lookup(data, key)?.as_str()
}

/// Integers only; floats such as `1.0` are rejected.
pub fn get_integer(data: &Value, key: &str) -> Option<i64> {
    lookup(data, key)?.as_i64()
}

pub fn get_non_empty_string(data: &Value, key: &str) -> Option<String> {
    get_string(data, key).and_then(non_empty)
}

/// String elements of the array at `key`, trimmed, with empty ones dropped.
/// Non-string elements are skipped.
pub fn get_non_empty_string_collection(data: &Value, key: &str) -> Vec<String> {
    lookup(data, key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .filter_map(non_empty)
                .collect()
        })
        .unwrap_or_default()
}

pub fn get_positive_integer(data: &Value, key: &str) -> Option<i64> {
    get_integer(data, key).filter(|value| *value > 0)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim_matches(TRIMMED);
    (!value.is_empty()).then(|| value.to_string())
}
