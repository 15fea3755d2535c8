//! Case-insensitive JSON decoding for provider envelopes.
//!
//! The list endpoints are decoded without regard to key case: every object
//! key is folded to lowercase before the typed deserialize, so `Results`,
//! `RESULTS` and `results` all land in the same field. Target structs must
//! therefore use lowercase field names (the provider's own names already are).

use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn from_value_ignore_case<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(fold_keys(value))
}

/// Lowercase all object keys, recursively. On collision the later key wins.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), fold_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}
