mod loader;

use crate::UserInfoPayload;

use serde_json::Value;

/// Build a payload from string pairs
pub(crate) fn payload(entries: &[(&str, &str)]) -> UserInfoPayload {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}
