use serde_json::{Map, Value};

/// Untyped key-value payload carrying profile data, keyed by serialization key
pub type UserInfoPayload = Map<String, Value>;

/// Read an optional string from a payload.
///
/// Absent keys and JSON `null` yield `None`. Strings are returned as-is and
/// any other JSON value is returned as its JSON text.
pub fn payload_value(payload: &UserInfoPayload, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
