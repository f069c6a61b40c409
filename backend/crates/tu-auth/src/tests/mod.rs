
use serde_json::{Map, Value, json};

/// A complete, valid claim set
pub(crate) fn valid_claim_set() -> Map<String, Value> {
    match json!({
        "sub": "1234",
        "is_guest": false,
        "signature": "5f4dcc3b5aa765d61d8327deb882cf99",
        "preferred_username": "jdoe.5f4d",
        "email": "jane@example.org",
        "iss": "https://login.example.org/oauth",
        "exp": 1893456000
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}
