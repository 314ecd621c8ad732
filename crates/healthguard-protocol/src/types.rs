use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User data returned alongside a token
///
/// The server owns the shape of this object; only the fields the client
/// displays are named, everything else is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Successful signup or login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserData>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of the protected resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtectedData {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Extract the `message` field from an error body.
///
/// Any JSON value is accepted. Non-objects, a missing field, a non-string
/// field and an empty string all yield `None`.
pub fn error_message(body: &Value) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
}
