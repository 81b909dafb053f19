//! User configuration entity

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a user, accepted either as a JSON integer or a string
///
/// The stored document keeps whichever form the client sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    /// Integers above `i64::MAX`
    Unsigned(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Unsigned(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Configuration document stored for every user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    pub id_user: UserId,
    pub active_status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserConfig {
    pub fn new(id_user: UserId, active_status: bool, avatar: Option<String>) -> Self {
        Self {
            id_user,
            active_status,
            avatar,
        }
    }

    /// Document body for a full write. An absent avatar leaves no field behind.
    pub fn to_document(&self) -> Value {
        let mut document = serde_json::json!({
            "id_user": self.id_user,
            "active_status": self.active_status,
        });
        if let (Some(avatar), Some(fields)) = (&self.avatar, document.as_object_mut()) {
            fields.insert("avatar".to_string(), Value::String(avatar.clone()));
        }
        document
    }
}

/// Whether a stored value counts as present for guard checks.
///
/// Follows JavaScript truthiness, which is what existing clients of the
/// database rely on: `0`, `""`, `false` and `null` are all absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
