//! Conversation turn types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// A single persisted entry in the conversation log.
///
/// Ids are assigned by the store, unique for the lifetime of the log, and
/// strictly increasing in insertion order. Timestamps are UTC and serialize
/// as RFC 3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: i64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_display_roundtrip() {
        for role in [Role::User, Role::Assistant] {
            let parsed = Role::from_str(&role.to_string()).unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        let err = Role::from_str("system").unwrap_err();
        assert_eq!(err, "invalid role: 'system'");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn test_turn_json_shape() {
        let turn = Turn {
            id: 1,
            role: Role::User,
            content: "Hello".to_string(),
            timestamp: Utc::now(),
        };

        let value = serde_json::to_value(&turn).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "Hello");
        let raw = value["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
    }

    #[test]
    fn test_turn_deserializes_from_wire_json() {
        let json = r#"{
            "id": 7,
            "role": "assistant",
            "content": "Hi there",
            "timestamp": "2026-02-01T10:30:00Z"
        }"#;

        let turn: Turn = serde_json::from_str(json).unwrap();
        assert_eq!(turn.id, 7);
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.content, "Hi there");
    }
}
