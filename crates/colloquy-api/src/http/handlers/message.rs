//! Message endpoints.
//!
//! Endpoints:
//! - GET    /api/messages - Full conversation log
//! - POST   /api/messages - Submit a message and get a reply
//! - DELETE /api/messages - Clear the conversation

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use colloquy_types::turn::Turn;

use crate::http::error::ApiError;
use crate::state::AppState;

/// Response body for GET /api/messages.
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub success: bool,
    pub messages: Vec<Turn>,
}

/// Request body for POST /api/messages.
///
/// A missing `message` field deserializes to an empty string and takes
/// the same validation path as a blank one.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: String,
}

/// Response body for POST /api/messages.
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub messages: Vec<Turn>,
    #[serde(rename = "latestResponse")]
    pub latest_response: String,
}

/// Response body for DELETE /api/messages.
#[derive(Debug, Serialize)]
pub struct ClearedResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/messages - Full conversation log in canonical order.
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let messages = state.conversation.history().await?;

    Ok(Json(MessagesResponse {
        success: true,
        messages,
    }))
}

/// POST /api/messages - Submit a user message, persist both turns, and
/// return the updated log plus the generated reply.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let submission = state.conversation.submit(&request.message).await?;

    Ok(Json(SendMessageResponse {
        success: true,
        messages: submission.history,
        latest_response: submission.reply.text,
    }))
}

/// DELETE /api/messages - Clear the conversation log.
pub async fn clear_messages(
    State(state): State<AppState>,
) -> Result<Json<ClearedResponse>, ApiError> {
    state.conversation.clear().await?;

    Ok(Json(ClearedResponse {
        success: true,
        message: "Chat history cleared".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use colloquy_types::turn::Role;

    #[test]
    fn test_send_request_defaults_missing_message() {
        let request: SendMessageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.message, "");

        let request: SendMessageRequest =
            serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert_eq!(request.message, "hello");
    }

    #[test]
    fn test_send_response_uses_camel_case_latest_response() {
        let response = SendMessageResponse {
            success: true,
            messages: vec![],
            latest_response: "hi".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["latestResponse"], "hi");
        assert!(value.get("latest_response").is_none());
    }

    #[test]
    fn test_messages_response_shape() {
        let response = MessagesResponse {
            success: true,
            messages: vec![Turn {
                id: 1,
                role: Role::User,
                content: "Hello".to_string(),
                timestamp: Utc::now(),
            }],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["messages"][0]["id"], 1);
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn test_cleared_response_shape() {
        let response = ClearedResponse {
            success: true,
            message: "Chat history cleared".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Chat history cleared");
    }
}
