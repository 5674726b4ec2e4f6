//! Error types for the store and chat layers.

use thiserror::Error;

/// Errors from the message store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("message content must not be empty")]
    EmptyContent,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the conversation service.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is required")]
    EmptyMessage,

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::EmptyContent;
        assert_eq!(err.to_string(), "message content must not be empty");

        let err = StoreError::Query("database is locked".to_string());
        assert_eq!(err.to_string(), "query error: database is locked");
    }

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::EmptyMessage;
        assert_eq!(err.to_string(), "message is required");
    }

    #[test]
    fn test_chat_error_from_store_error() {
        let err: ChatError = StoreError::EmptyContent.into();
        assert!(matches!(err, ChatError::Store(StoreError::EmptyContent)));
        assert_eq!(
            err.to_string(),
            "storage error: message content must not be empty"
        );
    }
}
