//! Provider context window types.

use serde::{Deserialize, Serialize};

use crate::turn::Role;

/// One entry in the context handed to a response provider.
///
/// Carries only what a provider needs to render a prompt; ids and
/// timestamps stay behind in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMessage {
    pub role: Role,
    pub content: String,
}

/// The bounded conversation slice a provider sees for one exchange.
///
/// Messages are ordered oldest first and the last entry is always the
/// pending user message awaiting a reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextWindow {
    pub messages: Vec<ContextMessage>,
}

impl ContextWindow {
    /// Content of the pending user message, or `""` for an empty window.
    pub fn pending_text(&self) -> &str {
        self.messages
            .last()
            .map(|message| message.content.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
