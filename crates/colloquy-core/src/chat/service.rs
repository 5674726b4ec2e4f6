//! Conversation service.

use colloquy_types::error::ChatError;
use colloquy_types::provider::ProviderReply;
use colloquy_types::turn::{Role, Turn};
use tracing::{debug, info};

use crate::chat::store::MessageStore;
use crate::chat::window::ContextWindowBuilder;
use crate::llm::degrade::DegradingProvider;
use crate::llm::provider::ResponseProvider;

/// Outcome of one accepted exchange: the full log after both turns were
/// persisted, plus the reply that was generated for it.
#[derive(Debug)]
pub struct Submission {
    pub history: Vec<Turn>,
    pub reply: ProviderReply,
}

/// Orchestrates one user exchange end to end: validate, persist the
/// user turn, assemble context, generate a reply, persist it.
///
/// Holds no locks of its own; the store serializes writes and the
/// provider call happens between store operations, never inside one.
pub struct ConversationService<S: MessageStore, R: ResponseProvider> {
    store: S,
    provider: DegradingProvider<R>,
    window_builder: ContextWindowBuilder,
}

impl<S: MessageStore, R: ResponseProvider> ConversationService<S, R> {
    pub fn new(store: S, provider: DegradingProvider<R>) -> Self {
        Self {
            store,
            provider,
            window_builder: ContextWindowBuilder::new(),
        }
    }

    /// Whether a remote provider is configured, as opposed to running
    /// fallback-only.
    pub fn remote_enabled(&self) -> bool {
        self.provider.has_remote()
    }

    /// Process one user message.
    ///
    /// Blank messages are rejected before anything is written. The
    /// provider context excludes the just-persisted user turn so the
    /// pending message reaches the provider exactly once.
    pub async fn submit(&self, text: &str) -> Result<Submission, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let user_turn = self.store.append(Role::User, text).await?;
        debug!(turn_id = user_turn.id, "user turn persisted");

        let history = self.store.read_all().await?;
        let prior: Vec<Turn> = history
            .into_iter()
            .filter(|turn| turn.id != user_turn.id)
            .collect();
        let window = self.window_builder.build(&prior, text);

        let reply = self.provider.respond(&window).await;
        info!(source = %reply.source, "reply generated");

        let assistant_turn = self.store.append(Role::Assistant, &reply.text).await?;
        debug!(turn_id = assistant_turn.id, "assistant turn persisted");

        let history = self.store.read_all().await?;
        Ok(Submission { history, reply })
    }

    /// The full conversation log in canonical order.
    pub async fn history(&self) -> Result<Vec<Turn>, ChatError> {
        Ok(self.store.read_all().await?)
    }

    /// Delete the entire conversation log.
    pub async fn clear(&self) -> Result<(), ChatError> {
        self.store.clear().await?;
        info!("conversation history cleared");
        Ok(())
    }
}
