//! Offline fallback replies.

use rand::Rng;

use colloquy_types::context::ContextWindow;
use colloquy_types::provider::{ProviderError, ProviderReply, ReplySource};

use crate::llm::provider::ResponseProvider;

/// Acknowledgement templates; `{message}` is replaced with the pending
/// user message. Every template carries fixed text around the
/// placeholder, so a rendered reply is never empty.
const ACKNOWLEDGEMENTS: [&str; 3] = [
    "I received your message: \"{message}\". This is an offline reply; no model API is configured.",
    "That's interesting! You said: \"{message}\". Configure an API key to get real model replies.",
    "Thanks for your message about \"{message}\". I'm running in offline mode right now.",
];

/// Always-available reply source used when no remote provider is
/// configured or the remote call fails.
///
/// Picks uniformly at random from a fixed set of acknowledgement
/// templates and never fails.
#[derive(Debug, Clone, Default)]
pub struct FallbackProvider;

impl FallbackProvider {
    pub fn new() -> Self {
        Self
    }

    /// Render a templated acknowledgement of the pending message.
    pub fn acknowledge(&self, window: &ContextWindow) -> ProviderReply {
        let template = {
            let mut rng = rand::rng();
            ACKNOWLEDGEMENTS[rng.random_range(0..ACKNOWLEDGEMENTS.len())]
        };

        ProviderReply {
            text: template.replace("{message}", window.pending_text()),
            source: ReplySource::Fallback,
        }
    }
}

impl ResponseProvider for FallbackProvider {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn respond(&self, window: &ContextWindow) -> Result<ProviderReply, ProviderError> {
        Ok(self.acknowledge(window))
    }
}
