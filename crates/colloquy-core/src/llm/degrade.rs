//! Degrading provider wrapper.

use colloquy_types::context::ContextWindow;
use colloquy_types::provider::ProviderReply;
use tracing::{debug, warn};

use crate::llm::fallback::FallbackProvider;
use crate::llm::provider::ResponseProvider;

/// Wraps an optional remote provider with the offline fallback.
///
/// Any remote failure degrades to a fallback acknowledgement instead of
/// propagating, so producing a reply never fails. With no remote
/// configured every reply comes from the fallback.
pub struct DegradingProvider<R: ResponseProvider> {
    remote: Option<R>,
    fallback: FallbackProvider,
}

impl<R: ResponseProvider> DegradingProvider<R> {
    pub fn new(remote: Option<R>) -> Self {
        Self {
            remote,
            fallback: FallbackProvider::new(),
        }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Produce a reply for `window`, degrading to the fallback on any
    /// remote error.
    pub async fn respond(&self, window: &ContextWindow) -> ProviderReply {
        match &self.remote {
            Some(remote) => match remote.respond(window).await {
                Ok(reply) => reply,
                Err(err) => {
                    warn!(
                        provider = remote.name(),
                        error = %err,
                        "remote provider failed, using fallback reply"
                    );
                    self.fallback.acknowledge(window)
                }
            },
            None => {
                debug!("no remote provider configured, using fallback reply");
                self.fallback.acknowledge(window)
            }
        }
    }
}
