//! Response provider trait.

use colloquy_types::context::ContextWindow;
use colloquy_types::provider::{ProviderError, ProviderReply};

/// A source of assistant replies.
///
/// Implementations live in colloquy-infra (e.g., `GeminiProvider`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ResponseProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Generate a reply to the pending message in `window`.
    fn respond(
        &self,
        window: &ContextWindow,
    ) -> impl std::future::Future<Output = Result<ProviderReply, ProviderError>> + Send;
}
