//! Message store trait.

use colloquy_types::error::StoreError;
use colloquy_types::turn::{Role, Turn};

/// Persistence operations for the conversation log.
///
/// Implementations live in colloquy-infra (e.g., `SqliteMessageStore`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait MessageStore: Send + Sync {
    /// Append one turn and return it with its store-assigned id and
    /// timestamp. Rejects content that is empty or whitespace-only.
    fn append(
        &self,
        role: Role,
        content: &str,
    ) -> impl std::future::Future<Output = Result<Turn, StoreError>> + Send;

    /// Read every turn in canonical order: timestamp ascending, ties
    /// broken by id ascending.
    fn read_all(&self) -> impl std::future::Future<Output = Result<Vec<Turn>, StoreError>> + Send;

    /// Delete every turn. Previously issued ids are never reused.
    fn clear(&self) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
