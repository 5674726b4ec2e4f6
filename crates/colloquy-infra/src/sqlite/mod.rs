//! SQLite persistence: connection pooling and the message store.

pub mod pool;
pub mod turn;

pub use pool::DatabasePool;
pub use turn::SqliteMessageStore;
