//! Application state wiring all services together.
//!
//! The conversation service is generic over store and provider traits;
//! AppState pins it to the concrete infra implementations so CLI
//! commands and REST handlers share one wiring.

use std::path::PathBuf;
use std::sync::Arc;

use colloquy_core::chat::service::ConversationService;
use colloquy_core::llm::degrade::DegradingProvider;
use colloquy_infra::config::ServiceConfig;
use colloquy_infra::llm::gemini::GeminiProvider;
use colloquy_infra::sqlite::pool::{DatabasePool, database_url};
use colloquy_infra::sqlite::turn::SqliteMessageStore;

/// Concrete type alias for the service generics pinned to infra
/// implementations.
pub type ConcreteConversationService = ConversationService<SqliteMessageStore, GeminiProvider>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<ConcreteConversationService>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to the database, wire
    /// the provider stack from config.
    pub async fn init(config: ServiceConfig) -> anyhow::Result<Self> {
        let data_dir = config.data_dir.clone();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_pool = DatabasePool::new(&database_url(&data_dir)).await?;
        let store = SqliteMessageStore::new(db_pool);

        // A missing key is a supported mode, not an error: every reply
        // comes from the offline fallback.
        let remote = match config.api_key {
            Some(key) => Some(GeminiProvider::new(key, config.model)),
            None => {
                tracing::info!("no GEMINI_API_KEY configured, replies will use the offline fallback");
                None
            }
        };

        let conversation = ConversationService::new(store, DegradingProvider::new(remote));

        Ok(Self {
            conversation: Arc::new(conversation),
            data_dir,
        })
    }
}
