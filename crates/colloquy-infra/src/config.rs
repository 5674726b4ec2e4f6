//! Environment-driven service configuration.

use secrecy::SecretString;
use std::path::PathBuf;

/// Model used when `AI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Runtime configuration assembled from environment variables.
///
/// A missing or blank `GEMINI_API_KEY` is not an error; the service
/// starts with no remote provider and answers from the offline
/// fallback.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_key: Option<SecretString>,
    pub model: String,
    pub data_dir: PathBuf,
    pub allowed_origin: Option<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_blank("GEMINI_API_KEY").map(SecretString::from),
            model: non_blank("AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            data_dir: resolve_data_dir(),
            allowed_origin: non_blank("COLLOQUY_ALLOWED_ORIGIN"),
        }
    }
}

/// Read an environment variable, treating blank values as unset.
fn non_blank(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Resolve the data directory: `COLLOQUY_DATA_DIR` if set, otherwise
/// `~/.colloquy`, falling back to a relative `.colloquy` when no home
/// directory is known.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("COLLOQUY_DATA_DIR") {
        return PathBuf::from(dir);
    }

    dirs::home_dir()
        .map(|home| home.join(".colloquy"))
        .unwrap_or_else(|| PathBuf::from(".colloquy"))
}
