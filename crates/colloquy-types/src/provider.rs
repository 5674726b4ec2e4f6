//! Response provider reply and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which path produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// A remote model API answered.
    Remote,
    /// The offline acknowledgement templates answered.
    Fallback,
}

impl std::fmt::Display for ReplySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplySource::Remote => write!(f, "remote"),
            ReplySource::Fallback => write!(f, "fallback"),
        }
    }
}

/// A generated assistant reply, tagged with where it came from.
#[derive(Debug, Clone)]
pub struct ProviderReply {
    pub text: String,
    pub source: ReplySource,
}

/// Errors a remote response provider can surface.
///
/// Every variant is recoverable: callers degrade to the offline
/// fallback rather than propagating these to the user.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no API key configured")]
    MissingCredentials,

    #[error("provider returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed reply: {0}")]
    MalformedReply(String),
}
