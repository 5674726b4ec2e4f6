//! Response provider abstractions: the provider trait, offline
//! fallback templates, and the degrading wrapper that ties them
//! together.

pub mod degrade;
pub mod fallback;
pub mod provider;

pub use degrade::DegradingProvider;
pub use fallback::FallbackProvider;
pub use provider::ResponseProvider;
