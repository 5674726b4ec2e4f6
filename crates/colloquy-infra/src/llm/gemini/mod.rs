//! Google Gemini response provider.

pub mod client;
pub mod types;

pub use client::GeminiProvider;
