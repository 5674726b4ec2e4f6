//! Remote response provider implementations.

pub mod gemini;
