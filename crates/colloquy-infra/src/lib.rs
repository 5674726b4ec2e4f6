//! Infrastructure implementations for colloquy.
//!
//! Concrete adapters behind the core traits: the SQLite message store,
//! the Gemini response provider, and environment-driven configuration.

pub mod config;
pub mod llm;
pub mod sqlite;
