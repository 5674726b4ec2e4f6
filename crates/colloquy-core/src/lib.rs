//! Core conversation logic for colloquy.
//!
//! Pure domain layer: the message store trait, context window assembly,
//! the response provider trait with its degrading fallback wrapper, and
//! the conversation service that orchestrates one exchange. Storage and
//! network implementations live in colloquy-infra.

pub mod chat;
pub mod llm;
