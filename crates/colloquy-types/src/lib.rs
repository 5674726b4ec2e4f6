//! Shared type definitions for colloquy.
//!
//! This crate holds the domain vocabulary used across every layer:
//! persisted conversation turns, provider context windows and replies,
//! and the error types the store and chat services surface. It has no
//! I/O of its own.

pub mod context;
pub mod error;
pub mod provider;
pub mod turn;
