//! Conversation orchestration: store trait, context windows, and the
//! submit pipeline.

pub mod service;
pub mod store;
pub mod window;
