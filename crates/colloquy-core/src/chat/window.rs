//! Context window assembly.

use colloquy_types::context::{ContextMessage, ContextWindow};
use colloquy_types::turn::{Role, Turn};

/// How many persisted turns are carried into the provider context.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Builds the bounded context slice a provider sees for one exchange.
///
/// Pure and deterministic: the same history and pending message always
/// produce the same window.
#[derive(Debug, Clone)]
pub struct ContextWindowBuilder {
    window_size: usize,
}

impl ContextWindowBuilder {
    pub fn new() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    pub fn with_window_size(window_size: usize) -> Self {
        Self { window_size }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Take the most recent `window_size` turns of `history` (oldest
    /// first) and append the pending user message as the final entry.
    ///
    /// `history` must not already contain the pending message; the
    /// caller is responsible for excluding it so the provider sees the
    /// message exactly once.
    pub fn build(&self, history: &[Turn], current_message: &str) -> ContextWindow {
        let start = history.len().saturating_sub(self.window_size);
        let mut messages: Vec<ContextMessage> = history[start..]
            .iter()
            .map(|turn| ContextMessage {
                role: turn.role.clone(),
                content: turn.content.clone(),
            })
            .collect();

        messages.push(ContextMessage {
            role: Role::User,
            content: current_message.to_string(),
        });

        ContextWindow { messages }
    }
}

impl Default for ContextWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_turn(id: i64, role: Role, content: &str) -> Turn {
        Turn {
            id,
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }

    fn alternating_history(len: i64) -> Vec<Turn> {
        (1..=len)
            .map(|id| {
                let role = if id % 2 == 1 { Role::User } else { Role::Assistant };
                make_turn(id, role, &format!("turn {id}"))
            })
            .collect()
    }

    #[test]
    fn test_short_history_is_kept_whole() {
        let history = alternating_history(3);
        let window = ContextWindowBuilder::new().build(&history, "pending");

        assert_eq!(window.len(), 4);
        assert_eq!(window.messages[0].content, "turn 1");
        assert_eq!(window.messages[2].content, "turn 3");
        assert_eq!(window.messages[3].content, "pending");
        assert_eq!(window.messages[3].role, Role::User);
    }

    #[test]
    fn test_empty_history_yields_pending_only() {
        let window = ContextWindowBuilder::new().build(&[], "first message");

        assert_eq!(window.len(), 1);
        assert_eq!(window.pending_text(), "first message");
    }

    #[test]
    fn test_window_caps_at_most_recent_turns() {
        let history = alternating_history(25);
        let window = ContextWindowBuilder::new().build(&history, "pending");

        assert_eq!(window.len(), DEFAULT_WINDOW_SIZE + 1);
        assert_eq!(window.messages[0].content, "turn 16");
        assert_eq!(window.messages[9].content, "turn 25");
        assert_eq!(window.messages[10].content, "pending");
    }

    #[test]
    fn test_pending_message_appears_exactly_once() {
        let history = alternating_history(12);
        let window = ContextWindowBuilder::new().build(&history, "needle");

        let hits = window
            .messages
            .iter()
            .filter(|message| message.content == "needle")
            .count();
        assert_eq!(hits, 1);
        assert_eq!(window.pending_text(), "needle");
    }

    #[test]
    fn test_build_is_deterministic() {
        let history = alternating_history(15);
        let builder = ContextWindowBuilder::new();

        let first = builder.build(&history, "pending");
        let second = builder.build(&history, "pending");
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_window_size() {
        let history = alternating_history(8);
        let window = ContextWindowBuilder::with_window_size(2).build(&history, "pending");

        assert_eq!(window.len(), 3);
        assert_eq!(window.messages[0].content, "turn 7");
        assert_eq!(window.messages[1].content, "turn 8");
        assert_eq!(window.messages[2].content, "pending");
    }

    #[test]
    fn test_zero_window_size_keeps_only_pending() {
        let history = alternating_history(5);
        let window = ContextWindowBuilder::with_window_size(0).build(&history, "pending");

        assert_eq!(window.len(), 1);
        assert_eq!(window.pending_text(), "pending");
    }
}
