//! Conversation history CLI command.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use colloquy_types::turn::Role;

use crate::state::AppState;

/// Print the stored conversation as a table, or JSON with `--json`.
///
/// # Examples
///
/// ```bash
/// clqy history
/// clqy history --json
/// ```
pub async fn show_history(state: &AppState, json: bool) -> Result<()> {
    let turns = state.conversation.history().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&turns)?);
        return Ok(());
    }

    if turns.is_empty() {
        println!();
        println!(
            "  {} No messages yet. Start the server with: {}",
            style("i").blue().bold(),
            style("clqy serve").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Role").fg(Color::White),
        Cell::new("Time").fg(Color::White),
        Cell::new("Content").fg(Color::White),
    ]);

    for turn in &turns {
        let role_cell = match turn.role {
            Role::User => Cell::new("user").fg(Color::Cyan),
            Role::Assistant => Cell::new("assistant").fg(Color::Green),
        };

        table.add_row(vec![
            Cell::new(turn.id.to_string()).fg(Color::DarkGrey),
            role_cell,
            Cell::new(turn.timestamp.format("%Y-%m-%d %H:%M").to_string()).fg(Color::DarkGrey),
            Cell::new(truncate(&turn.content, 60)).fg(Color::White),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} message{}",
        style(turns.len()).bold(),
        if turns.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

// --- Formatting helpers ---

/// Shorten long content for table display, respecting char boundaries.
fn truncate(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let kept: String = content.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
