//! Conversation clear CLI command.

use anyhow::Result;
use console::style;
use dialoguer::Confirm;

use crate::state::AppState;

/// Delete the entire conversation, prompting unless forced.
///
/// # Examples
///
/// ```bash
/// clqy clear
/// clqy clear --force
/// ```
pub async fn clear_history(state: &AppState, force: bool, json: bool) -> Result<()> {
    let count = state.conversation.history().await?.len();

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete all chat history ({} message{})?",
                count,
                if count == 1 { "" } else { "s" }
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.conversation.clear().await?;

    if json {
        println!(
            "{}",
            serde_json::json!({"cleared": true, "removed": count})
        );
    } else {
        println!(
            "  {} Chat history cleared ({} message{} removed).",
            style("x").red().bold(),
            count,
            if count == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
