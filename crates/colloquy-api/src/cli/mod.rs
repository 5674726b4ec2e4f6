//! CLI command definitions and dispatch for the `clqy` binary.
//!
//! Uses clap derive macros for argument parsing. The server and the
//! terminal commands share the same service wiring through `AppState`.

pub mod clear;
pub mod history;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Persisted chat with a remote model and a graceful offline fallback.
#[derive(Parser)]
#[command(name = "clqy", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, env = "PORT", default_value = "3001")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Print the stored conversation.
    History,

    /// Delete the entire conversation history.
    Clear {
        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
