//! CLI command definitions

use clap::{Parser, Subcommand};

/// Usage line printed for a missing or unknown command
pub const USAGE: &str = "Usage: dragon-mind <add|query|recent|topics|contributors> [args]";

#[derive(Parser, Debug)]
#[command(name = "dragon-mind")]
#[command(about = "Local knowledge base", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a knowledge entry
    Add {
        /// Topic of the entry (may be omitted)
        topic: Option<String>,

        /// Free-text content (may be omitted)
        content: Option<String>,

        /// Where the knowledge came from (default: cli)
        source: Option<String>,

        /// Who added it (default: unknown)
        contributor: Option<String>,
    },

    /// Search topics and content, ignoring case
    Query {
        /// Substring to look for (an empty string matches everything)
        term: String,
    },

    /// Show the most recently added entries
    Recent {
        /// Number of entries (non-numeric values fall back to 10)
        limit: Option<String>,
    },

    /// List distinct topics
    Topics,

    /// List everyone who has contributed
    Contributors,

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}
