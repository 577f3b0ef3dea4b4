//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, USAGE};
pub use output::{format_contributor_list, format_entry, format_entry_list, format_topic_list};
