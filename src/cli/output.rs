//! Output formatting utilities

use crate::domain::entry::{format_timestamp, Entry};

/// Format a single entry as an indented block
pub fn format_entry(entry: &Entry) -> String {
    let mut output = format!(
        "[{}] {}  {}\n",
        entry.id,
        format_timestamp(&entry.timestamp),
        entry.topic
    );
    for line in entry.content.lines() {
        output.push_str(&format!("    {}\n", line));
    }
    output.push_str(&format!(
        "    source: {}, contributor: {}\n",
        entry.source, entry.contributor
    ));
    output
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a list of topics for display
pub fn format_topic_list(topics: &[String]) -> String {
    format_name_list(topics, "No topics found")
}

/// Format a list of contributors for display
pub fn format_contributor_list(contributors: &[String]) -> String {
    format_name_list(contributors, "No contributors found")
}

fn format_name_list(names: &[String], empty: &str) -> String {
    if names.is_empty() {
        return empty.to_string();
    }

    let mut output = String::new();
    for name in names {
        output.push_str(name);
        output.push('\n');
    }
    output
}
