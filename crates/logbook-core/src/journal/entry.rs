//! Generated journal entry.

use serde::{Deserialize, Serialize};

/// Structured journal entry derived from raw session text.
///
/// Constructed only by the entry assembler and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedJournalEntry {
    content: String,
    summary: String,
    work_completed: Vec<String>,
    open_items: Vec<String>,
    key_decisions: Vec<String>,
    topics: Vec<String>,
}

impl GeneratedJournalEntry {
    pub(crate) fn new(
        content: String,
        summary: String,
        work_completed: Vec<String>,
        open_items: Vec<String>,
        key_decisions: Vec<String>,
        topics: Vec<String>,
    ) -> Self {
        Self {
            content,
            summary,
            work_completed,
            open_items,
            key_decisions,
            topics,
        }
    }

    /// Raw session text, verbatim.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn work_completed(&self) -> &[String] {
        &self.work_completed
    }

    pub fn open_items(&self) -> &[String] {
        &self.open_items
    }

    pub fn key_decisions(&self) -> &[String] {
        &self.key_decisions
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}
