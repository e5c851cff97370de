//! Extraction pipeline running every table and the topic dictionary.

use tracing::debug;

use crate::patterns::{PatternTable, DECISIONS, OPEN_ITEMS, WORK_COMPLETED};
use crate::topics::extract_topics;
use crate::types::Extraction;

/// Extract completed work items from content (at most 10).
pub fn extract_work_completed(content: &str) -> Vec<String> {
    WORK_COMPLETED.scan(content)
}

/// Extract open or remaining items from content (at most 10).
pub fn extract_open_items(content: &str) -> Vec<String> {
    OPEN_ITEMS.scan(content)
}

/// Extract key decisions from content (at most 5).
pub fn extract_key_decisions(content: &str) -> Vec<String> {
    DECISIONS.scan(content)
}

/// Pipeline for extracting all structured facts from session text.
///
/// Uses the built-in tables unless others are supplied.
pub struct ExtractionPipeline {
    work_completed: &'static PatternTable,
    open_items: &'static PatternTable,
    key_decisions: &'static PatternTable,
}

impl ExtractionPipeline {
    /// Create a pipeline over the built-in tables.
    pub fn new() -> Self {
        Self {
            work_completed: &WORK_COMPLETED,
            open_items: &OPEN_ITEMS,
            key_decisions: &DECISIONS,
        }
    }

    /// Create a pipeline over caller-supplied tables.
    pub fn with_tables(
        work_completed: &'static PatternTable,
        open_items: &'static PatternTable,
        key_decisions: &'static PatternTable,
    ) -> Self {
        Self {
            work_completed,
            open_items,
            key_decisions,
        }
    }

    /// Run every table and the topic extractor over the content.
    pub fn extract(&self, content: &str) -> Extraction {
        let extraction = Extraction {
            work_completed: self.work_completed.scan(content),
            open_items: self.open_items.scan(content),
            key_decisions: self.key_decisions.scan(content),
            topics: extract_topics(content),
        };

        debug!(
            work_completed = extraction.work_completed.len(),
            open_items = extraction.open_items.len(),
            key_decisions = extraction.key_decisions.len(),
            topics = extraction.topics.len(),
            "Extracted session content"
        );

        extraction
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
