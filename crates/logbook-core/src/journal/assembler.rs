//! Entry assembly from extraction outputs.

use logbook_extractors::ExtractionPipeline;
use tracing::debug;

use crate::journal::entry::GeneratedJournalEntry;

/// Characters of raw content used when nothing was extracted.
pub const FALLBACK_SUMMARY_CHARS: usize = 200;

/// Appended to the fallback summary.
pub const ELLIPSIS: &str = "...";

/// Combines extraction outputs into a [`GeneratedJournalEntry`].
#[derive(Default)]
pub struct EntryAssembler {
    pipeline: ExtractionPipeline,
}

impl EntryAssembler {
    /// Create an assembler over the built-in extraction tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler over a custom extraction pipeline.
    pub fn with_pipeline(pipeline: ExtractionPipeline) -> Self {
        Self { pipeline }
    }

    /// Assemble an entry from raw session content.
    ///
    /// A non-empty `summary` is used verbatim; otherwise one is derived.
    pub fn assemble(&self, content: &str, summary: Option<&str>) -> GeneratedJournalEntry {
        let extraction = self.pipeline.extract(content);

        let summary = match summary.filter(|s| !s.is_empty()) {
            Some(s) => s.to_string(),
            None => derive_summary(content, &extraction.work_completed, &extraction.open_items),
        };

        debug!(
            content_len = content.len(),
            work_completed = extraction.work_completed.len(),
            open_items = extraction.open_items.len(),
            key_decisions = extraction.key_decisions.len(),
            topics = extraction.topics.len(),
            "Assembled journal entry"
        );

        GeneratedJournalEntry::new(
            content.to_string(),
            summary,
            extraction.work_completed,
            extraction.open_items,
            extraction.key_decisions,
            extraction.topics,
        )
    }
}

/// Assemble an entry with the built-in extraction tables.
pub fn assemble(content: &str, summary: Option<&str>) -> GeneratedJournalEntry {
    EntryAssembler::new().assemble(content, summary)
}

/// Derive a summary from the first two work and open items.
///
/// Falls back to the first 200 characters of content (trimmed) plus an
/// ellipsis when neither list has items.
pub fn derive_summary(content: &str, work_completed: &[String], open_items: &[String]) -> String {
    let mut sentences = Vec::new();

    if !work_completed.is_empty() {
        sentences.push(format!(
            "Session focused on {}.",
            first_two(work_completed).join(" and ")
        ));
    }

    if !open_items.is_empty() {
        sentences.push(format!(
            "Remaining work includes {}.",
            first_two(open_items).join(" and ")
        ));
    }

    if sentences.is_empty() {
        let head: String = content.chars().take(FALLBACK_SUMMARY_CHARS).collect();
        return format!("{}{}", head.trim(), ELLIPSIS);
    }

    sentences.join(" ")
}

fn first_two(items: &[String]) -> &[String] {
    &items[..items.len().min(2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_empty_content() {
        let entry = assemble("", None);
        assert_eq!(entry.summary(), "...");
        assert!(entry.work_completed().is_empty());
        assert!(entry.open_items().is_empty());
        assert!(entry.key_decisions().is_empty());
        assert!(entry.topics().is_empty());
        assert_eq!(entry.content(), "");
    }

    #[test]
    fn test_summary_from_work_and_open_items() {
        let content = "Implemented the cache layer. Fixed the race condition. \
                       Added retry logic. Still need to write docs.";
        let entry = assemble(content, None);
        assert_eq!(
            entry.summary(),
            "Session focused on the cache layer and the race condition. \
             Remaining work includes write docs."
        );
    }

    #[test]
    fn test_summary_from_work_only() {
        let entry = assemble("Refactored the session tracker.", None);
        assert_eq!(entry.summary(), "Session focused on the session tracker.");
    }

    #[test]
    fn test_supplied_summary_is_verbatim() {
        let entry = assemble("Implemented the cache layer.", Some("  Custom summary  "));
        assert_eq!(entry.summary(), "  Custom summary  ");
        assert_eq!(entry.work_completed(), ["the cache layer"]);
    }

    #[test]
    fn test_empty_supplied_summary_is_derived() {
        let entry = assemble("Implemented the cache layer.", Some(""));
        assert_eq!(entry.summary(), "Session focused on the cache layer.");
    }

    #[test]
    fn test_fallback_summary_truncates_to_200_chars() {
        let content = format!("   {}", "x".repeat(500));
        let entry = assemble(&content, None);
        // 3 leading spaces are inside the first 200 characters, then trimmed.
        assert_eq!(entry.summary(), format!("{}...", "x".repeat(197)));
    }

    #[test]
    fn test_fallback_summary_respects_char_boundaries() {
        let content = "é".repeat(300);
        let summary = derive_summary(&content, &[], &[]);
        assert_eq!(summary.chars().count(), 203);
    }

    #[test]
    fn test_fallback_summary_never_empty_for_content() {
        assert_eq!(derive_summary("   ", &[], &[]), "...");
        assert_eq!(derive_summary("plain notes", &[], &[]), "plain notes...");
    }

    #[test]
    fn test_content_retained_verbatim() {
        let content = "  Fixed the race condition.\n";
        assert_eq!(assemble(content, None).content(), content);
    }
}
