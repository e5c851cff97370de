//! Markdown and condensed renderings of a journal entry.
//!
//! Both renderers are pure: the same entry (and timestamp) always yields
//! byte-identical output. Sections with no items are omitted entirely.

use chrono::{DateTime, Utc};

use crate::journal::entry::GeneratedJournalEntry;

const CONDENSED_WORK_ITEMS: usize = 3;
const CONDENSED_DECISIONS: usize = 2;
const CONDENSED_OPEN_ITEMS: usize = 3;

/// Long-form calendar date, e.g. "Friday, January 5, 2024".
pub fn long_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%A, %B %-d, %Y").to_string()
}

/// Format a journal entry as a markdown document.
pub fn to_markdown(entry: &GeneratedJournalEntry, timestamp: &DateTime<Utc>) -> String {
    let mut lines: Vec<String> = vec![
        format!("## Session: {}", long_date(timestamp)),
        String::new(),
        "### Summary".to_string(),
        entry.summary().to_string(),
        String::new(),
    ];

    push_bulleted(&mut lines, "### Work Completed", entry.work_completed());
    push_bulleted(&mut lines, "### Key Decisions", entry.key_decisions());
    push_bulleted(&mut lines, "### Open Items", entry.open_items());

    if !entry.topics().is_empty() {
        lines.push("### Topics".to_string());
        lines.push(
            entry
                .topics()
                .iter()
                .map(|t| format!("`{t}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Condensed plain-text summary for token-constrained consumers.
///
/// Targets roughly 200-300 words; only the per-list caps are enforced.
pub fn to_condensed_summary(entry: &GeneratedJournalEntry) -> String {
    let mut lines = vec![entry.summary().to_string()];

    push_condensed(&mut lines, "Key work:", entry.work_completed(), CONDENSED_WORK_ITEMS);
    push_condensed(&mut lines, "Decisions:", entry.key_decisions(), CONDENSED_DECISIONS);
    push_condensed(&mut lines, "Open items:", entry.open_items(), CONDENSED_OPEN_ITEMS);

    lines.join("\n")
}

fn push_bulleted(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(heading.to_string());
    lines.extend(items.iter().map(|item| format!("- {item}")));
    lines.push(String::new());
}

fn push_condensed(lines: &mut Vec<String>, heading: &str, items: &[String], limit: usize) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.extend(items.iter().take(limit).map(|item| format!("- {item}")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::assembler::assemble;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap()
    }

    fn entry(
        summary: &str,
        work: &[&str],
        open: &[&str],
        decisions: &[&str],
        topics: &[&str],
    ) -> GeneratedJournalEntry {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        GeneratedJournalEntry::new(
            String::new(),
            summary.to_string(),
            owned(work),
            owned(open),
            owned(decisions),
            owned(topics),
        )
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(&timestamp()), "Friday, January 5, 2024");
        let monday = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(long_date(&monday), "Monday, January 15, 2024");
    }

    #[test]
    fn test_markdown_minimal_document() {
        let markdown = to_markdown(&assemble("", None), &timestamp());
        assert_eq!(
            markdown,
            "## Session: Friday, January 5, 2024\n\n### Summary\n...\n\n---\n"
        );
    }

    #[test]
    fn test_markdown_full_document_section_order() {
        let entry = entry(
            "Did things.",
            &["the parser"],
            &["write docs"],
            &["use sqlite"],
            &["indexing", "testing"],
        );
        let expected = "## Session: Friday, January 5, 2024\n\
                        \n\
                        ### Summary\n\
                        Did things.\n\
                        \n\
                        ### Work Completed\n\
                        - the parser\n\
                        \n\
                        ### Key Decisions\n\
                        - use sqlite\n\
                        \n\
                        ### Open Items\n\
                        - write docs\n\
                        \n\
                        ### Topics\n\
                        `indexing`, `testing`\n\
                        \n\
                        ---\n";
        assert_eq!(to_markdown(&entry, &timestamp()), expected);
    }

    #[test]
    fn test_markdown_omits_only_empty_sections() {
        let entry = entry("S.", &[], &["write docs"], &[], &[]);
        let markdown = to_markdown(&entry, &timestamp());
        assert!(!markdown.contains("### Work Completed"));
        assert!(!markdown.contains("### Key Decisions"));
        assert!(!markdown.contains("### Topics"));
        assert!(markdown.contains("### Open Items\n- write docs\n"));
    }

    #[test]
    fn test_markdown_is_idempotent() {
        let entry = assemble("Implemented the cache layer. Decided to use tokio.", None);
        assert_eq!(
            to_markdown(&entry, &timestamp()),
            to_markdown(&entry, &timestamp())
        );
    }

    #[test]
    fn test_condensed_summary_caps_lists() {
        let entry = entry(
            "Summary line.",
            &["w1 item", "w2 item", "w3 item", "w4 item"],
            &["o1 item", "o2 item", "o3 item", "o4 item"],
            &["d1 item", "d2 item", "d3 item"],
            &["testing"],
        );
        let expected = "Summary line.\n\
                        \n\
                        Key work:\n\
                        - w1 item\n\
                        - w2 item\n\
                        - w3 item\n\
                        \n\
                        Decisions:\n\
                        - d1 item\n\
                        - d2 item\n\
                        \n\
                        Open items:\n\
                        - o1 item\n\
                        - o2 item\n\
                        - o3 item";
        assert_eq!(to_condensed_summary(&entry), expected);
    }

    #[test]
    fn test_condensed_summary_only_summary() {
        let entry = entry("Just this.", &[], &[], &[], &["api"]);
        assert_eq!(to_condensed_summary(&entry), "Just this.");
    }
}
