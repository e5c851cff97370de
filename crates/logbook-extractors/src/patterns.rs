//! Declarative pattern tables for session text extraction.
//!
//! Each table is an ordered list of compiled patterns with exactly one
//! capturing group. A table scan applies every pattern over the whole input,
//! trims each capture, keeps it only if it passes [`is_valid_item`], drops
//! duplicates already seen by an earlier match or pattern, and finally
//! truncates to the table's cap.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ExtractionKind;

/// Captures must be strictly longer than this many characters.
pub const MIN_ITEM_LEN: usize = 3;
/// Captures must be strictly shorter than this many characters.
pub const MAX_ITEM_LEN: usize = 200;

pub const WORK_COMPLETED_CAP: usize = 10;
pub const OPEN_ITEMS_CAP: usize = 10;
pub const DECISIONS_CAP: usize = 5;

/// Completion verbs, "completed"/"finished" phrasing, and checked list items.
pub static WORK_COMPLETED: Lazy<PatternTable> = Lazy::new(|| {
    PatternTable::new(
        ExtractionKind::WorkCompleted,
        vec![
            Regex::new(r"(?i)(?:implemented|created|added|built|wrote|fixed|updated|refactored)\s+(.+?)(?:\.|$)").unwrap(),
            Regex::new(r"(?i)(?:completed|finished|done with)\s+(.+?)(?:\.|$)").unwrap(),
            Regex::new(r"(?m)- \[x\]\s+(.+?)$").unwrap(),
        ],
        WORK_COMPLETED_CAP,
    )
});

/// Forward-looking and blocked phrasing, and unchecked list items.
pub static OPEN_ITEMS: Lazy<PatternTable> = Lazy::new(|| {
    PatternTable::new(
        ExtractionKind::OpenItems,
        vec![
            Regex::new(r"(?i)(?:todo|next|remaining|still need to|should|will)\s+(.+?)(?:\.|$)").unwrap(),
            Regex::new(r"(?i)(?:blocked by|waiting for|depends on)\s+(.+?)(?:\.|$)").unwrap(),
            Regex::new(r"(?m)- \[ \]\s+(.+?)$").unwrap(),
        ],
        OPEN_ITEMS_CAP,
    )
});

/// Decision phrasing and comparative phrasing.
pub static DECISIONS: Lazy<PatternTable> = Lazy::new(|| {
    PatternTable::new(
        ExtractionKind::KeyDecisions,
        vec![
            Regex::new(r"(?i)(?:decided to|chose|went with|selected|opted for)\s+(.+?)(?:\.|$)").unwrap(),
            Regex::new(r"(?i)(?:instead of|rather than|over)\s+(.+?)(?:\.|$)").unwrap(),
        ],
        DECISIONS_CAP,
    )
});

/// Check a trimmed capture against the length bounds.
///
/// Length is counted in characters, not bytes.
pub fn is_valid_item(item: &str) -> bool {
    let len = item.chars().count();
    len > MIN_ITEM_LEN && len < MAX_ITEM_LEN
}

/// An ordered table of single-capture patterns with an output cap.
#[derive(Debug)]
pub struct PatternTable {
    kind: ExtractionKind,
    patterns: Vec<Regex>,
    cap: usize,
}

impl PatternTable {
    /// Create a table from patterns that each carry one capturing group.
    pub fn new(kind: ExtractionKind, patterns: Vec<Regex>, cap: usize) -> Self {
        Self {
            kind,
            patterns,
            cap,
        }
    }

    /// Category this table extracts.
    pub fn kind(&self) -> ExtractionKind {
        self.kind
    }

    /// Maximum number of items a scan returns.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Number of patterns in the table.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the table has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Scan the full input with every pattern, in declaration order.
    pub fn scan(&self, content: &str) -> Vec<String> {
        let mut items: Vec<String> = Vec::new();

        for pattern in &self.patterns {
            for captures in pattern.captures_iter(content) {
                let Some(group) = captures.get(1) else {
                    continue;
                };
                let item = group.as_str().trim();
                if is_valid_item(item) && !items.iter().any(|seen| seen == item) {
                    items.push(item.to_string());
                }
            }
        }

        // Cap by truncation so items from earlier patterns are never evicted.
        items.truncate(self.cap);
        items
    }
}
