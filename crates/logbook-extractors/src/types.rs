//! Core types for session text extraction.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Category of structured fact pulled out of session text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExtractionKind {
    /// Finished work ("implemented ...", "- [x] ...").
    WorkCompleted,
    /// Remaining or blocked work ("still need to ...", "- [ ] ...").
    OpenItems,
    /// Choices made during the session ("decided to ...", "rather than ...").
    KeyDecisions,
}

/// All extraction outputs for one piece of session text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    /// Completed work items, first-seen order, at most 10.
    pub work_completed: Vec<String>,
    /// Open items, first-seen order, at most 10.
    pub open_items: Vec<String>,
    /// Key decisions, first-seen order, at most 5.
    pub key_decisions: Vec<String>,
    /// Matched topics in dictionary order.
    pub topics: Vec<String>,
}

impl Extraction {
    /// Check if nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.work_completed.is_empty()
            && self.open_items.is_empty()
            && self.key_decisions.is_empty()
            && self.topics.is_empty()
    }

    /// Items extracted for the given category.
    pub fn items(&self, kind: ExtractionKind) -> &[String] {
        match kind {
            ExtractionKind::WorkCompleted => &self.work_completed,
            ExtractionKind::OpenItems => &self.open_items,
            ExtractionKind::KeyDecisions => &self.key_decisions,
        }
    }
}
