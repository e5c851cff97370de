//! Session activity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed action, e.g. an `Edit`, or `Bash` with subtype `git commit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    /// Action type (e.g., "Edit", "Write", "Bash").
    #[serde(rename = "type")]
    pub action_type: String,
    /// Optional subtype (e.g., "git commit").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// When the action was recorded.
    pub timestamp: DateTime<Utc>,
}

impl ActionRecord {
    /// Create a new action record.
    pub fn new(
        action_type: impl Into<String>,
        subtype: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            action_type: action_type.into(),
            subtype,
            timestamp,
        }
    }

    /// Matching key: `type:subtype` when a subtype is present, else `type`.
    pub fn key(&self) -> String {
        match &self.subtype {
            Some(subtype) => format!("{}:{}", self.action_type, subtype),
            None => self.action_type.clone(),
        }
    }

    /// Check the action against significant-action patterns.
    ///
    /// Matches when the key equals or starts with a pattern, or the bare
    /// type equals a pattern.
    pub fn matches_any(&self, patterns: &[String]) -> bool {
        let key = self.key();
        patterns
            .iter()
            .any(|p| key.starts_with(p.as_str()) || self.action_type == *p)
    }
}

/// Live state of the active session.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// When the session started.
    pub start_time: DateTime<Utc>,
    /// Completed todo count; only ever incremented.
    pub todos_completed: u32,
    /// Actions in append order.
    pub actions: Vec<ActionRecord>,
}

impl SessionState {
    /// Create an empty session starting at the given instant.
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            todos_completed: 0,
            actions: Vec::new(),
        }
    }
}

/// Snapshot of session statistics, derived fresh on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub todos_completed: u32,
    pub significant_actions_count: u32,
    pub duration_minutes: i64,
    pub session_start_time: DateTime<Utc>,
}
