//! Trigger policy configuration.
//!
//! [`TriggerConfig`] is always a complete record. Partial updates arrive as a
//! [`TriggerConfigPatch`], which is merged over the compiled-in defaults,
//! never over a previously active configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{ErrorCode, LogbookError, LogbookResult};

/// Action patterns counted as significant by default.
pub const DEFAULT_SIGNIFICANT_ACTIONS: &[&str] = &[
    "Edit",
    "Write",
    "Bash:git commit",
    "Bash:npm test",
    "Bash:cargo test",
];

/// Thresholds and matching rules for auto-journal triggering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Completed todos needed to trigger.
    /// Default: 3
    pub todo_completion_threshold: u32,
    /// Significant actions needed to trigger.
    /// Default: 5
    pub significant_action_threshold: u32,
    /// Minimum session length before any trigger. Hard gate.
    /// Default: 10
    pub min_session_duration_minutes: u32,
    /// Bare action types (`Edit`) or `type:subtype` keys (`Bash:git commit`).
    pub significant_action_patterns: Vec<String>,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            todo_completion_threshold: 3,
            significant_action_threshold: 5,
            min_session_duration_minutes: 10,
            significant_action_patterns: DEFAULT_SIGNIFICANT_ACTIONS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
        }
    }
}

impl TriggerConfig {
    /// Build configuration using builder pattern, starting from defaults.
    pub fn builder() -> TriggerConfigBuilder {
        TriggerConfigBuilder::default()
    }

    /// Merge a partial configuration over the defaults.
    pub fn from_patch(patch: TriggerConfigPatch) -> Self {
        let defaults = Self::default();
        Self {
            todo_completion_threshold: patch
                .todo_completion_threshold
                .unwrap_or(defaults.todo_completion_threshold),
            significant_action_threshold: patch
                .significant_action_threshold
                .unwrap_or(defaults.significant_action_threshold),
            min_session_duration_minutes: patch
                .min_session_duration_minutes
                .unwrap_or(defaults.min_session_duration_minutes),
            significant_action_patterns: patch
                .significant_action_patterns
                .unwrap_or(defaults.significant_action_patterns),
        }
    }

    /// Validate configuration values.
    ///
    /// An empty pattern would prefix-match every action, so it is rejected.
    pub fn validate(&self) -> LogbookResult<()> {
        let empty: Vec<String> = self
            .significant_action_patterns
            .iter()
            .enumerate()
            .filter(|(_, p)| p.trim().is_empty())
            .map(|(i, _)| i.to_string())
            .collect();

        if !empty.is_empty() {
            let mut details = HashMap::new();
            details.insert("indices".to_string(), empty.join(","));
            return Err(LogbookError::Validation {
                message: "significant_action_patterns must not contain empty patterns"
                    .to_string(),
                code: ErrorCode::ValEmptyPattern,
                details,
                suggestion: Some(
                    "Use a bare action type like 'Edit' or a key like 'Bash:git commit'"
                        .to_string(),
                ),
            });
        }
        Ok(())
    }
}

/// Partial trigger configuration, as supplied by a settings loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_completion_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub significant_action_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_session_duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub significant_action_patterns: Option<Vec<String>>,
}

impl TriggerConfigPatch {
    /// Load a patch from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> LogbookResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| LogbookError::Configuration(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| LogbookError::Configuration(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| LogbookError::Configuration(e.to_string())),
            _ => Err(LogbookError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }

    /// Set the todo completion threshold.
    pub fn todo_completion_threshold(mut self, threshold: u32) -> Self {
        self.todo_completion_threshold = Some(threshold);
        self
    }

    /// Set the significant action threshold.
    pub fn significant_action_threshold(mut self, threshold: u32) -> Self {
        self.significant_action_threshold = Some(threshold);
        self
    }

    /// Set the minimum session duration.
    pub fn min_session_duration_minutes(mut self, minutes: u32) -> Self {
        self.min_session_duration_minutes = Some(minutes);
        self
    }

    /// Set the significant action patterns.
    pub fn significant_action_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.significant_action_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }
}

impl From<TriggerConfig> for TriggerConfigPatch {
    fn from(config: TriggerConfig) -> Self {
        Self {
            todo_completion_threshold: Some(config.todo_completion_threshold),
            significant_action_threshold: Some(config.significant_action_threshold),
            min_session_duration_minutes: Some(config.min_session_duration_minutes),
            significant_action_patterns: Some(config.significant_action_patterns),
        }
    }
}

/// Builder for TriggerConfig.
#[derive(Default)]
pub struct TriggerConfigBuilder {
    config: TriggerConfig,
}

impl TriggerConfigBuilder {
    /// Set the todo completion threshold.
    pub fn todo_completion_threshold(mut self, threshold: u32) -> Self {
        self.config.todo_completion_threshold = threshold;
        self
    }

    /// Set the significant action threshold.
    pub fn significant_action_threshold(mut self, threshold: u32) -> Self {
        self.config.significant_action_threshold = threshold;
        self
    }

    /// Set the minimum session duration.
    pub fn min_session_duration_minutes(mut self, minutes: u32) -> Self {
        self.config.min_session_duration_minutes = minutes;
        self
    }

    /// Replace the significant action patterns.
    pub fn significant_action_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.significant_action_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> TriggerConfig {
        self.config
    }
}
