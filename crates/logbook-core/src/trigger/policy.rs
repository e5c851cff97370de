//! Trigger policy: active configuration plus pure decision predicates.

use tracing::{debug, info};

use crate::config::{TriggerConfig, TriggerConfigPatch};
use crate::error::LogbookResult;
use crate::session::SessionStats;
use crate::trigger::decision::{TriggerDecision, TriggerGate};

/// Owns the active [`TriggerConfig`] and evaluates statistics against it.
#[derive(Debug, Clone, Default)]
pub struct TriggerPolicy {
    config: TriggerConfig,
}

impl TriggerPolicy {
    /// Create a policy with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy with a complete configuration.
    pub fn with_config(config: TriggerConfig) -> LogbookResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Copy of the active configuration.
    pub fn get(&self) -> TriggerConfig {
        self.config.clone()
    }

    /// Borrow the active configuration.
    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Replace the configuration with `patch` merged over the defaults.
    ///
    /// Fields set by an earlier call are not retained unless repeated. On
    /// validation failure the active configuration is left untouched.
    pub fn set(&mut self, patch: TriggerConfigPatch) -> LogbookResult<()> {
        let merged = TriggerConfig::from_patch(patch);
        merged.validate()?;
        info!(
            todo_threshold = merged.todo_completion_threshold,
            action_threshold = merged.significant_action_threshold,
            min_duration = merged.min_session_duration_minutes,
            patterns = merged.significant_action_patterns.len(),
            "Trigger configuration replaced"
        );
        self.config = merged;
        Ok(())
    }

    /// Restore the default configuration.
    pub fn reset(&mut self) {
        self.config = TriggerConfig::default();
        debug!("Trigger configuration reset to defaults");
    }

    /// Check if the session has met the minimum duration.
    pub fn meets_duration_floor(&self, stats: &SessionStats) -> bool {
        stats.duration_minutes >= i64::from(self.config.min_session_duration_minutes)
    }

    /// Check if the todo completion threshold is met.
    pub fn meets_todo_threshold(&self, stats: &SessionStats) -> bool {
        stats.todos_completed >= self.config.todo_completion_threshold
    }

    /// Check if the significant action threshold is met.
    pub fn meets_action_threshold(&self, stats: &SessionStats) -> bool {
        stats.significant_actions_count >= self.config.significant_action_threshold
    }

    /// Evaluate every gate for the given statistics.
    pub fn decide(&self, stats: &SessionStats) -> TriggerDecision {
        let decision = TriggerDecision::new(
            stats.clone(),
            self.meets_duration_floor(stats),
            self.meets_todo_threshold(stats),
            self.meets_action_threshold(stats),
        );
        debug!(
            duration_minutes = stats.duration_minutes,
            todos_completed = stats.todos_completed,
            significant_actions = stats.significant_actions_count,
            should_trigger = decision.should_trigger,
            "Evaluated trigger policy"
        );
        decision
    }

    /// Duration floor AND (todo threshold OR action threshold).
    pub fn evaluate(&self, stats: &SessionStats) -> bool {
        self.decide(stats).should_trigger
    }

    /// Evaluate optional statistics; absent statistics never trigger.
    pub fn should_trigger(&self, stats: Option<&SessionStats>) -> bool {
        stats.is_some_and(|s| self.evaluate(s))
    }

    /// Human-readable explanation of why a journal was or wasn't triggered.
    pub fn explain(&self, stats: &SessionStats) -> String {
        let decision = self.decide(stats);
        let mut lines = vec![
            format!(
                "Session Duration: {} minutes (min: {})",
                stats.duration_minutes, self.config.min_session_duration_minutes
            ),
            format!(
                "TODOs Completed: {} (threshold: {})",
                stats.todos_completed, self.config.todo_completion_threshold
            ),
            format!(
                "Significant Actions: {} (threshold: {})",
                stats.significant_actions_count, self.config.significant_action_threshold
            ),
            String::new(),
            format!(
                "Auto-Journal Trigger: {}",
                if decision.should_trigger { "YES" } else { "NO" }
            ),
        ];

        match decision.failed_gate() {
            Some(TriggerGate::Duration) => lines.push("  - Session too short".to_string()),
            Some(TriggerGate::Counts) => lines.push("  - No threshold met".to_string()),
            None => {}
        }

        lines.join("\n")
    }
}
