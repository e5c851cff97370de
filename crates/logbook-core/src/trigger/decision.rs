//! Trigger decision records.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::session::SessionStats;

/// Gate categories checked by the trigger policy, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TriggerGate {
    /// Session shorter than the minimum duration.
    Duration,
    /// Neither the todo nor the action threshold was met.
    Counts,
}

/// Outcome of evaluating session statistics against the trigger policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDecision {
    /// Whether a journal entry should be generated now.
    pub should_trigger: bool,
    pub duration_met: bool,
    pub todos_met: bool,
    pub actions_met: bool,
    /// Statistics the decision was made on.
    pub stats: SessionStats,
}

impl TriggerDecision {
    /// Combine gate results: duration is a hard gate, counts are alternatives.
    pub fn new(stats: SessionStats, duration_met: bool, todos_met: bool, actions_met: bool) -> Self {
        Self {
            should_trigger: duration_met && (todos_met || actions_met),
            duration_met,
            todos_met,
            actions_met,
            stats,
        }
    }

    /// First gate that blocked the trigger, if any.
    pub fn failed_gate(&self) -> Option<TriggerGate> {
        if !self.duration_met {
            Some(TriggerGate::Duration)
        } else if !(self.todos_met || self.actions_met) {
            Some(TriggerGate::Counts)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stats() -> SessionStats {
        SessionStats {
            todos_completed: 0,
            significant_actions_count: 0,
            duration_minutes: 0,
            session_start_time: Utc::now(),
        }
    }

    #[test]
    fn test_duration_is_hard_gate() {
        let decision = TriggerDecision::new(stats(), false, true, true);
        assert!(!decision.should_trigger);
        assert_eq!(decision.failed_gate(), Some(TriggerGate::Duration));
    }

    #[test]
    fn test_either_count_suffices() {
        assert!(TriggerDecision::new(stats(), true, true, false).should_trigger);
        assert!(TriggerDecision::new(stats(), true, false, true).should_trigger);
        assert_eq!(TriggerDecision::new(stats(), true, true, false).failed_gate(), None);
    }

    #[test]
    fn test_counts_gate() {
        let decision = TriggerDecision::new(stats(), true, false, false);
        assert!(!decision.should_trigger);
        assert_eq!(decision.failed_gate(), Some(TriggerGate::Counts));
        assert_eq!(TriggerGate::Counts.to_string(), "counts");
    }
}
