//! Single-session activity tracker.

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::TriggerConfig;
use crate::session::types::{ActionRecord, SessionState, SessionStats};

/// Tracks at most one active session.
///
/// All recording operations are no-ops while no session is active.
#[derive(Debug)]
pub struct SessionTracker<C: Clock = SystemClock> {
    clock: C,
    state: Option<SessionState>,
}

impl SessionTracker<SystemClock> {
    /// Create a tracker on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SessionTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionTracker<C> {
    /// Create a tracker reading time from the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock, state: None }
    }

    /// The clock this tracker reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start a fresh session, discarding any existing one.
    pub fn start(&mut self) {
        let now = self.clock.now();
        if self.state.is_some() {
            debug!("Replacing active session");
        }
        self.state = Some(SessionState::new(now));
        debug!(start_time = %now, "Session started");
    }

    /// End the current session, discarding its state.
    pub fn end(&mut self) {
        if let Some(state) = self.state.take() {
            debug!(
                todos_completed = state.todos_completed,
                actions = state.actions.len(),
                "Session ended"
            );
        }
    }

    /// Check if a session is currently being tracked.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Current session state, if any.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Record a todo completion.
    pub fn record_todo_completion(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.todos_completed = state.todos_completed.saturating_add(1);
        }
    }

    /// Record an action such as `Edit`, or `Bash` with subtype `git commit`.
    pub fn record_action(&mut self, action_type: impl Into<String>, subtype: Option<&str>) {
        let now = self.clock.now();
        if let Some(state) = self.state.as_mut() {
            state
                .actions
                .push(ActionRecord::new(action_type, subtype.map(String::from), now));
        }
    }

    /// Derive statistics against the given (current) configuration.
    ///
    /// Returns `None` when no session is active.
    pub fn stats(&self, config: &TriggerConfig) -> Option<SessionStats> {
        let state = self.state.as_ref()?;

        let elapsed = self.clock.now() - state.start_time;
        let duration_minutes = elapsed.num_milliseconds().div_euclid(60_000);
        let significant = state
            .actions
            .iter()
            .filter(|action| action.matches_any(&config.significant_action_patterns))
            .count();

        Some(SessionStats {
            todos_completed: state.todos_completed,
            significant_actions_count: u32::try_from(significant).unwrap_or(u32::MAX),
            duration_minutes,
            session_start_time: state.start_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{Duration, TimeZone, Utc};

    fn tracker() -> SessionTracker<ManualClock> {
        let start = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        SessionTracker::with_clock(ManualClock::new(start))
    }

    #[test]
    fn test_inactive_tracker_ignores_recording() {
        let mut tracker = tracker();
        tracker.record_todo_completion();
        tracker.record_action("Edit", None);
        assert!(!tracker.is_active());
        assert!(tracker.stats(&TriggerConfig::default()).is_none());
    }

    #[test]
    fn test_start_resets_state() {
        let mut tracker = tracker();
        tracker.start();
        tracker.record_todo_completion();
        tracker.record_action("Edit", None);

        tracker.start();
        let stats = tracker.stats(&TriggerConfig::default()).unwrap();
        assert_eq!(stats.todos_completed, 0);
        assert_eq!(stats.significant_actions_count, 0);
    }

    #[test]
    fn test_end_discards_state() {
        let mut tracker = tracker();
        tracker.start();
        tracker.end();
        assert!(!tracker.is_active());
        assert!(tracker.state().is_none());
        tracker.end();
    }

    #[test]
    fn test_duration_floors_to_whole_minutes() {
        let mut tracker = tracker();
        tracker.start();
        tracker.clock().advance(Duration::seconds(10 * 60 + 59));
        let stats = tracker.stats(&TriggerConfig::default()).unwrap();
        assert_eq!(stats.duration_minutes, 10);
    }

    #[test]
    fn test_actions_keep_append_order_and_timestamps() {
        let mut tracker = tracker();
        tracker.start();
        tracker.record_action("Edit", None);
        tracker.clock().advance_minutes(1);
        tracker.record_action("Bash", Some("git commit"));

        let actions = &tracker.state().unwrap().actions;
        assert_eq!(actions[0].key(), "Edit");
        assert_eq!(actions[1].key(), "Bash:git commit");
        assert!(actions[1].timestamp > actions[0].timestamp);
    }

    #[test]
    fn test_significant_count_uses_given_config() {
        let mut tracker = tracker();
        tracker.start();
        tracker.record_action("Edit", None);
        tracker.record_action("Read", None);

        let edits = TriggerConfig::builder()
            .significant_action_patterns(["Edit"])
            .build();
        let reads = TriggerConfig::builder()
            .significant_action_patterns(["Read", "Edit"])
            .build();

        assert_eq!(tracker.stats(&edits).unwrap().significant_actions_count, 1);
        assert_eq!(tracker.stats(&reads).unwrap().significant_actions_count, 2);
    }

    #[test]
    fn test_action_counted_once_across_patterns() {
        let mut tracker = tracker();
        tracker.start();
        tracker.record_action("Bash", Some("git commit"));

        let config = TriggerConfig::builder()
            .significant_action_patterns(["Bash", "Bash:git", "Bash:git commit"])
            .build();
        assert_eq!(tracker.stats(&config).unwrap().significant_actions_count, 1);
    }

    #[test]
    fn test_stats_are_idempotent() {
        let mut tracker = tracker();
        tracker.start();
        tracker.record_action("Edit", None);
        tracker.record_action("Write", None);
        let config = TriggerConfig::default();
        assert_eq!(tracker.stats(&config), tracker.stats(&config));
    }
}
