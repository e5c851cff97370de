//! Auto-journal context: one session, one trigger policy.
//!
//! [`AutoJournal`] is the caller-owned context that replaces process-wide
//! state. Activity is recorded into it, the trigger policy decides when
//! enough has accumulated, and on trigger the caller supplies session text
//! that is assembled, rendered and handed to a [`JournalStore`].
//!
//! One `AutoJournal` tracks one session. Run several for several sessions.
//! Sharing one across threads requires an external lock.

use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::{TriggerConfig, TriggerConfigPatch};
use crate::error::LogbookResult;
use crate::journal::{EntryAssembler, GeneratedJournalEntry};
use crate::session::{SessionStats, SessionTracker};
use crate::traits::{JournalRecord, JournalStore};
use crate::trigger::{TriggerDecision, TriggerPolicy};

/// Session tracking plus trigger policy plus entry assembly.
pub struct AutoJournal<C: Clock = SystemClock> {
    policy: TriggerPolicy,
    tracker: SessionTracker<C>,
    assembler: EntryAssembler,
}

impl AutoJournal<SystemClock> {
    /// Create a context on the system clock with the default policy.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for AutoJournal<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AutoJournal<C> {
    /// Create a context reading time from the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            policy: TriggerPolicy::new(),
            tracker: SessionTracker::with_clock(clock),
            assembler: EntryAssembler::new(),
        }
    }

    /// Replace the trigger policy.
    pub fn with_policy(mut self, policy: TriggerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the entry assembler.
    pub fn with_assembler(mut self, assembler: EntryAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub fn policy(&self) -> &TriggerPolicy {
        &self.policy
    }

    pub fn tracker(&self) -> &SessionTracker<C> {
        &self.tracker
    }

    pub fn clock(&self) -> &C {
        self.tracker.clock()
    }

    // Configuration

    /// Copy of the active trigger configuration.
    pub fn config(&self) -> TriggerConfig {
        self.policy.get()
    }

    /// Replace the configuration with `patch` merged over the defaults.
    pub fn set_config(&mut self, patch: TriggerConfigPatch) -> LogbookResult<()> {
        self.policy.set(patch)
    }

    /// Restore the default configuration.
    pub fn reset_config(&mut self) {
        self.policy.reset();
    }

    // Session tracking

    pub fn start_session(&mut self) {
        self.tracker.start();
    }

    pub fn end_session(&mut self) {
        self.tracker.end();
    }

    pub fn is_session_active(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn record_todo_completion(&mut self) {
        self.tracker.record_todo_completion();
    }

    pub fn record_action(&mut self, action_type: impl Into<String>, subtype: Option<&str>) {
        self.tracker.record_action(action_type, subtype);
    }

    /// Current statistics against the active configuration.
    pub fn session_stats(&self) -> Option<SessionStats> {
        self.tracker.stats(self.policy.config())
    }

    // Trigger decisions

    /// Decide whether to journal now.
    ///
    /// Uses current statistics when `stats` is `None`; with no active
    /// session the answer is always false.
    pub fn should_trigger(&self, stats: Option<&SessionStats>) -> bool {
        match stats {
            Some(stats) => self.policy.evaluate(stats),
            None => self.policy.should_trigger(self.session_stats().as_ref()),
        }
    }

    /// Full gate breakdown for the current session, if one is active.
    pub fn decision(&self) -> Option<TriggerDecision> {
        self.session_stats().map(|stats| self.policy.decide(&stats))
    }

    /// Explain the decision for the given statistics.
    pub fn explain(&self, stats: &SessionStats) -> String {
        self.policy.explain(stats)
    }

    /// Explain the decision for the current session, if one is active.
    pub fn trigger_summary(&self) -> Option<String> {
        self.session_stats().map(|stats| self.policy.explain(&stats))
    }

    // Journal generation

    /// Assemble an entry from session text without rendering it.
    pub fn assemble(&self, content: &str, summary: Option<&str>) -> GeneratedJournalEntry {
        self.assembler.assemble(content, summary)
    }

    /// Assemble and render a journal record stamped with the clock's instant.
    pub fn generate(&self, content: &str, summary: Option<&str>) -> JournalRecord {
        let entry = self.assembler.assemble(content, summary);
        let record = JournalRecord::new(entry, self.clock().now());
        match self.session_stats() {
            Some(stats) => record.with_stats(stats),
            None => record,
        }
    }

    /// Generate and store a journal if the trigger policy says so.
    ///
    /// Returns the stored id, or `None` when the policy did not trigger.
    pub async fn maybe_journal<S>(
        &self,
        store: &S,
        content: &str,
        summary: Option<&str>,
    ) -> LogbookResult<Option<String>>
    where
        S: JournalStore + ?Sized,
    {
        if !self.should_trigger(None) {
            debug!("Auto-journal not triggered");
            return Ok(None);
        }

        let record = self.generate(content, summary);
        let id = store.store_journal(&record).await?;
        info!(
            id = %id,
            work_completed = record.entry.work_completed().len(),
            open_items = record.entry.open_items().len(),
            "Stored auto-journal entry"
        );
        Ok(Some(id))
    }
}
