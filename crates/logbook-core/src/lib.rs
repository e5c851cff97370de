//! logbook-core - Session tracking and auto-journal generation.
//!
//! This crate decides, from lightweight telemetry about an ongoing work
//! session, when a journal entry should be produced, and derives that
//! entry's structured content from raw session text.
//!
//! # Example
//!
//! ```
//! use logbook_core::{AutoJournal, ManualClock, TriggerConfigPatch};
//!
//! let mut journal = AutoJournal::with_clock(ManualClock::default());
//! journal
//!     .set_config(TriggerConfigPatch::default().min_session_duration_minutes(0))
//!     .unwrap();
//!
//! journal.start_session();
//! for _ in 0..3 {
//!     journal.record_todo_completion();
//! }
//! assert!(journal.should_trigger(None));
//!
//! let record = journal.generate("Implemented the cache layer.", None);
//! assert_eq!(record.entry.summary(), "Session focused on the cache layer.");
//! ```

pub mod auto_journal;
pub mod clock;
pub mod config;
pub mod error;
pub mod journal;
pub mod session;
pub mod traits;
pub mod trigger;

// Re-export commonly used types
pub use auto_journal::AutoJournal;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{TriggerConfig, TriggerConfigBuilder, TriggerConfigPatch};
pub use error::{ErrorCode, LogbookError, LogbookResult};
pub use journal::{
    assemble, derive_summary, to_condensed_summary, to_markdown, EntryAssembler,
    GeneratedJournalEntry,
};
pub use session::{ActionRecord, SessionState, SessionStats, SessionTracker};
pub use traits::{InMemoryJournalStore, JournalRecord, JournalStore};
pub use trigger::{TriggerDecision, TriggerGate, TriggerPolicy};

pub use logbook_extractors::{
    extract_key_decisions, extract_open_items, extract_topics, extract_work_completed,
    ExtractionPipeline,
};
