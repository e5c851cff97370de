//! Journal entry assembly and rendering.
//!
//! Raw session text flows through the extraction pipeline into an
//! [`EntryAssembler`], which produces a [`GeneratedJournalEntry`]. The
//! renderers turn an entry into a markdown document or a condensed summary.

mod assembler;
mod entry;
mod render;

pub use assembler::{assemble, derive_summary, EntryAssembler, ELLIPSIS, FALLBACK_SUMMARY_CHARS};
pub use entry::GeneratedJournalEntry;
pub use render::{long_date, to_condensed_summary, to_markdown};
