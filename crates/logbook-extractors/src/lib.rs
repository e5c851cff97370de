//! logbook-extractors - Structural extraction from raw session text.
//!
//! Scans free-form session transcripts with declarative pattern tables and
//! a topic keyword dictionary:
//!
//! - Work completed: completion verbs and checked list items (cap 10)
//! - Open items: forward-looking phrasing and unchecked list items (cap 10)
//! - Key decisions: decision and comparative phrasing (cap 5)
//! - Topics: keyword dictionary matches, in dictionary order
//!
//! Every table is compiled once and re-applied fresh per call, so no scan
//! position survives between invocations.
//!
//! # Example
//!
//! ```
//! use logbook_extractors::{extract_work_completed, ExtractionPipeline};
//!
//! let items = extract_work_completed("Implemented the cache layer. Fixed the race condition.");
//! assert_eq!(items, vec!["the cache layer", "the race condition"]);
//!
//! let extraction = ExtractionPipeline::new().extract("- [ ] wire up the exporter");
//! assert_eq!(extraction.open_items, vec!["wire up the exporter"]);
//! ```

mod patterns;
mod pipeline;
mod topics;
mod types;

pub use patterns::{
    is_valid_item, PatternTable, DECISIONS, DECISIONS_CAP, MAX_ITEM_LEN, MIN_ITEM_LEN,
    OPEN_ITEMS, OPEN_ITEMS_CAP, WORK_COMPLETED, WORK_COMPLETED_CAP,
};
pub use pipeline::{
    extract_key_decisions, extract_open_items, extract_work_completed, ExtractionPipeline,
};
pub use topics::{extract_topics, TOPIC_KEYWORDS};
pub use types::{Extraction, ExtractionKind};
