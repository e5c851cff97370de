//! Seams to external collaborators.

mod journal_store;

pub use journal_store::*;
