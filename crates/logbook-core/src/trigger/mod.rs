//! Trigger policy for auto-journal generation.
//!
//! A journal is triggered when the session has lasted at least the minimum
//! duration AND either the todo completion threshold or the significant
//! action threshold is met.

mod decision;
mod policy;

pub use decision::{TriggerDecision, TriggerGate};
pub use policy::TriggerPolicy;
