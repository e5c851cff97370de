//! Session activity tracking.
//!
//! A [`SessionTracker`] holds at most one live [`SessionState`]. Statistics
//! are never cached: each [`SessionTracker::stats`] call recomputes duration
//! from the clock and significant actions from the configuration passed in.

mod tracker;
mod types;

pub use tracker::SessionTracker;
pub use types::{ActionRecord, SessionState, SessionStats};
