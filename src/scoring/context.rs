//! Evaluation context for priority scoring.

use chrono::{DateTime, Utc};

/// Ambient state passed to the scorer and analyzer.
///
/// Carries the caller's notion of "now" so that scoring stays a pure
/// function: the crate never reads the wall clock itself, and two calls
/// with the same context always agree.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    /// Current time as seen by the caller.
    pub now: DateTime<Utc>,
}

impl ScoringContext {
    /// Creates a context at the given time.
    pub fn at_time(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}
