//! Heuristic priority scoring for tasks.
//!
//! Blends importance, effort, age, and deadline proximity into a single
//! urgency score per task. All weights and thresholds live in
//! [`ScoringConfig`] so they can be tuned without touching the logic.
//!
//! # Score Convention
//! **Higher score = more urgent.** Scores are rounded to one decimal
//! place; typical values fall roughly in the 0–20 range.
//!
//! # Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use taskload::models::Task;
//! use taskload::scoring::{PriorityScorer, ScoringContext};
//!
//! let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
//! let task = Task::new("Write report", now)
//!     .with_importance(5)
//!     .with_length(1)
//!     .with_difficulty(1);
//!
//! let scorer = PriorityScorer::new();
//! let ctx = ScoringContext::at_time(now);
//! assert_eq!(scorer.score(&task, &ctx), 11.8);
//! ```

mod context;
mod priority;

pub use context::ScoringContext;
pub use priority::{PriorityBreakdown, PriorityScorer, ScoringConfig};

/// Score produced by the priority scorer.
///
/// Higher = more urgent. Always rounded to one decimal place.
pub type PriorityScore = f64;
