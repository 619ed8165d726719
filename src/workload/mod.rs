//! Aggregate workload analysis.
//!
//! Condenses a task list into one weighted effort score and a friendly
//! status banner (message + advice). Per-task urgency comes from the
//! `scoring` layer; this layer only aggregates and classifies.
//!
//! # Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use taskload::scoring::ScoringContext;
//! use taskload::workload::{WorkloadAnalyzer, WorkloadStatus};
//!
//! let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
//! let summary = WorkloadAnalyzer::new().analyze(&[], &ScoringContext::at_time(now));
//!
//! assert_eq!(summary.status, WorkloadStatus::AllClear);
//! assert_eq!(summary.message, "All clear! 🌟");
//! ```

mod analyzer;
mod summary;

pub use analyzer::{WorkloadAnalyzer, WorkloadConfig};
pub use summary::{WorkloadStatus, WorkloadSummary};
