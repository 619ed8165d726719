//! Workload classification and the summary record.

use serde::{Deserialize, Serialize};

/// Overall workload classification.
///
/// Variants are listed in rule-evaluation order; the first matching
/// rule wins (see `WorkloadAnalyzer::analyze`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadStatus {
    /// No tasks at all.
    AllClear,
    /// Total workload above the heavy threshold.
    Overloaded,
    /// Total workload above the busy threshold.
    Busy,
    /// Several high-priority tasks on a non-trivial workload.
    FocusNeeded,
    /// Multiple deadlines inside the watch window.
    DeadlineWatch,
    /// Nothing stands out.
    Balanced,
}

impl WorkloadStatus {
    /// Banner headline for this status.
    pub fn message(&self) -> &'static str {
        match self {
            Self::AllClear => "All clear! 🌟",
            Self::Overloaded => "Your plate is quite full! 🌊",
            Self::Busy => "Getting busy! 🌱",
            Self::FocusNeeded => "Some important tasks need attention 📋",
            Self::DeadlineWatch => "Keep an eye on those deadlines ⏰",
            Self::Balanced => "Workload looks balanced! 💫",
        }
    }

    /// Advice line shown under the headline.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::AllClear => "Enjoy your free time, you've earned it!",
            Self::Overloaded => {
                "Consider delegating or rescheduling some tasks. Your well-being comes first."
            }
            Self::Busy => "Be careful about taking on new commitments right now.",
            Self::FocusNeeded => "Focus on high-priority items first, but take breaks between them.",
            Self::DeadlineWatch => "Plan your week carefully around these key dates.",
            Self::Balanced => "You're maintaining a good pace. Keep it up!",
        }
    }
}

/// Result of analyzing a task list.
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadSummary {
    /// Number of tasks considered.
    pub total_tasks: usize,
    /// Tasks whose priority score exceeds the high-priority threshold.
    pub high_priority_tasks: usize,
    /// Tasks with a deadline inside the watch window (overdue included).
    pub upcoming_deadlines: usize,
    /// Weighted effort sum across all tasks (unrounded).
    pub total_workload: f64,
    /// Which status rule matched.
    pub status: WorkloadStatus,
    /// Banner headline.
    pub message: String,
    /// Advice line.
    pub advice: String,
    /// One-line workload report, e.g.
    /// "Your workload score is 12. 25 is considered impossible."
    pub workload: String,
}
