//! The workload analyzer.
//!
//! # Algorithm
//!
//! Each task contributes `length × 0.8`, multiplied by 1.5 when its
//! priority score exceeds the high-priority threshold and by 1.3 when
//! its deadline falls inside the watch window (overdue counts). The sum
//! is classified by the first matching rule:
//!
//! 1. no tasks → `AllClear`
//! 2. workload > 25 → `Overloaded`
//! 3. workload > 15 → `Busy`
//! 4. ≥ 3 high-priority tasks and workload > 10 → `FocusNeeded`
//! 5. ≥ 2 upcoming deadlines → `DeadlineWatch`
//! 6. otherwise → `Balanced`
//!
//! Rule order is load-bearing: a heavy workload wins over deadline
//! pressure even when both rules match.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{WorkloadStatus, WorkloadSummary};
use crate::models::Task;
use crate::scoring::{PriorityScorer, ScoringContext};

/// Tunable weights and thresholds for workload analysis.
///
/// `Default` carries the stock tuning; all fields are optional when
/// deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Priority score above which a task counts as high priority.
    pub high_priority_threshold: f64,
    /// Days ahead within which a deadline counts as upcoming.
    pub deadline_window_days: f64,
    /// Weight on the length rating in each task's contribution.
    pub length_weight: f64,
    /// Contribution multiplier for high-priority tasks.
    pub high_priority_bonus: f64,
    /// Contribution multiplier for tasks with an upcoming deadline.
    pub deadline_bonus: f64,
    /// Workload above which the plate is considered full.
    pub heavy_threshold: f64,
    /// Workload above which things are getting busy.
    pub busy_threshold: f64,
    /// High-priority task count that triggers the focus rule.
    pub focus_task_count: usize,
    /// Workload floor for the focus rule.
    pub focus_workload_threshold: f64,
    /// Upcoming-deadline count that triggers the watch rule.
    pub deadline_watch_count: usize,
    /// Narrative tail of the workload report line.
    pub ceiling_note: String,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            high_priority_threshold: 10.0,
            deadline_window_days: 7.0,
            length_weight: 0.8,
            high_priority_bonus: 1.5,
            deadline_bonus: 1.3,
            heavy_threshold: 25.0,
            busy_threshold: 15.0,
            focus_task_count: 3,
            focus_workload_threshold: 10.0,
            deadline_watch_count: 2,
            ceiling_note: "25 is considered impossible.".to_string(),
        }
    }
}

/// Aggregates a task list into a [`WorkloadSummary`].
///
/// Owns a [`PriorityScorer`] so per-task urgency and the aggregate view
/// stay consistent under one tuning.
#[derive(Debug, Clone, Default)]
pub struct WorkloadAnalyzer {
    scorer: PriorityScorer,
    config: WorkloadConfig,
}

impl WorkloadAnalyzer {
    /// Creates an analyzer with the stock tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workload configuration.
    pub fn with_config(mut self, config: WorkloadConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the priority scorer used for per-task classification.
    pub fn with_scorer(mut self, scorer: PriorityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Analyzes a task list into counts, a weighted workload score, and
    /// a status banner.
    pub fn analyze(&self, tasks: &[Task], context: &ScoringContext) -> WorkloadSummary {
        let cfg = &self.config;

        let total_tasks = tasks.len();
        let mut high_priority_tasks = 0usize;
        let mut upcoming_deadlines = 0usize;
        let mut total_workload = 0.0f64;

        for task in tasks {
            let high = self.scorer.score(task, context) > cfg.high_priority_threshold;
            let due_soon = task
                .days_until_deadline(context.now)
                .map(|d| d < cfg.deadline_window_days)
                .unwrap_or(false);

            if high {
                high_priority_tasks += 1;
            }
            if due_soon {
                upcoming_deadlines += 1;
            }

            let priority_bonus = if high { cfg.high_priority_bonus } else { 1.0 };
            let deadline_bonus = if due_soon { cfg.deadline_bonus } else { 1.0 };
            total_workload +=
                task.length as f64 * cfg.length_weight * priority_bonus * deadline_bonus;
        }

        let status = self.select_status(
            total_tasks,
            high_priority_tasks,
            upcoming_deadlines,
            total_workload,
        );

        debug!(
            total_tasks,
            high_priority_tasks,
            upcoming_deadlines,
            total_workload,
            status = ?status,
            "workload analyzed"
        );

        WorkloadSummary {
            total_tasks,
            high_priority_tasks,
            upcoming_deadlines,
            total_workload,
            status,
            message: status.message().to_string(),
            advice: status.advice().to_string(),
            workload: format!(
                "Your workload score is {}. {}",
                total_workload.round(),
                cfg.ceiling_note
            ),
        }
    }

    fn select_status(
        &self,
        total_tasks: usize,
        high_priority_tasks: usize,
        upcoming_deadlines: usize,
        total_workload: f64,
    ) -> WorkloadStatus {
        let cfg = &self.config;
        if total_tasks == 0 {
            WorkloadStatus::AllClear
        } else if total_workload > cfg.heavy_threshold {
            WorkloadStatus::Overloaded
        } else if total_workload > cfg.busy_threshold {
            WorkloadStatus::Busy
        } else if high_priority_tasks >= cfg.focus_task_count
            && total_workload > cfg.focus_workload_threshold
        {
            WorkloadStatus::FocusNeeded
        } else if upcoming_deadlines >= cfg.deadline_watch_count {
            WorkloadStatus::DeadlineWatch
        } else {
            WorkloadStatus::Balanced
        }
    }
}
