//! Task model.
//!
//! A task is one unit of personal work: a label, three 1–5 effort
//! ratings, a project tag, and timestamps. It carries no behavior beyond
//! time arithmetic — priority lives in `scoring`, aggregation in
//! `workload`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::FALLBACK_PROJECT_ID;

/// Lowest allowed value for importance/length/difficulty ratings.
pub const RATING_MIN: u8 = 1;
/// Highest allowed value for importance/length/difficulty ratings.
pub const RATING_MAX: u8 = 5;

pub(crate) const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A single tracked task.
///
/// Ratings set through the builder are clamped into
/// [`RATING_MIN`]..=[`RATING_MAX`]; records constructed elsewhere (e.g.
/// deserialized) can be checked with [`crate::validation::validate_tasks`].
///
/// # Time Representation
/// All timestamps are UTC. Age and deadline distance are fractional
/// days, measured against a caller-supplied "now" — the model itself
/// never reads the clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Human-readable label. Expected non-empty.
    pub name: String,
    /// How much the task matters (1–5).
    pub importance: u8,
    /// How long the task takes (1–5).
    pub length: u8,
    /// How hard the task is (1–5).
    pub difficulty: u8,
    /// Project id, resolved against a `ProjectCatalog`.
    /// Unknown ids fall back to the catalog's "other" entry.
    pub project: String,
    /// Latest completion date. `None` = no deadline pressure.
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Creation timestamp, fixed for the task's lifetime.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with midpoint ratings and no deadline.
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            importance: 3,
            length: 3,
            difficulty: 3,
            project: FALLBACK_PROJECT_ID.to_string(),
            deadline: None,
            created_at,
        }
    }

    /// Sets the importance rating (clamped to 1–5).
    pub fn with_importance(mut self, importance: u8) -> Self {
        self.importance = importance.clamp(RATING_MIN, RATING_MAX);
        self
    }

    /// Sets the length rating (clamped to 1–5).
    pub fn with_length(mut self, length: u8) -> Self {
        self.length = length.clamp(RATING_MIN, RATING_MAX);
        self
    }

    /// Sets the difficulty rating (clamped to 1–5).
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty.clamp(RATING_MIN, RATING_MAX);
        self
    }

    /// Sets the project id.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Fractional days elapsed since creation, as seen from `now`.
    ///
    /// Negative when `created_at` lies in the future.
    pub fn age_days(&self, now: DateTime<Utc>) -> f64 {
        (now - self.created_at).num_milliseconds() as f64 / MILLIS_PER_DAY
    }

    /// Fractional days until the deadline, as seen from `now`.
    ///
    /// Negative = overdue. `None` when the task has no deadline.
    pub fn days_until_deadline(&self, now: DateTime<Utc>) -> Option<f64> {
        self.deadline
            .map(|d| (d - now).num_milliseconds() as f64 / MILLIS_PER_DAY)
    }

    /// Whether this task has a deadline.
    pub fn has_deadline(&self) -> bool {
        self.deadline.is_some()
    }
}
