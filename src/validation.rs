//! Input validation for task lists.
//!
//! Checks structural integrity of tasks against a project catalog
//! before scoring. Detects:
//! - Empty task names
//! - Ratings outside the 1–5 range
//! - Project ids missing from the catalog
//! - Deadlines earlier than the creation timestamp
//!
//! Validation is advisory: the scoring path never fails on bad input
//! (unknown projects fall back, out-of-range ratings still produce a
//! number), so callers decide whether to reject or repair.

use thiserror::Error;
use tracing::debug;

use crate::models::{ProjectCatalog, Task, RATING_MAX, RATING_MIN};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A task has an empty (or whitespace-only) name.
    EmptyName,
    /// An importance/length/difficulty rating lies outside 1–5.
    RatingOutOfRange,
    /// A task references a project id the catalog cannot resolve.
    UnknownProject,
    /// A deadline precedes the task's creation time.
    DeadlineBeforeCreation,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task list against a project catalog.
///
/// Checks every task and collects all problems rather than stopping at
/// the first one.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task], catalog: &ProjectCatalog) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, task) in tasks.iter().enumerate() {
        let label = if task.name.trim().is_empty() {
            format!("#{index}")
        } else {
            task.name.clone()
        };

        if task.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Task #{index} has an empty name"),
            ));
        }

        for (field, value) in [
            ("importance", task.importance),
            ("length", task.length),
            ("difficulty", task.difficulty),
        ] {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RatingOutOfRange,
                    format!(
                        "Task '{label}' has {field}={value}, expected {RATING_MIN}..={RATING_MAX}"
                    ),
                ));
            }
        }

        if !catalog.contains(&task.project) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProject,
                format!(
                    "Task '{label}' references unknown project '{}'",
                    task.project
                ),
            ));
        }

        if let Some(deadline) = task.deadline {
            if deadline < task.created_at {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DeadlineBeforeCreation,
                    format!("Task '{label}' has a deadline earlier than its creation time"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        debug!(error_count = errors.len(), "task validation failed");
        Err(errors)
    }
}
