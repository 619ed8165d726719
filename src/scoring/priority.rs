//! The priority scorer.
//!
//! # Algorithm
//!
//! For one task, the score is the sum of five components:
//!
//! | Component | Formula (defaults) |
//! |-----------|--------------------|
//! | base | importance × 2 − (length + difficulty) / 3 |
//! | age | min(weeks_old × 0.5, 2.0) |
//! | quick bonus | 1.5 when length ≤ 2 |
//! | easy bonus | 1.0 when difficulty ≤ 2 |
//! | deadline | piecewise ramp (see below), scaled by 1 + length/5 |
//!
//! The deadline ramp: overdue tasks get a flat 5.0; within 7 days the
//! factor climbs linearly to 4.0 as the deadline nears; within 30 days
//! it climbs to 2.0; beyond that it contributes nothing. Longer tasks
//! feel deadline pressure more acutely via the length scale.
//!
//! The total is rounded to one decimal place.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{PriorityScore, ScoringContext};
use crate::models::Task;

const DAYS_PER_WEEK: f64 = 7.0;

/// Tunable weights and thresholds for the priority formula.
///
/// `Default` carries the stock tuning. All fields are optional when
/// deserializing, so partial overrides work:
///
/// ```
/// use taskload::scoring::ScoringConfig;
///
/// let config: ScoringConfig = serde_json::from_str(r#"{"overdue_factor": 8.0}"#).unwrap();
/// assert_eq!(config.overdue_factor, 8.0);
/// assert_eq!(config.urgent_window_days, 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplier on the importance rating.
    pub importance_weight: f64,
    /// Divisor applied to length + difficulty in the base term.
    pub effort_divisor: f64,
    /// Score gained per week of task age.
    pub age_weekly_gain: f64,
    /// Ceiling on the age component (saturation).
    pub age_cap: f64,
    /// Length at or below which the quick bonus applies.
    pub quick_length_threshold: u8,
    /// Bonus for quick tasks.
    pub quick_bonus: f64,
    /// Difficulty at or below which the easy bonus applies.
    pub easy_difficulty_threshold: u8,
    /// Bonus for easy tasks.
    pub easy_bonus: f64,
    /// Flat deadline factor for overdue tasks, however overdue.
    pub overdue_factor: f64,
    /// Width of the urgent deadline window (days).
    pub urgent_window_days: f64,
    /// Deadline factor approached as an urgent deadline nears.
    pub urgent_max_factor: f64,
    /// Width of the approaching deadline window (days).
    pub near_window_days: f64,
    /// Deadline factor approached as a distant deadline nears.
    pub near_max_factor: f64,
    /// Divisor turning length into extra deadline pressure (1 + length/d).
    pub length_pressure_divisor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            importance_weight: 2.0,
            effort_divisor: 3.0,
            age_weekly_gain: 0.5,
            age_cap: 2.0,
            quick_length_threshold: 2,
            quick_bonus: 1.5,
            easy_difficulty_threshold: 2,
            easy_bonus: 1.0,
            overdue_factor: 5.0,
            urgent_window_days: 7.0,
            urgent_max_factor: 4.0,
            near_window_days: 30.0,
            near_max_factor: 2.0,
            length_pressure_divisor: 5.0,
        }
    }
}

/// Per-component view of one task's score.
///
/// `total` is the rounded sum of the other fields; the components
/// themselves are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriorityBreakdown {
    /// Importance minus effort term.
    pub base: f64,
    /// Age contribution (saturating).
    pub age_factor: f64,
    /// Quick-task bonus, 0 when not applicable.
    pub quick_bonus: f64,
    /// Easy-task bonus, 0 when not applicable.
    pub easy_bonus: f64,
    /// Deadline contribution, 0 without a deadline.
    pub deadline_factor: f64,
    /// Final score, rounded to one decimal place.
    pub total: PriorityScore,
}

/// Computes heuristic urgency scores for tasks.
///
/// Stateless apart from its configuration; evaluation is a pure
/// function of (task, context).
#[derive(Debug, Clone, Default)]
pub struct PriorityScorer {
    config: ScoringConfig,
}

impl PriorityScorer {
    /// Creates a scorer with the stock tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer with a custom tuning.
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores one task. Higher = more urgent, rounded to one decimal.
    pub fn score(&self, task: &Task, context: &ScoringContext) -> PriorityScore {
        self.breakdown(task, context).total
    }

    /// Renders the score with exactly one decimal digit (e.g. `"11.8"`).
    pub fn score_label(&self, task: &Task, context: &ScoringContext) -> String {
        format!("{:.1}", self.score(task, context))
    }

    /// Scores one task component by component.
    pub fn breakdown(&self, task: &Task, context: &ScoringContext) -> PriorityBreakdown {
        let cfg = &self.config;

        let base = task.importance as f64 * cfg.importance_weight
            - (task.length as f64 + task.difficulty as f64) / cfg.effort_divisor;
        let age_factor = self.age_factor(task, context);
        let quick_bonus = if task.length <= cfg.quick_length_threshold {
            cfg.quick_bonus
        } else {
            0.0
        };
        let easy_bonus = if task.difficulty <= cfg.easy_difficulty_threshold {
            cfg.easy_bonus
        } else {
            0.0
        };
        let deadline_factor = self.deadline_factor(task, context);

        let total = round_to_tenth(base + age_factor + quick_bonus + easy_bonus + deadline_factor);

        PriorityBreakdown {
            base,
            age_factor,
            quick_bonus,
            easy_bonus,
            deadline_factor,
            total,
        }
    }

    /// Sorts tasks most urgent first, returning indices into the slice.
    ///
    /// Ties break deterministically by task name.
    pub fn rank(&self, tasks: &[Task], context: &ScoringContext) -> Vec<usize> {
        if tasks.is_empty() {
            return Vec::new();
        }

        let scores: Vec<PriorityScore> =
            tasks.iter().map(|t| self.score(t, context)).collect();

        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(Ordering::Equal)
                .then_with(|| tasks[a].name.cmp(&tasks[b].name))
        });
        indices
    }

    /// Returns the index of the most urgent task.
    pub fn most_urgent(&self, tasks: &[Task], context: &ScoringContext) -> Option<usize> {
        self.rank(tasks, context).first().copied()
    }

    fn age_factor(&self, task: &Task, context: &ScoringContext) -> f64 {
        let weeks_old = task.age_days(context.now) / DAYS_PER_WEEK;
        (weeks_old * self.config.age_weekly_gain).min(self.config.age_cap)
    }

    fn deadline_factor(&self, task: &Task, context: &ScoringContext) -> f64 {
        let cfg = &self.config;
        let days_until = match task.days_until_deadline(context.now) {
            Some(d) => d,
            None => return 0.0,
        };

        let ramp = if days_until < 0.0 {
            // Flat: how overdue does not matter, only that it is.
            cfg.overdue_factor
        } else if days_until < cfg.urgent_window_days {
            cfg.urgent_max_factor * (1.0 - days_until / cfg.urgent_window_days)
        } else if days_until < cfg.near_window_days {
            cfg.near_max_factor * (1.0 - days_until / cfg.near_window_days)
        } else {
            return 0.0;
        };

        ramp * (1.0 + task.length as f64 / cfg.length_pressure_divisor)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn fresh_task(importance: u8, length: u8, difficulty: u8) -> Task {
        Task::new("t", base_time())
            .with_importance(importance)
            .with_length(length)
            .with_difficulty(difficulty)
    }

    #[test]
    fn test_fresh_quick_easy_task() {
        // 5*2 - (1+1)/3 + 1.5 + 1.0 = 11.8333… → 11.8
        let task = fresh_task(5, 1, 1);
        let ctx = ScoringContext::at_time(base_time());
        let scorer = PriorityScorer::new();

        assert_eq!(scorer.score(&task, &ctx), 11.8);
        assert_eq!(scorer.score_label(&task, &ctx), "11.8");
    }

    #[test]
    fn test_breakdown_components() {
        let task = fresh_task(5, 1, 1);
        let ctx = ScoringContext::at_time(base_time());
        let b = PriorityScorer::new().breakdown(&task, &ctx);

        assert!((b.base - (10.0 - 2.0 / 3.0)).abs() < 1e-10);
        assert!((b.age_factor - 0.0).abs() < 1e-10);
        assert!((b.quick_bonus - 1.5).abs() < 1e-10);
        assert!((b.easy_bonus - 1.0).abs() < 1e-10);
        assert!((b.deadline_factor - 0.0).abs() < 1e-10);
        assert_eq!(b.total, 11.8);
    }

    #[test]
    fn test_age_factor_saturates() {
        let scorer = PriorityScorer::new();

        // 4 weeks old reaches the cap; a far older task scores the same.
        let month_old = Task::new("t", base_time() - Duration::days(28));
        let ancient = Task::new("t", base_time() - Duration::days(1000));
        let ctx = ScoringContext::at_time(base_time());

        let b1 = scorer.breakdown(&month_old, &ctx);
        let b2 = scorer.breakdown(&ancient, &ctx);
        assert!((b1.age_factor - 2.0).abs() < 1e-10);
        assert!((b2.age_factor - 2.0).abs() < 1e-10);
        assert_eq!(b1.total, b2.total);
    }

    #[test]
    fn test_age_factor_ramps_weekly() {
        // One week old → 0.5.
        let task = Task::new("t", base_time() - Duration::days(7));
        let ctx = ScoringContext::at_time(base_time());
        let b = PriorityScorer::new().breakdown(&task, &ctx);
        assert!((b.age_factor - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_overdue_factor_is_flat() {
        let scorer = PriorityScorer::new();
        let ctx = ScoringContext::at_time(base_time());

        let barely = fresh_task(3, 5, 3).with_deadline(base_time() - Duration::days(1));
        let badly = fresh_task(3, 5, 3).with_deadline(base_time() - Duration::days(100));

        let b1 = scorer.breakdown(&barely, &ctx);
        let b2 = scorer.breakdown(&badly, &ctx);
        // 5.0 × (1 + 5/5) = 10.0, regardless of how overdue.
        assert!((b1.deadline_factor - 10.0).abs() < 1e-10);
        assert!((b2.deadline_factor - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_urgent_deadline_ramp() {
        // 3.5 days out → 4 × (1 − 3.5/7) = 2.0, scaled by (1 + 5/5) = 4.0.
        let task = fresh_task(3, 5, 3)
            .with_deadline(base_time() + Duration::days(3) + Duration::hours(12));
        let ctx = ScoringContext::at_time(base_time());

        let b = PriorityScorer::new().breakdown(&task, &ctx);
        assert!((b.deadline_factor - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_near_deadline_ramp() {
        // 15 days out → 2 × (1 − 15/30) = 1.0, scaled by (1 + 5/5) = 2.0.
        let task = fresh_task(3, 5, 3).with_deadline(base_time() + Duration::days(15));
        let ctx = ScoringContext::at_time(base_time());

        let b = PriorityScorer::new().breakdown(&task, &ctx);
        assert!((b.deadline_factor - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_distant_deadline_contributes_nothing() {
        let task = fresh_task(3, 3, 3).with_deadline(base_time() + Duration::days(45));
        let ctx = ScoringContext::at_time(base_time());

        let b = PriorityScorer::new().breakdown(&task, &ctx);
        assert!((b.deadline_factor - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_length_scales_deadline_pressure() {
        let ctx = ScoringContext::at_time(base_time());
        let scorer = PriorityScorer::new();
        let deadline = base_time() - Duration::days(1);

        let short = fresh_task(3, 1, 3).with_deadline(deadline);
        let long = fresh_task(3, 5, 3).with_deadline(deadline);

        let f_short = scorer.breakdown(&short, &ctx).deadline_factor;
        let f_long = scorer.breakdown(&long, &ctx).deadline_factor;
        assert!((f_short - 6.0).abs() < 1e-10); // 5 × (1 + 1/5)
        assert!((f_long - 10.0).abs() < 1e-10); // 5 × (1 + 5/5)
    }

    #[test]
    fn test_bonuses_at_thresholds() {
        let ctx = ScoringContext::at_time(base_time());
        let scorer = PriorityScorer::new();

        let at = scorer.breakdown(&fresh_task(3, 2, 2), &ctx);
        assert!((at.quick_bonus - 1.5).abs() < 1e-10);
        assert!((at.easy_bonus - 1.0).abs() < 1e-10);

        let above = scorer.breakdown(&fresh_task(3, 3, 3), &ctx);
        assert!((above.quick_bonus - 0.0).abs() < 1e-10);
        assert!((above.easy_bonus - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_label_always_one_decimal() {
        let ctx = ScoringContext::at_time(base_time());
        let scorer = PriorityScorer::new();

        // 3*2 - (3+3)/3 = 4.0 → "4.0"
        let label = scorer.score_label(&fresh_task(3, 3, 3), &ctx);
        assert_eq!(label, "4.0");

        for task in [fresh_task(1, 5, 5), fresh_task(5, 1, 1), fresh_task(4, 2, 3)] {
            let label = scorer.score_label(&task, &ctx);
            let decimals = label.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 1, "label {label} must have one decimal digit");
        }
    }

    #[test]
    fn test_rank_most_urgent_first() {
        let ctx = ScoringContext::at_time(base_time());
        let scorer = PriorityScorer::new();
        let tasks = vec![
            fresh_task(1, 5, 5), // low
            fresh_task(5, 1, 1), // high
            fresh_task(3, 3, 3), // medium
        ];

        let order = scorer.rank(&tasks, &ctx);
        assert_eq!(order, vec![1, 2, 0]);
        assert_eq!(scorer.most_urgent(&tasks, &ctx), Some(1));
    }

    #[test]
    fn test_rank_ties_break_by_name() {
        let ctx = ScoringContext::at_time(base_time());
        let scorer = PriorityScorer::new();
        let mut b = fresh_task(3, 3, 3);
        b.name = "B".into();
        let mut a = fresh_task(3, 3, 3);
        a.name = "A".into();

        let tasks = vec![b, a];
        assert_eq!(scorer.rank(&tasks, &ctx), vec![1, 0]);
    }

    #[test]
    fn test_rank_empty() {
        let ctx = ScoringContext::at_time(base_time());
        let scorer = PriorityScorer::new();
        assert!(scorer.rank(&[], &ctx).is_empty());
        assert!(scorer.most_urgent(&[], &ctx).is_none());
    }

    #[test]
    fn test_custom_config() {
        let config = ScoringConfig {
            quick_bonus: 3.0,
            ..Default::default()
        };
        let scorer = PriorityScorer::with_config(config);
        let ctx = ScoringContext::at_time(base_time());

        // 5*2 - 2/3 + 3.0 + 1.0 = 13.3333… → 13.3
        assert_eq!(scorer.score(&fresh_task(5, 1, 1), &ctx), 13.3);
    }
}
