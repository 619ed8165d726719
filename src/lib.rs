//! Personal task prioritization and workload analysis.
//!
//! Provides the scoring core of a personal task tracker: a heuristic
//! per-task priority score and an aggregate workload summary that maps
//! effort thresholds to a human-readable status.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Project`, `ProjectCatalog`
//! - **`scoring`**: Per-task priority — `PriorityScorer`, `ScoringConfig`,
//!   `ScoringContext`, `PriorityBreakdown`
//! - **`workload`**: Aggregate analysis — `WorkloadAnalyzer`,
//!   `WorkloadSummary`, `WorkloadStatus`
//! - **`timefmt`**: Presentation helpers for timestamps
//! - **`validation`**: Input integrity checks (names, rating ranges,
//!   project references, temporal sanity)
//!
//! # Architecture
//!
//! Everything in this crate is a deterministic function of its inputs.
//! The current time is never read internally; callers carry it in a
//! [`scoring::ScoringContext`], so repeated calls with identical inputs
//! produce identical results. Tasks are owned by the caller and only
//! ever read here. Scoring and analysis never fail — malformed input is
//! surfaced separately by [`validation`], not by the scoring path.

pub mod models;
pub mod scoring;
pub mod timefmt;
pub mod validation;
pub mod workload;
