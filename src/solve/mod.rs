// src/solve/mod.rs
//! Solver invocation and result interpretation.
//!
//! The MIP engine sits behind [`Solver`]. Whatever it returns is mapped onto
//! the tri-state [`Status`]: a proven optimum, a feasible incumbent that was
//! not proven optimal, or nothing at all. Every assignment is re-checked
//! against the distance gaps before it leaves this module.

pub mod highs_backend;

pub use highs_backend::HighsSolver;

use crate::error::{LabelError, Result};
use crate::graph::DistanceMap;
use crate::greedy;
use crate::model::Model;
use crate::types::{Labeling, Status};
use crate::verify;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default per-instance time budget (15 minutes).
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(15 * 60);

/// What the backend reports, before interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// Optimality was certified.
    Optimal,
    /// Stopped early (time or iteration limit); may carry an incumbent.
    Stopped,
    /// The backend proved there is no feasible point.
    Infeasible,
}

/// Raw backend result. `values` is indexed by `VarId`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome {
    pub status: SolverStatus,
    pub values: Option<Vec<f64>>,
}

/// A mixed-integer programming engine.
pub trait Solver: Sync {
    fn name(&self) -> &str;

    /// Minimizes `model` within `time_limit`.
    ///
    /// # Errors
    /// Returns `Solver` if the backend fails while loading or solving.
    fn solve(&self, model: &Model, time_limit: Duration) -> Result<SolverOutcome>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    pub time_limit: Duration,
    /// Use the greedy labeling when the solver stops without an incumbent.
    pub greedy_fallback: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            greedy_fallback: true,
        }
    }
}

/// Solves `model` and interprets the outcome.
///
/// # Errors
/// Returns the backend error, or `InvalidAssignment` when a certified
/// optimum breaks a gap constraint.
pub fn solve(
    model: &Model,
    distances: &DistanceMap,
    solver: &dyn Solver,
    opts: &SolveOptions,
) -> Result<Labeling> {
    if model.label_vars().is_empty() {
        return Ok(Labeling::feasible(Status::Optimal, Vec::new(), Duration::ZERO));
    }

    let start = Instant::now();
    let outcome = solver.solve(model, opts.time_limit)?;
    let wall_time = start.elapsed();

    debug!(solver = solver.name(), status = ?outcome.status, ?wall_time, "solver returned");

    let incumbent = outcome
        .values
        .as_deref()
        .and_then(|values| extract_labels(model, values));

    match outcome.status {
        SolverStatus::Optimal => {
            let labels = incumbent.ok_or_else(|| {
                LabelError::Solver("optimal status without a solution vector".to_string())
            })?;
            let violations = verify::check(distances, &labels);
            if !violations.is_empty() {
                return Err(LabelError::InvalidAssignment {
                    violations: violations.len(),
                });
            }
            Ok(Labeling::feasible(Status::Optimal, labels, wall_time))
        }
        SolverStatus::Stopped => {
            let incumbent = incumbent.filter(|labels| verify::is_valid(distances, labels));
            let fallback = opts
                .greedy_fallback
                .then(|| greedy::label(distances))
                .filter(|labels| verify::is_valid(distances, labels));
            Ok(best_of(incumbent, fallback).map_or_else(
                || Labeling::infeasible(wall_time),
                |labels| Labeling::feasible(Status::BestFound, labels, wall_time),
            ))
        }
        SolverStatus::Infeasible => {
            warn!(solver = solver.name(), "solver reported the labeling model infeasible");
            Ok(Labeling::infeasible(wall_time))
        }
    }
}

/// Reads label variables out of a solution vector, rounding to integers.
#[allow(clippy::cast_possible_truncation)]
fn extract_labels(model: &Model, values: &[f64]) -> Option<Vec<i64>> {
    model
        .label_vars()
        .iter()
        .map(|v| {
            let value = *values.get(v.0)?;
            if !value.is_finite() || value < -0.5 {
                return None;
            }
            Some(value.round() as i64)
        })
        .collect()
}

fn best_of(a: Option<Vec<i64>>, b: Option<Vec<i64>>) -> Option<Vec<i64>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if greedy::span(&b) < greedy::span(&a) { b } else { a }),
        (a, b) => a.or(b),
    }
}
