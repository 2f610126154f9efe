// src/types.rs
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Outcome of one labeling solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The solver proved the span minimal.
    Optimal,
    /// A feasible labeling exists but optimality was not proven.
    BestFound,
    /// No feasible labeling was obtained.
    Infeasible,
}

impl Status {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "OPTIMAL",
            Self::BestFound => "BEST_FOUND",
            Self::Infeasible => "INFEASIBLE",
        }
    }

    /// True when a per-vertex assignment accompanies this status.
    #[must_use]
    pub fn has_assignment(self) -> bool {
        !matches!(self, Self::Infeasible)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Span reported when no labeling exists.
pub const NO_SPAN: i64 = -1;

/// Labels for one graph, indexed by dense vertex index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeling {
    pub status: Status,
    /// Empty unless `status.has_assignment()`.
    pub labels: Vec<i64>,
    /// Max label, or `NO_SPAN`.
    pub span: i64,
    pub wall_time: Duration,
}

impl Labeling {
    #[must_use]
    pub fn infeasible(wall_time: Duration) -> Self {
        Self {
            status: Status::Infeasible,
            labels: Vec::new(),
            span: NO_SPAN,
            wall_time,
        }
    }

    /// Builds a feasible labeling; the span is the largest label.
    #[must_use]
    pub fn feasible(status: Status, labels: Vec<i64>, wall_time: Duration) -> Self {
        let span = labels.iter().copied().max().unwrap_or(0);
        Self {
            status,
            labels,
            span,
            wall_time,
        }
    }
}

/// One row of the per-graph summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelingResult {
    pub graph: String,
    pub vertices: usize,
    pub edges: usize,
    pub density: f64,
    pub max_degree: usize,
    pub min_degree: usize,
    pub time_ms: f64,
    pub lambda: i64,
    pub status: Status,
}

/// Outcome of one input file within a batch.
#[derive(Debug)]
pub enum InstanceOutcome {
    Solved(LabelingResult),
    Failed { graph: String, error: String },
}

impl InstanceOutcome {
    #[must_use]
    pub fn graph(&self) -> &str {
        match self {
            Self::Solved(r) => &r.graph,
            Self::Failed { graph, .. } => graph,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&LabelingResult> {
        match self {
            Self::Solved(r) => Some(r),
            Self::Failed { .. } => None,
        }
    }
}

/// Totals across a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub optimal: usize,
    pub best_found: usize,
    pub infeasible: usize,
    pub failed: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn from_outcomes(outcomes: &[InstanceOutcome]) -> Self {
        let mut s = Self {
            total: outcomes.len(),
            ..Self::default()
        };
        for o in outcomes {
            match o {
                InstanceOutcome::Solved(r) => match r.status {
                    Status::Optimal => s.optimal += 1,
                    Status::BestFound => s.best_found += 1,
                    Status::Infeasible => s.infeasible += 1,
                },
                InstanceOutcome::Failed { .. } => s.failed += 1,
            }
        }
        s
    }
}
