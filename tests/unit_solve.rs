// tests/unit_solve.rs
//! Result interpretation against scripted solvers.

use l321_core::error::{LabelError, Result};
use l321_core::graph::{DistanceMap, Graph};
use l321_core::model::{self, BuildOptions, Model};
use l321_core::solve::{self, SolveOptions, Solver, SolverOutcome, SolverStatus};
use l321_core::types::{Status, NO_SPAN};
use std::time::Duration;

/// Returns a fixed outcome; label values are spread into a full vector.
struct Scripted {
    status: SolverStatus,
    labels: Option<Vec<f64>>,
}

impl Solver for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn solve(&self, model: &Model, _time_limit: Duration) -> Result<SolverOutcome> {
        let values = self.labels.as_ref().map(|labels| {
            let mut values = vec![0.0; model.variables().len()];
            for (x, v) in model.label_vars().iter().zip(labels) {
                values[x.0] = *v;
            }
            values
        });
        Ok(SolverOutcome {
            status: self.status,
            values,
        })
    }
}

struct Failing;

impl Solver for Failing {
    fn name(&self) -> &str {
        "failing"
    }

    fn solve(&self, _model: &Model, _time_limit: Duration) -> Result<SolverOutcome> {
        Err(LabelError::Solver("boom".to_string()))
    }
}

fn setup(graph: &Graph) -> (DistanceMap, Model) {
    let map = DistanceMap::compute(graph);
    let m = model::build(graph, &map, &BuildOptions::default());
    (map, m)
}

fn edge() -> Graph {
    Graph::from_edges([(0, 1)])
}

fn opts(greedy_fallback: bool) -> SolveOptions {
    SolveOptions {
        time_limit: Duration::from_secs(1),
        greedy_fallback,
    }
}

#[test]
fn test_optimal_is_reported_with_span_as_max_label() {
    let (map, m) = setup(&edge());
    let solver = Scripted {
        status: SolverStatus::Optimal,
        labels: Some(vec![3.0, 0.0]),
    };
    let labeling = solve::solve(&m, &map, &solver, &opts(true)).unwrap();
    assert_eq!(labeling.status, Status::Optimal);
    assert_eq!(labeling.labels, vec![3, 0]);
    assert_eq!(labeling.span, 3);
}

#[test]
fn test_near_integer_values_are_rounded() {
    let (map, m) = setup(&edge());
    let solver = Scripted {
        status: SolverStatus::Optimal,
        labels: Some(vec![-1e-9, 2.999_999_9]),
    };
    let labeling = solve::solve(&m, &map, &solver, &opts(true)).unwrap();
    assert_eq!(labeling.labels, vec![0, 3]);
}

#[test]
fn test_optimal_violating_gap_is_an_error() {
    let (map, m) = setup(&edge());
    let solver = Scripted {
        status: SolverStatus::Optimal,
        labels: Some(vec![0.0, 1.0]),
    };
    let err = solve::solve(&m, &map, &solver, &opts(true)).unwrap_err();
    assert!(matches!(err, LabelError::InvalidAssignment { violations: 1 }));
}

#[test]
fn test_optimal_without_values_is_an_error() {
    let (map, m) = setup(&edge());
    let solver = Scripted {
        status: SolverStatus::Optimal,
        labels: None,
    };
    assert!(solve::solve(&m, &map, &solver, &opts(true)).is_err());
}

#[test]
fn test_stopped_with_incumbent_is_best_found() {
    let (map, m) = setup(&edge());
    let solver = Scripted {
        status: SolverStatus::Stopped,
        labels: Some(vec![0.0, 3.0]),
    };
    let labeling = solve::solve(&m, &map, &solver, &opts(false)).unwrap();
    assert_eq!(labeling.status, Status::BestFound);
    assert_eq!(labeling.labels, vec![0, 3]);
    assert_eq!(labeling.span, 3);
}

#[test]
fn test_stopped_keeps_better_of_incumbent_and_greedy() {
    let (map, m) = setup(&edge());
    let solver = Scripted {
        status: SolverStatus::Stopped,
        labels: Some(vec![7.0, 0.0]),
    };
    let labeling = solve::solve(&m, &map, &solver, &opts(true)).unwrap();
    assert_eq!(labeling.status, Status::BestFound);
    assert_eq!(labeling.span, 3);
}

#[test]
fn test_stopped_without_incumbent_falls_back_to_greedy() {
    let (map, m) = setup(&edge());
    let solver = Scripted {
        status: SolverStatus::Stopped,
        labels: None,
    };
    let labeling = solve::solve(&m, &map, &solver, &opts(true)).unwrap();
    assert_eq!(labeling.status, Status::BestFound);
    assert_eq!(labeling.labels, vec![0, 3]);
}

#[test]
fn test_stopped_with_invalid_incumbent_and_no_fallback_is_infeasible() {
    let (map, m) = setup(&edge());
    let solver = Scripted {
        status: SolverStatus::Stopped,
        labels: Some(vec![0.0, 0.0]),
    };
    let labeling = solve::solve(&m, &map, &solver, &opts(false)).unwrap();
    assert_eq!(labeling.status, Status::Infeasible);
    assert_eq!(labeling.span, NO_SPAN);
    assert!(labeling.labels.is_empty());
}

#[test]
fn test_infeasible_is_not_an_error() {
    let (map, m) = setup(&edge());
    let solver = Scripted {
        status: SolverStatus::Infeasible,
        labels: None,
    };
    let labeling = solve::solve(&m, &map, &solver, &opts(true)).unwrap();
    assert_eq!(labeling.status, Status::Infeasible);
    assert_eq!(labeling.span, -1);
}

#[test]
fn test_empty_graph_skips_solver() {
    let (map, m) = setup(&Graph::from_edges([]));
    let labeling = solve::solve(&m, &map, &Failing, &opts(true)).unwrap();
    assert_eq!(labeling.status, Status::Optimal);
    assert_eq!(labeling.span, 0);
}

#[test]
fn test_solver_error_propagates() {
    let (map, m) = setup(&edge());
    let err = solve::solve(&m, &map, &Failing, &opts(true)).unwrap_err();
    assert!(matches!(err, LabelError::Solver(_)));
}

#[test]
fn test_status_strings() {
    assert_eq!(Status::Optimal.to_string(), "OPTIMAL");
    assert_eq!(Status::BestFound.to_string(), "BEST_FOUND");
    assert_eq!(Status::Infeasible.to_string(), "INFEASIBLE");
    assert!(!Status::Infeasible.has_assignment());
}
