// src/solve/highs_backend.rs
//! HiGHS backend for [`Solver`].

use super::{Solver, SolverOutcome, SolverStatus};
use crate::error::{LabelError, Result};
use crate::model::Model;
use highs::{Col, HighsModelStatus, RowProblem, Sense};
use std::time::Duration;

/// Runs models through the HiGHS branch-and-cut MIP solver.
#[derive(Debug, Clone, Default)]
pub struct HighsSolver {
    threads: Option<usize>,
}

impl HighsSolver {
    /// Creates the backend and checks that HiGHS can solve a trivial program.
    ///
    /// # Errors
    /// Returns `SolverUnavailable` if the probe solve fails.
    pub fn new() -> Result<Self> {
        let solver = Self::default();
        solver.probe()?;
        Ok(solver)
    }

    /// Limits the threads HiGHS may use per solve.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads.max(1));
        self
    }

    fn probe(&self) -> Result<()> {
        let mut pb = RowProblem::default();
        let x = pb.add_integer_column(1.0, 0.0..=1.0);
        pb.add_row(1.0.., [(x, 1.0)]);

        let mut model = pb.optimise(Sense::Minimise);
        model.make_quiet();
        let solved = model
            .try_solve()
            .map_err(|status| LabelError::SolverUnavailable(format!("HiGHS probe failed: {status:?}")))?;

        match solved.status() {
            HighsModelStatus::Optimal => Ok(()),
            other => Err(LabelError::SolverUnavailable(format!(
                "HiGHS probe returned {other:?}"
            ))),
        }
    }
}

impl Solver for HighsSolver {
    fn name(&self) -> &str {
        "highs"
    }

    fn solve(&self, model: &Model, time_limit: Duration) -> Result<SolverOutcome> {
        let mut pb = RowProblem::default();
        let span = model.span_var();

        let cols: Vec<Col> = model
            .variables()
            .iter()
            .enumerate()
            .map(|(idx, var)| {
                let cost = if idx == span.0 { 1.0 } else { 0.0 };
                match var.upper {
                    Some(upper) => pb.add_integer_column(cost, var.lower..=upper),
                    None => pb.add_integer_column(cost, var.lower..),
                }
            })
            .collect();

        for row in model.constraints() {
            let factors: Vec<(Col, f64)> = row
                .terms
                .iter()
                .filter_map(|(v, coef)| cols.get(v.0).map(|&c| (c, *coef)))
                .collect();
            pb.add_row(row.rhs.., factors);
        }

        let mut highs_model = pb.optimise(Sense::Minimise);
        highs_model.make_quiet();
        highs_model.set_option("time_limit", time_limit.as_secs_f64());
        if let Some(threads) = self.threads {
            highs_model.set_option("threads", i32::try_from(threads).unwrap_or(i32::MAX));
        }

        let solved = highs_model
            .try_solve()
            .map_err(|status| LabelError::Solver(format!("HiGHS returned {status:?}")))?;

        let status = match solved.status() {
            HighsModelStatus::Optimal | HighsModelStatus::ModelEmpty => SolverStatus::Optimal,
            HighsModelStatus::Infeasible => SolverStatus::Infeasible,
            HighsModelStatus::LoadError
            | HighsModelStatus::ModelError
            | HighsModelStatus::PresolveError
            | HighsModelStatus::SolveError
            | HighsModelStatus::PostsolveError => {
                return Err(LabelError::Solver(format!(
                    "HiGHS model status {:?}",
                    solved.status()
                )));
            }
            _ => SolverStatus::Stopped,
        };

        let values = solved.get_solution().columns().to_vec();
        Ok(SolverOutcome {
            status,
            values: (values.len() == cols.len()).then_some(values),
        })
    }
}
