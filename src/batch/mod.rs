// src/batch/mod.rs
//! Batch labeling of a directory of edge-list files.
//!
//! # Architecture
//!
//! - `discovery`: Finds input files
//! - `runner`: Runs one graph through load → model → solve → tables
//!
//! One graph failing (bad input, solver error, write error) is recorded and
//! the batch moves on. With more than one worker, graphs are solved on a
//! rayon pool; each worker builds and owns its model.

pub mod discovery;
pub mod runner;

pub use discovery::{discover_graphs, graph_name};
pub use runner::{label_graph, process_file, summarize};

use crate::config::Config;
use crate::error::{LabelError, Result};
use crate::solve::Solver;
use crate::types::{BatchSummary, InstanceOutcome};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, warn};

/// Result of a batch run.
#[derive(Debug)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub outcomes: Vec<InstanceOutcome>,
}

/// Labels every graph in `config.input_dir`.
///
/// `on_progress` is called once per finished graph with
/// `(finished, total, outcome)`.
///
/// # Errors
/// Returns error if the input directory cannot be listed or the worker pool
/// cannot be created. Per-graph failures are reported in the outcomes.
pub fn run(
    config: &Config,
    solver: &dyn Solver,
    on_progress: impl Fn(usize, usize, &InstanceOutcome) + Sync,
) -> Result<BatchReport> {
    let files = discover_graphs(&config.input_dir, &config.extension)?;
    let total = files.len();
    info!(total, dir = %config.input_dir.display(), "starting batch");

    let finished = AtomicUsize::new(0);
    let run_one = |path: &PathBuf| {
        let outcome = run_instance(path, config, solver);
        let current = finished.fetch_add(1, Ordering::SeqCst) + 1;
        on_progress(current, total, &outcome);
        outcome
    };

    let outcomes: Vec<InstanceOutcome> = if config.workers > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()
            .map_err(|e| LabelError::Config(format!("cannot start worker pool: {e}")))?;
        pool.install(|| files.par_iter().map(run_one).collect())
    } else {
        files.iter().map(run_one).collect()
    };

    let summary = BatchSummary::from_outcomes(&outcomes);
    Ok(BatchReport { summary, outcomes })
}

fn run_instance(path: &Path, config: &Config, solver: &dyn Solver) -> InstanceOutcome {
    match process_file(path, config, solver) {
        Ok(result) => InstanceOutcome::Solved(result),
        Err(e) => {
            warn!(file = %path.display(), "labeling failed: {e}");
            InstanceOutcome::Failed {
                graph: graph_name(path),
                error: e.to_string(),
            }
        }
    }
}
