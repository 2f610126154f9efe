// src/batch/runner.rs
//! Per-graph pipeline: load, model, solve, write.

use super::discovery::graph_name;
use crate::config::Config;
use crate::error::Result;
use crate::graph::{edgelist, DistanceMap, Graph};
use crate::model::{self, BuildOptions};
use crate::reporting::tables::{remove_stale, table_path, write_labeling, write_summary};
use crate::solve::{self, SolveOptions, Solver};
use crate::types::{Labeling, LabelingResult};
use std::path::Path;
use tracing::{debug, warn};

/// Labels an in-memory graph and summarizes the outcome.
///
/// # Errors
/// Returns the solver error, if any.
pub fn label_graph(
    name: &str,
    graph: &Graph,
    build: &BuildOptions,
    solver: &dyn Solver,
    opts: &SolveOptions,
) -> Result<(LabelingResult, Labeling)> {
    let distances = DistanceMap::compute(graph);
    let model = model::build(graph, &distances, build);
    let labeling = solve::solve(&model, &distances, solver, opts)?;
    Ok((summarize(name, graph, &labeling), labeling))
}

/// Runs one input file end to end and writes its tables.
///
/// The labeling table is only written for a feasible result; an older one
/// is removed otherwise. If the summary cannot be written the labeling is
/// removed as well.
///
/// # Errors
/// Returns parse, solver or I/O errors for this file.
pub fn process_file(path: &Path, config: &Config, solver: &dyn Solver) -> Result<LabelingResult> {
    let name = graph_name(path);
    let graph = edgelist::load(path)?;
    debug!(graph = %name, vertices = graph.vertex_count(), edges = graph.edge_count(), "loaded");

    let (result, labeling) = label_graph(
        &name,
        &graph,
        &config.build_options(),
        solver,
        &config.solve_options(),
    )?;

    let labeling_path = table_path(&config.labeling_dir, &name);
    if labeling.status.has_assignment() {
        write_labeling(&labeling_path, &graph, &labeling)?;
    } else {
        remove_stale(&labeling_path)?;
    }

    // A graph without a summary row leaves no labeling behind either.
    if let Err(e) = write_summary(&table_path(&config.summary_dir, &name), &result) {
        if let Err(cleanup) = remove_stale(&labeling_path) {
            warn!(graph = %name, "could not remove labeling after failed summary: {cleanup}");
        }
        return Err(e);
    }

    Ok(result)
}

/// Builds the summary row for a solved graph.
#[must_use]
pub fn summarize(name: &str, graph: &Graph, labeling: &Labeling) -> LabelingResult {
    LabelingResult {
        graph: name.to_string(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        density: graph.density(),
        max_degree: graph.max_degree(),
        min_degree: graph.min_degree(),
        time_ms: labeling.wall_time.as_secs_f64() * 1000.0,
        lambda: labeling.span,
        status: labeling.status,
    }
}
