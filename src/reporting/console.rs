// src/reporting/console.rs
//! Terminal formatting for batch progress and labelings.

use crate::graph::{Distance, DistanceMap, Graph};
use crate::model::ModelStats;
use crate::types::{BatchSummary, InstanceOutcome, Labeling, LabelingResult, Status};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// One line per finished graph.
#[must_use]
pub fn format_progress(current: usize, total: usize, outcome: &InstanceOutcome) -> String {
    match outcome {
        InstanceOutcome::Solved(r) => format!(
            "[{current}/{total}] {} {}  lambda={}  {}  ({:.2} ms)",
            "[OK]".green(),
            r.graph,
            r.lambda,
            status_colored(r.status),
            r.time_ms
        ),
        InstanceOutcome::Failed { graph, error } => format!(
            "[{current}/{total}] {} {graph}: {}",
            "[XX]".red().bold(),
            error.red()
        ),
    }
}

fn status_colored(status: Status) -> ColoredString {
    match status {
        Status::Optimal => status.as_str().green().bold(),
        Status::BestFound => status.as_str().yellow().bold(),
        Status::Infeasible => status.as_str().red().bold(),
    }
}

/// Formats the final batch report.
#[must_use]
pub fn format_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "═".repeat(60));
    let _ = writeln!(out, "{}", "LABELING BATCH COMPLETE".bold());
    let _ = writeln!(out, "{}", "═".repeat(60));
    let _ = writeln!(out);
    let _ = writeln!(out, "  Graphs:      {}", summary.total);
    let _ = writeln!(out, "  Optimal:     {}", summary.optimal.to_string().green());
    let _ = writeln!(out, "  Best found:  {}", count_warn(summary.best_found));
    let _ = writeln!(out, "  Infeasible:  {}", count_warn(summary.infeasible));
    let _ = writeln!(out, "  Failed:      {}", count_err(summary.failed));
    let _ = writeln!(out);

    out
}

fn count_warn(count: usize) -> ColoredString {
    if count == 0 {
        count.to_string().green()
    } else {
        count.to_string().yellow()
    }
}

fn count_err(count: usize) -> ColoredString {
    if count == 0 {
        count.to_string().green()
    } else {
        count.to_string().red()
    }
}

/// Formats solved rows as JSON for machine consumption.
#[must_use]
pub fn format_json(outcomes: &[InstanceOutcome], summary: &BatchSummary) -> String {
    let results: Vec<&LabelingResult> = outcomes.iter().filter_map(InstanceOutcome::result).collect();
    let failures: Vec<_> = outcomes
        .iter()
        .filter_map(|o| match o {
            InstanceOutcome::Failed { graph, error } => {
                Some(serde_json::json!({ "graph": graph, "error": error }))
            }
            InstanceOutcome::Solved(_) => None,
        })
        .collect();

    let report = serde_json::json!({
        "summary": summary,
        "results": results,
        "failures": failures,
    });
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

/// Human-readable labeling of one graph.
#[must_use]
pub fn format_labeling(graph: &Graph, labeling: &Labeling) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  lambda={}  ({:.2} ms)",
        status_colored(labeling.status),
        labeling.span,
        labeling.wall_time.as_secs_f64() * 1000.0
    );
    if labeling.status.has_assignment() {
        let _ = writeln!(out, "{}", "vertex  label".dimmed());
        for (id, label) in graph.ids().iter().zip(&labeling.labels) {
            let _ = writeln!(out, "{id:>6}  {label:>5}");
        }
    }
    out
}

/// Graph statistics, distance classes and model size, without solving.
#[must_use]
pub fn format_inspect(name: &str, graph: &Graph, distances: &DistanceMap, stats: &ModelStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", name.bold().cyan());
    let _ = writeln!(out, "{}", "─".repeat(60));
    let _ = writeln!(out, "  Vertices:      {}", graph.vertex_count());
    let _ = writeln!(out, "  Edges:         {}", graph.edge_count());
    let _ = writeln!(out, "  Density:       {:.5}", graph.density());
    let _ = writeln!(out, "  Degree:        {}..{}", graph.min_degree(), graph.max_degree());
    for d in Distance::ALL {
        let _ = writeln!(
            out,
            "  d{} pairs:      {} (gap {})",
            d.hops(),
            distances.pair_count(d),
            d.gap()
        );
    }
    let _ = writeln!(out, "  Variables:     {} ({} indicators)", stats.variables, stats.indicators);
    let _ = writeln!(out, "  Constraints:   {}", stats.constraints);
    let _ = writeln!(out, "  Big-M:         {}", stats.big_m);
    out
}
