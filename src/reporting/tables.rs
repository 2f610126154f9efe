// src/reporting/tables.rs
//! CSV outputs: per-graph labeling and per-graph summary.
//!
//! Files are written to a temporary file in the destination directory and
//! renamed into place, so a failed instance never leaves a partial table.

use crate::error::{LabelError, Result};
use crate::graph::Graph;
use crate::types::{Labeling, LabelingResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const SUMMARY_HEADER: [&str; 9] = [
    "graph",
    "#vertices",
    "#edges",
    "density",
    "max_degree",
    "min_degree",
    "time(ms)",
    "lambda",
    "status",
];

pub const LABELING_HEADER: [&str; 2] = ["vertex", "label"];

/// Writes `vertex,label` rows in ascending vertex id order.
///
/// # Errors
/// Returns error if the labeling has no assignment or the write fails.
pub fn write_labeling(path: &Path, graph: &Graph, labeling: &Labeling) -> Result<()> {
    if !labeling.status.has_assignment() || labeling.labels.len() != graph.vertex_count() {
        return Err(LabelError::Solver(format!(
            "refusing to write {}: no complete assignment",
            path.display()
        )));
    }
    write_atomically(path, |out| {
        let mut w = csv::Writer::from_writer(out);
        w.write_record(LABELING_HEADER)?;
        for (id, label) in graph.ids().iter().zip(&labeling.labels) {
            w.write_record([id.to_string(), label.to_string()])?;
        }
        w.flush()?;
        Ok(())
    })
}

/// Writes the one-row summary table of a graph.
///
/// # Errors
/// Returns error if the write fails.
pub fn write_summary(path: &Path, result: &LabelingResult) -> Result<()> {
    write_atomically(path, |out| {
        let mut w = csv::Writer::from_writer(out);
        w.write_record(SUMMARY_HEADER)?;
        w.write_record(summary_record(result))?;
        w.flush()?;
        Ok(())
    })
}

/// Formats a result the way the summary table stores it.
#[must_use]
pub fn summary_record(r: &LabelingResult) -> [String; 9] {
    [
        r.graph.clone(),
        r.vertices.to_string(),
        r.edges.to_string(),
        format!("{:.5}", r.density),
        r.max_degree.to_string(),
        r.min_degree.to_string(),
        format!("{:.2}", r.time_ms),
        r.lambda.to_string(),
        r.status.to_string(),
    ]
}

/// Deletes a labeling left behind by an earlier run.
///
/// # Errors
/// Returns error if the file exists but cannot be removed.
pub fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LabelError::io(e, path)),
    }
}

/// `<dir>/<stem>.csv`
#[must_use]
pub fn table_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.csv"))
}

fn write_atomically<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> Result<()>,
{
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| LabelError::io(e, dir))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| LabelError::io(e, dir))?;
    fill(&mut tmp)?;
    tmp.as_file_mut().flush().map_err(|e| LabelError::io(e, path))?;
    tmp.persist(path).map_err(|e| LabelError::io(e.error, path))?;
    Ok(())
}
