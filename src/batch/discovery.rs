// src/batch/discovery.rs
use crate::error::{LabelError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Lists edge-list files directly inside `dir` with the given extension,
/// sorted by file name.
///
/// # Errors
/// Returns `Io` if `dir` is missing or unreadable.
pub fn discover_graphs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LabelError::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "input directory not found"),
            dir,
        ));
    }

    let wanted = extension.trim_start_matches('.');
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .follow_links(true);

    for item in walker {
        match item {
            Ok(entry) if entry.file_type().is_file() => {
                let path = entry.into_path();
                if path.extension().is_some_and(|e| e == wanted) {
                    files.push(path);
                }
            }
            Ok(_) => {}
            Err(e) => warn!("skipping unreadable entry in {}: {e}", dir.display()),
        }
    }

    Ok(files)
}

/// File stem used as the graph name in reports.
#[must_use]
pub fn graph_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}
