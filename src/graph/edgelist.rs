// src/graph/edgelist.rs
//! Whitespace-delimited edge-list loader.
//!
//! Each line holds two endpoint ids followed by optional edge data, which is
//! ignored. `#` starts a comment. Lines with fewer than two ids are skipped,
//! so every vertex of a loaded graph appears in some edge.

use super::Graph;
use crate::error::{LabelError, Result};
use std::fs;
use std::path::Path;

/// Reads and parses an edge-list file.
///
/// # Errors
/// Returns `Io` if the file cannot be read, `Parse` on a malformed line.
pub fn load(path: &Path) -> Result<Graph> {
    let content = fs::read_to_string(path).map_err(|e| LabelError::io(e, path))?;
    parse(&content, path)
}

/// Parses edge-list text. `origin` only labels error messages.
///
/// # Errors
/// Returns `Parse` with the 1-based line number of the first bad token.
pub fn parse(content: &str, origin: &Path) -> Result<Graph> {
    let mut edges = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = strip_comment(raw);
        let mut tokens = line.split_whitespace();
        let (Some(first), Some(second)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        edges.push((parse_id(first, origin, idx + 1)?, parse_id(second, origin, idx + 1)?));
    }

    Ok(Graph::from_edges(edges))
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(head, _)| head)
}

fn parse_id(token: &str, origin: &Path, line: usize) -> Result<u64> {
    token.parse::<u64>().map_err(|_| LabelError::Parse {
        path: origin.to_path_buf(),
        line,
        message: format!("expected a non-negative integer vertex id, found '{token}'"),
    })
}
