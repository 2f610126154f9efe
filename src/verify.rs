// src/verify.rs
//! Independent check that a labeling honours every distance gap.

use crate::graph::{Distance, DistanceMap};
use serde::Serialize;

/// A pair of vertices whose labels are closer than their distance allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapViolation {
    pub a: usize,
    pub b: usize,
    pub distance: usize,
    pub required: i64,
    pub actual: i64,
}

/// Lists every gap violation of `labels` (indexed by dense vertex index).
///
/// Pairs involving a vertex without a label count as violations with
/// `actual = -1`, as do negative labels.
#[must_use]
pub fn check(distances: &DistanceMap, labels: &[i64]) -> Vec<GapViolation> {
    let mut out = Vec::new();

    for d in Distance::ALL {
        for (a, b) in distances.pairs(d) {
            let (Some(&la), Some(&lb)) = (labels.get(a), labels.get(b)) else {
                out.push(GapViolation { a, b, distance: d.hops(), required: d.gap(), actual: -1 });
                continue;
            };
            if la < 0 || lb < 0 || (la - lb).abs() < d.gap() {
                out.push(GapViolation {
                    a,
                    b,
                    distance: d.hops(),
                    required: d.gap(),
                    actual: (la - lb).abs(),
                });
            }
        }
    }

    out
}

/// True when `labels` covers every vertex and satisfies all gaps.
#[must_use]
pub fn is_valid(distances: &DistanceMap, labels: &[i64]) -> bool {
    labels.len() == distances.vertex_count()
        && labels.iter().all(|&l| l >= 0)
        && check(distances, labels).is_empty()
}
