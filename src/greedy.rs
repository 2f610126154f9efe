// src/greedy.rs
//! First-fit L(3,2,1) labeling.
//!
//! Always feasible, never better than optimal. Used as an upper bound when
//! tightening the model and as the fallback incumbent when the solver stops
//! without one.

use crate::graph::{Distance, DistanceMap};

/// Labels vertices in index order with the smallest compatible label.
#[must_use]
pub fn label(distances: &DistanceMap) -> Vec<i64> {
    let n = distances.vertex_count();
    let mut labels: Vec<Option<i64>> = vec![None; n];

    for v in 0..n {
        let mut candidate = 0;
        while conflicts(distances, &labels, v, candidate) {
            candidate += 1;
        }
        labels[v] = Some(candidate);
    }

    labels.into_iter().map(|l| l.unwrap_or(0)).collect()
}

/// Largest label of an assignment, 0 when empty.
#[must_use]
pub fn span(labels: &[i64]) -> i64 {
    labels.iter().copied().max().unwrap_or(0)
}

fn conflicts(distances: &DistanceMap, labels: &[Option<i64>], v: usize, candidate: i64) -> bool {
    Distance::ALL.into_iter().any(|d| {
        distances.at(v, d).iter().any(|&u| {
            labels
                .get(u)
                .copied()
                .flatten()
                .is_some_and(|l| (candidate - l).abs() < d.gap())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::verify;

    #[test]
    fn test_single_edge() {
        let g = Graph::from_edges([(0, 1)]);
        let map = DistanceMap::compute(&g);
        assert_eq!(label(&map), vec![0, 3]);
    }

    #[test]
    fn test_isolated_vertices_share_zero() {
        let g = Graph::with_vertices([1, 2, 3], []);
        let map = DistanceMap::compute(&g);
        assert_eq!(label(&map), vec![0, 0, 0]);
    }

    #[test]
    fn test_cycle_is_feasible() {
        let edges: Vec<(u64, u64)> = (0..11).map(|i| (i, (i + 1) % 11)).collect();
        let g = Graph::from_edges(edges);
        let map = DistanceMap::compute(&g);
        let labels = label(&map);
        assert!(verify::check(&map, &labels).is_empty());
        assert!(span(&labels) >= 8);
    }
}
