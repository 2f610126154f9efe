// src/graph/mod.rs
//! Simple undirected graphs and their multi-hop neighborhoods.
//!
//! Vertices keep the integer ids they were loaded with, but everything
//! downstream (distance sets, model variables, labels) works on dense
//! indices `0..n` assigned in ascending id order.

pub mod distance;
pub mod edgelist;

pub use distance::{Distance, DistanceMap};

use std::collections::{BTreeMap, BTreeSet};

/// An immutable simple undirected graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    ids: Vec<u64>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Builds a graph from an edge list. Vertices are the ids that appear
    /// in the edges.
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        Self::with_vertices(std::iter::empty(), edges)
    }

    /// Builds a graph from explicit vertices plus an edge list.
    ///
    /// Self-loops are dropped (their vertex is kept) and parallel edges
    /// collapse into one.
    #[must_use]
    pub fn with_vertices<V, I>(vertices: V, edges: I) -> Self
    where
        V: IntoIterator<Item = u64>,
        I: IntoIterator<Item = (u64, u64)>,
    {
        let mut ids: BTreeSet<u64> = vertices.into_iter().collect();
        let mut pairs: BTreeSet<(u64, u64)> = BTreeSet::new();

        for (u, v) in edges {
            ids.insert(u);
            ids.insert(v);
            if u != v {
                pairs.insert((u.min(v), u.max(v)));
            }
        }

        let ids: Vec<u64> = ids.into_iter().collect();
        let index: BTreeMap<u64, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut adjacency = vec![Vec::new(); ids.len()];
        for (u, v) in &pairs {
            if let (Some(&a), Some(&b)) = (index.get(u), index.get(v)) {
                adjacency[a].push(b);
                adjacency[b].push(a);
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }

        Self {
            ids,
            adjacency,
            edge_count: pairs.len(),
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Original id of the vertex at a dense index.
    #[must_use]
    pub fn id(&self, index: usize) -> Option<u64> {
        self.ids.get(index).copied()
    }

    /// Original ids in dense-index order (ascending).
    #[must_use]
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Dense index of an original id.
    #[must_use]
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    /// Sorted neighbor indices of a vertex. Empty for out-of-range indices.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn degree(&self, index: usize) -> usize {
        self.neighbors(index).len()
    }

    /// Maximum vertex degree (Δ), 0 for the empty graph.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Minimum vertex degree, 0 for the empty graph.
    #[must_use]
    pub fn min_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).min().unwrap_or(0)
    }

    /// Edge count over the number of possible edges; 0 below two vertices.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn density(&self) -> f64 {
        let n = self.vertex_count();
        if n < 2 {
            return 0.0;
        }
        (2.0 * self.edge_count as f64) / (n as f64 * (n - 1) as f64)
    }

    /// Iterates every edge once as `(i, j)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, list)| list.iter().filter(move |&&j| i < j).map(move |&j| (i, j)))
    }
}
