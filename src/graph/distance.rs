// src/graph/distance.rs
//! Exact distance-1/2/3 neighborhoods by bounded neighbor expansion.

use super::Graph;
use std::collections::BTreeSet;

/// A shortest-path distance class that carries a labeling gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    One,
    Two,
    Three,
}

impl Distance {
    /// All classes, nearest first.
    pub const ALL: [Distance; 3] = [Distance::One, Distance::Two, Distance::Three];

    /// Minimum label difference between two vertices at this distance.
    #[must_use]
    pub const fn gap(self) -> i64 {
        match self {
            Self::One => 3,
            Self::Two => 2,
            Self::Three => 1,
        }
    }

    #[must_use]
    pub const fn hops(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    const fn slot(self) -> usize {
        self.hops() - 1
    }
}

/// Per-vertex sets of vertices at exact distance 1, 2 and 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    sets: Vec<[BTreeSet<usize>; 3]>,
}

impl DistanceMap {
    /// Computes the three neighborhoods of every vertex.
    #[must_use]
    pub fn compute(graph: &Graph) -> Self {
        let sets = (0..graph.vertex_count())
            .map(|v| neighborhoods_of(graph, v))
            .collect();
        Self { sets }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.sets.len()
    }

    /// Vertices at exactly `distance` from `vertex`. Empty for unknown vertices.
    #[must_use]
    pub fn at(&self, vertex: usize, distance: Distance) -> &BTreeSet<usize> {
        static EMPTY: BTreeSet<usize> = BTreeSet::new();
        self.sets
            .get(vertex)
            .map_or(&EMPTY, |s| &s[distance.slot()])
    }

    /// Distance class between two vertices, if they are within three hops.
    #[must_use]
    pub fn classify(&self, a: usize, b: usize) -> Option<Distance> {
        Distance::ALL
            .into_iter()
            .find(|&d| self.at(a, d).contains(&b))
    }

    /// Every unordered pair `(i, j)` with `i < j` at exactly `distance`,
    /// in ascending order.
    pub fn pairs(&self, distance: Distance) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sets.iter().enumerate().flat_map(move |(i, s)| {
            s[distance.slot()]
                .iter()
                .filter(move |&&j| i < j)
                .map(move |&j| (i, j))
        })
    }

    #[must_use]
    pub fn pair_count(&self, distance: Distance) -> usize {
        self.pairs(distance).count()
    }
}

fn neighborhoods_of(graph: &Graph, v: usize) -> [BTreeSet<usize>; 3] {
    let d1: BTreeSet<usize> = graph.neighbors(v).iter().copied().collect();

    let mut d2 = BTreeSet::new();
    for &u in graph.neighbors(v) {
        for &w in graph.neighbors(u) {
            if w != v && !d1.contains(&w) {
                d2.insert(w);
            }
        }
    }

    let mut d3 = BTreeSet::new();
    for &u in graph.neighbors(v) {
        for &w in graph.neighbors(u) {
            for &z in graph.neighbors(w) {
                if z != v && z != u && !d1.contains(&z) && !d2.contains(&z) {
                    d3.insert(z);
                }
            }
        }
    }

    [d1, d2, d3]
}
