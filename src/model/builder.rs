// src/model/builder.rs
//! Big-M encoding of the L(3,2,1) labeling problem.
//!
//! `|x_i - x_j| >= k` is not convex, so each pair gets a binary `b` choosing
//! which side is enforced:
//!
//! ```text
//! x_i - x_j >= k - M(1 - b)      (stored as  x_i - x_j - M b >= k - M)
//! x_j - x_i >= k - M b           (stored as  x_j - x_i + M b >= k)
//! ```
//!
//! M must exceed every label difference plus `k`, so the inactive side never
//! cuts off a feasible labeling.

use super::{Model, VarKind, Variable};
use crate::graph::{Distance, DistanceMap, Graph};
use crate::greedy;
use tracing::debug;

/// Knobs for model construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Bound labels and span by the greedy span and raise M to match.
    pub tighten_bounds: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            tighten_bounds: true,
        }
    }
}

/// `Δ³ + 2Δ + 3`, the worst-case span bound used as the big-M constant.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn big_m(max_degree: usize) -> f64 {
    let d = max_degree as f64;
    d * d * d + 2.0 * d + 3.0
}

/// Builds the integer program for `graph`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build(graph: &Graph, distances: &DistanceMap, opts: &BuildOptions) -> Model {
    let mut m = big_m(graph.max_degree());

    let upper = if opts.tighten_bounds {
        let ub = greedy::span(&greedy::label(distances)) as f64;
        m = m.max(ub + Distance::One.gap() as f64);
        Some(ub)
    } else {
        None
    };

    let mut model = Model::new(upper);
    model.big_m = m;

    for v in 0..graph.vertex_count() {
        let name = format!("x_{}", graph.id(v).unwrap_or(v as u64));
        let x = model.add_variable(Variable {
            name,
            kind: VarKind::Integer,
            lower: 0.0,
            upper,
        });
        model.labels.push(x);
    }

    add_span_bounds(&mut model);
    for d in Distance::ALL {
        add_gap_constraints(&mut model, graph, distances, d);
    }

    debug!(
        vertices = graph.vertex_count(),
        variables = model.variables.len(),
        constraints = model.constraints.len(),
        big_m = m,
        "built labeling model"
    );
    model
}

fn add_span_bounds(model: &mut Model) {
    let z = model.span;
    for x in model.labels.clone() {
        model.add_constraint(vec![(z, 1.0), (x, -1.0)], 0.0);
    }
}

#[allow(clippy::cast_precision_loss)]
fn add_gap_constraints(model: &mut Model, graph: &Graph, distances: &DistanceMap, d: Distance) {
    let k = d.gap() as f64;
    let m = model.big_m;

    // `pairs` yields each unordered pair once, from its lower endpoint.
    for (i, j) in distances.pairs(d) {
        let (Some(&xi), Some(&xj)) = (model.labels.get(i), model.labels.get(j)) else {
            continue;
        };
        let b = model.add_variable(indicator(graph, i, j));
        model.add_constraint(vec![(xi, 1.0), (xj, -1.0), (b, -m)], k - m);
        model.add_constraint(vec![(xj, 1.0), (xi, -1.0), (b, m)], k);
    }
}

fn indicator(graph: &Graph, i: usize, j: usize) -> Variable {
    let id = |v: usize| graph.id(v).unwrap_or(v as u64);
    Variable {
        name: format!("b_{}_{}", id(i), id(j)),
        kind: VarKind::Binary,
        lower: 0.0,
        upper: Some(1.0),
    }
}

