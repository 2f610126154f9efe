// src/model/mod.rs
//! Solver-independent integer program.
//!
//! A `Model` is a list of bounded integer/binary variables, a list of
//! `sum(coef * var) >= rhs` rows and a single variable to minimize. Solver
//! backends translate it into their own problem format.

pub mod builder;

pub use builder::{build, big_m, BuildOptions};

use serde::Serialize;

/// Index of a variable inside its `Model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VarId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VarKind {
    Integer,
    Binary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,
    pub kind: VarKind,
    pub lower: f64,
    /// `None` means unbounded above.
    pub upper: Option<f64>,
}

/// `sum(coef * var) >= rhs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraint {
    pub terms: Vec<(VarId, f64)>,
    pub rhs: f64,
}

impl Constraint {
    /// Evaluates the row against a full assignment.
    #[must_use]
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs: f64 = self
            .terms
            .iter()
            .map(|(v, c)| c * values.get(v.0).copied().unwrap_or(0.0))
            .sum();
        lhs + tolerance >= self.rhs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    pub(crate) variables: Vec<Variable>,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) labels: Vec<VarId>,
    pub(crate) span: VarId,
    pub(crate) big_m: f64,
}

impl Model {
    /// Creates a model holding only the span variable.
    pub(crate) fn new(span_upper: Option<f64>) -> Self {
        let span_var = Variable {
            name: "z".to_string(),
            kind: VarKind::Integer,
            lower: 0.0,
            upper: span_upper,
        };
        Self {
            variables: vec![span_var],
            constraints: Vec::new(),
            labels: Vec::new(),
            span: VarId(0),
            big_m: 0.0,
        }
    }

    pub(crate) fn add_variable(&mut self, variable: Variable) -> VarId {
        self.variables.push(variable);
        VarId(self.variables.len() - 1)
    }

    pub(crate) fn add_constraint(&mut self, terms: Vec<(VarId, f64)>, rhs: f64) {
        self.constraints.push(Constraint { terms, rhs });
    }

    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Label variables in dense vertex order.
    #[must_use]
    pub fn label_vars(&self) -> &[VarId] {
        &self.labels
    }

    /// The variable being minimized.
    #[must_use]
    pub fn span_var(&self) -> VarId {
        self.span
    }

    #[must_use]
    pub fn big_m(&self) -> f64 {
        self.big_m
    }

    #[must_use]
    pub fn variable(&self, id: VarId) -> Option<&Variable> {
        self.variables.get(id.0)
    }

    /// Number of disjunction indicators.
    #[must_use]
    pub fn indicator_count(&self) -> usize {
        self.variables
            .iter()
            .filter(|v| v.kind == VarKind::Binary)
            .count()
    }

    #[must_use]
    pub fn stats(&self) -> ModelStats {
        ModelStats {
            variables: self.variables.len(),
            labels: self.labels.len(),
            indicators: self.indicator_count(),
            constraints: self.constraints.len(),
            big_m: self.big_m,
        }
    }
}

/// Size summary used by `inspect` and debug logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelStats {
    pub variables: usize,
    pub labels: usize,
    pub indicators: usize,
    pub constraints: usize,
    pub big_m: f64,
}
