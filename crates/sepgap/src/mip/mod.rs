//! Mathematical-programming engine: the model/solver contract consumed by the
//! separation oracle and the covering solver, plus a built-in dense backend.
//!
//! Purpose
//! - `Solver` is an explicit session: callers receive it by reference and ask
//!   it for a fresh `Model` per solve. Models are owned values, so they are
//!   released on every exit path (convergence, `?` errors) by going out of scope.
//! - `Model` covers what the gap computations need: continuous and bounded
//!   integer variables, named linear rows, a minimisation objective, primal
//!   values, row duals (shadow prices) and the runtime of the last solve.
//!
//! Backend
//! - `DenseSolver` runs a two-phase primal simplex on a dense `nalgebra`
//!   tableau (Bland's rule) and depth-first branch-and-bound for integer
//!   variables. Pivot and node limits are explicit (`MipCfg`).
//!
//! Code cross-refs: `separation::solve_graphic_tsp`, `covering::solve_covering`.

pub mod cfg;
mod branch;
mod dense;
mod simplex;

use std::time::Duration;

pub use cfg::MipCfg;
pub use dense::{DenseModel, DenseSolver};

/// Handle of a variable inside one model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VarId(pub usize);

/// Handle of a constraint inside one model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConstrId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarKind {
    Continuous,
    Integer,
}

/// Row sense: `expr <= rhs`, `expr >= rhs` or `expr == rhs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    Le,
    Ge,
    Eq,
}

/// Sparse linear expression `Σ coef·var` (repeated variables add up).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinExpr {
    pub terms: Vec<(VarId, f64)>,
}

impl LinExpr {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, var: VarId, coef: f64) {
        self.terms.push((var, coef));
    }

    pub fn with(mut self, var: VarId, coef: f64) -> Self {
        self.push(var, coef);
        self
    }
}

impl FromIterator<(VarId, f64)> for LinExpr {
    fn from_iter<I: IntoIterator<Item = (VarId, f64)>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

/// Engine failures. None of them is retried by the callers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MipError {
    #[error("model {model:?} is infeasible")]
    Infeasible { model: String },
    #[error("model {model:?} is unbounded")]
    Unbounded { model: String },
    #[error("simplex exceeded {pivots} pivots")]
    PivotLimit { pivots: usize },
    #[error("branch-and-bound exceeded {nodes} nodes")]
    NodeLimit { nodes: usize },
    #[error("variable {var:?} needs a finite lower bound")]
    UnsupportedBound { var: String },
    #[error("model has no solution to read (optimize first)")]
    NotSolved,
}

/// One optimisation model (minimisation).
///
/// Reads (`value`, `dual`, `objective_value`) refer to the last successful
/// `optimize`; adding variables or rows discards that solution.
pub trait Model {
    fn add_var(&mut self, name: &str, kind: VarKind, lb: f64, ub: f64) -> VarId;
    fn add_constr(&mut self, name: &str, expr: LinExpr, sense: Sense, rhs: f64) -> ConstrId;
    fn set_objective(&mut self, expr: LinExpr);
    fn optimize(&mut self) -> Result<(), MipError>;
    fn value(&self, var: VarId) -> Result<f64, MipError>;
    /// Shadow price of a row. Reported for pure LPs; zero for models with integer variables.
    fn dual(&self, constr: ConstrId) -> Result<f64, MipError>;
    fn objective_value(&self) -> Result<f64, MipError>;
    /// Wall time of the last `optimize`.
    fn runtime(&self) -> Duration;
    /// Suppress the per-solve log events of this model.
    fn set_quiet(&mut self, quiet: bool);
    fn num_constrs(&self) -> usize;
}

/// Solver session: hands out fresh models.
pub trait Solver {
    type Model: Model;
    fn model(&self, name: &str) -> Self::Model;
}

#[cfg(test)]
mod tests;
