//! Fractional covering LP over walks, solved by row generation.
//!
//! For a vertex `x` with support edges `E_x`:
//!
//! ```text
//! optII = min Σ_{e ∈ E_x} x_e·c_e   s.t.  Σ_e w_e·c_e >= 1  for every walk w,  c >= 0
//! ```
//!
//! Only a working set of walks is kept as rows. After each LP solve the
//! separation oracle returns the cheapest walk under the current cost `c*`;
//! if it costs less than `1 - tol` it becomes a new row, otherwise `c*` is
//! certified optimal. The duals of the rows form the certificate consumed by
//! the gap engine. Generation is bounded by `GapCfg::max_rows`.

use std::time::Duration;

use crate::cfg::GapCfg;
use crate::error::GapError;
use crate::mip::{ConstrId, LinExpr, MipError, Model, Sense, Solver, VarId, VarKind};
use crate::model::{Cost, Edge, Vertex, Walk};
use crate::separation::solve_graphic_tsp;

/// Result of one covering solve.
#[derive(Clone, Debug)]
pub struct Covering {
    /// Optimal value `optII`.
    pub opt: f64,
    /// Walks whose dual exceeds `tol`, with that dual.
    pub certificate: Vec<(Walk, f64)>,
    /// Realizing cost vector over the support edges.
    pub cost: Cost,
    /// Cheapest walk value under `cost` at termination (`>= 1 - tol`).
    pub separation_value: f64,
    /// Walks generated by the oracle (seeds excluded).
    pub generated: usize,
    /// Engine time over every LP and oracle solve.
    pub runtime: Duration,
}

/// Solve the covering LP of `x` on `n` nodes, starting from the `seeds` rows.
pub fn solve_covering<S: Solver>(
    solver: &S,
    n: usize,
    x: &Vertex,
    seeds: &[Walk],
    cfg: &GapCfg,
) -> Result<Covering, GapError> {
    let edges = x.support_edges();

    let mut model = solver.model("covering");
    model.set_quiet(cfg.quiet);
    let c: Vec<VarId> = edges
        .iter()
        .map(|e| {
            let name = format!("c[{},{}]", e.0, e.1);
            model.add_var(&name, VarKind::Continuous, 0.0, f64::INFINITY)
        })
        .collect();

    let mut walks: Vec<Walk> = Vec::with_capacity(seeds.len());
    let mut rows: Vec<ConstrId> = Vec::with_capacity(seeds.len());
    for w in seeds {
        rows.push(add_walk_row(&mut model, &edges, &c, w));
        walks.push(w.clone());
    }
    model.set_objective(
        edges
            .iter()
            .zip(&c)
            .map(|(&e, &var)| (var, x.weight(e)))
            .collect(),
    );

    let mut runtime = Duration::ZERO;
    let mut generated = 0usize;
    loop {
        model.optimize()?;
        runtime += model.runtime();
        let cost = read_cost(&model, &edges, &c)?;

        let sep = solve_graphic_tsp(solver, n, &cost, cfg)?;
        runtime += sep.runtime;
        tracing::debug!(
            n,
            rows = model.num_constrs(),
            lp = model.objective_value()?,
            separation = sep.value,
            "row generation"
        );

        if sep.value >= 1.0 - cfg.tol {
            let mut certificate = Vec::new();
            for (w, &row) in walks.iter().zip(&rows) {
                let y = model.dual(row)?;
                if y > cfg.tol {
                    certificate.push((w.clone(), y));
                }
            }
            return Ok(Covering {
                opt: model.objective_value()?,
                certificate,
                cost,
                separation_value: sep.value,
                generated,
                runtime,
            });
        }

        if generated >= cfg.max_rows {
            return Err(GapError::RowLimit { rows: generated });
        }
        rows.push(add_walk_row(&mut model, &edges, &c, &sep.walk));
        walks.push(sep.walk);
        generated += 1;
    }
}

fn add_walk_row<M: Model>(model: &mut M, edges: &[Edge], c: &[VarId], w: &Walk) -> ConstrId {
    let expr: LinExpr = edges
        .iter()
        .zip(c)
        .filter(|(e, _)| w.mult(**e) > 0)
        .map(|(&e, &var)| (var, w.mult(e) as f64))
        .collect();
    model.add_constr("walk", expr, Sense::Ge, 1.0)
}

fn read_cost<M: Model>(model: &M, edges: &[Edge], c: &[VarId]) -> Result<Cost, MipError> {
    edges
        .iter()
        .zip(c)
        .map(|(&e, &var)| Ok((e, model.value(var)?)))
        .collect()
}
