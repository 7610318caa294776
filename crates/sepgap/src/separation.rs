//! Separation oracle: graphic-STSP with lazily generated subtour cuts.
//!
//! Model (one fresh engine model per call)
//! - `x_e ∈ {0,1,2}` for every edge of the cost vector, `d_v ∈ Z, d_v >= 1`.
//! - Degree parity: `Σ_{e ∈ δ(v)} x_e = 2·d_v` for every node.
//! - Objective: `min Σ c_e·x_e`.
//!
//! Connectivity is enforced lazily: while the support of the incumbent walk
//! has several components, the boundary of the first one (the component of
//! the smallest node) must be crossed at least twice, and the model is
//! re-solved. The loop is bounded by `GapCfg::max_cuts`.

use std::time::Duration;

use crate::cfg::GapCfg;
use crate::error::GapError;
use crate::mip::{LinExpr, MipError, Model, Sense, Solver, VarId, VarKind};
use crate::model::{components, delta, nodes_and_edges, Cost, Edge, EdgeMap, Walk};

/// Cheapest closed walk for a cost vector.
#[derive(Clone, Debug)]
pub struct Separation {
    /// `Σ c_e·w_e` of the walk.
    pub value: f64,
    /// Multiplicities over the edges of the cost vector (zeros included).
    pub walk: Walk,
    /// Engine time over all re-solves.
    pub runtime: Duration,
    /// Subtour cuts added before the walk became connected.
    pub cuts: usize,
}

/// Minimum-cost connected even-degree multigraph over the edges of `cost` on `n` nodes.
pub fn solve_graphic_tsp<S: Solver>(
    solver: &S,
    n: usize,
    cost: &Cost,
    cfg: &GapCfg,
) -> Result<Separation, GapError> {
    let (nodes, _) = nodes_and_edges(n);
    let edges: Vec<Edge> = cost.edges().collect();

    let mut model = solver.model("graphic_tsp");
    model.set_quiet(cfg.quiet);
    let x: EdgeMap<VarId> = edges
        .iter()
        .map(|&e| {
            let name = format!("x[{},{}]", e.0, e.1);
            (e, model.add_var(&name, VarKind::Integer, 0.0, 2.0))
        })
        .collect();
    let d: Vec<VarId> = nodes
        .iter()
        .map(|v| model.add_var(&format!("d[{v}]"), VarKind::Integer, 1.0, f64::INFINITY))
        .collect();

    for &v in &nodes {
        let mut expr = crossing(&x, &delta(&[v], &edges));
        expr.push(d[v], -2.0);
        model.add_constr("node_deg", expr, Sense::Eq, 0.0);
    }
    model.set_objective(x.iter().map(|(e, var)| (var, cost.weight(e))).collect());

    model.optimize()?;
    let mut runtime = model.runtime();
    let mut walk = read_walk(&model, &x)?;
    let mut comps = components(n, &walk.support_edges());

    let mut cuts = 0;
    while comps.len() > 1 {
        if cuts >= cfg.max_cuts {
            return Err(GapError::CutLimit {
                cuts,
                components: comps.len(),
            });
        }
        let s = &comps[0];
        model.add_constr("sub_el", crossing(&x, &delta(s, &edges)), Sense::Ge, 2.0);
        cuts += 1;
        tracing::debug!(n, cuts, component = s.len(), parts = comps.len(), "subtour cut");

        model.optimize()?;
        runtime += model.runtime();
        walk = read_walk(&model, &x)?;
        comps = components(n, &walk.support_edges());
    }

    Ok(Separation {
        value: model.objective_value()?,
        walk,
        runtime,
        cuts,
    })
}

fn crossing(x: &EdgeMap<VarId>, boundary: &[Edge]) -> LinExpr {
    boundary
        .iter()
        .filter_map(|&e| x.get(e))
        .map(|var| (var, 1.0))
        .collect()
}

fn read_walk<M: Model>(model: &M, x: &EdgeMap<VarId>) -> Result<Walk, MipError> {
    x.iter()
        .map(|(e, var)| {
            let m = model.value(var)?.round().clamp(0.0, 2.0) as u8;
            Ok((e, m))
        })
        .collect()
}
