//! Depth-first branch-and-bound over the dense simplex.
//!
//! Each node re-solves the LP relaxation with node-local bounds; the most
//! fractional integer variable is split into `<= floor` / `>= ceil`, nearer
//! side first. Nodes whose bound cannot beat the incumbent are pruned.

use super::cfg::{MipCfg, BOUND_EPS, INT_EPS};
use super::simplex::{self, LpOutcome, LpProblem, LpSolution};
use super::MipError;

type Bounds = (Vec<f64>, Vec<f64>);

pub(crate) fn solve(
    p: &LpProblem<'_>,
    integer: &[bool],
    cfg: &MipCfg,
) -> Result<LpOutcome, MipError> {
    let mut incumbent: Option<LpSolution> = None;
    let mut stack: Vec<Bounds> = vec![(p.lb.to_vec(), p.ub.to_vec())];
    let mut nodes = 0usize;
    let mut pivots = 0usize;

    while let Some((lb, ub)) = stack.pop() {
        if nodes >= cfg.node_limit {
            return Err(MipError::NodeLimit {
                nodes: cfg.node_limit,
            });
        }
        nodes += 1;
        let node = LpProblem {
            cost: p.cost,
            lb: &lb,
            ub: &ub,
            rows: p.rows,
        };
        let relaxed = match simplex::solve(&node, cfg.pivot_limit)? {
            LpOutcome::Optimal(sol) => sol,
            LpOutcome::Infeasible => continue,
            LpOutcome::Unbounded => return Ok(LpOutcome::Unbounded),
        };
        pivots += relaxed.pivots;
        if let Some(best) = &incumbent {
            if relaxed.objective >= best.objective - BOUND_EPS * best.objective.abs().max(1.0) {
                continue;
            }
        }
        match most_fractional(&relaxed.x, integer) {
            None => incumbent = Some(rounded(relaxed, p.cost, integer)),
            Some(j) => {
                let v = relaxed.x[j];
                let (down, up) = (v.floor(), v.ceil());
                let mut ub_down = ub.clone();
                ub_down[j] = down;
                let mut lb_up = lb.clone();
                lb_up[j] = up;
                let down_node = (lb, ub_down);
                let up_node = (lb_up, ub);
                // Last pushed is explored first.
                if v - down < up - v {
                    stack.push(up_node);
                    stack.push(down_node);
                } else {
                    stack.push(down_node);
                    stack.push(up_node);
                }
            }
        }
    }

    Ok(match incumbent {
        Some(mut sol) => {
            sol.pivots = pivots;
            tracing::trace!(nodes, pivots, objective = sol.objective, "branch_and_bound");
            LpOutcome::Optimal(sol)
        }
        None => LpOutcome::Infeasible,
    })
}

/// Integer variable farthest from integrality (smallest index on ties).
fn most_fractional(x: &[f64], integer: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (j, (&v, &int)) in x.iter().zip(integer).enumerate() {
        if !int {
            continue;
        }
        let dist = (v - v.round()).abs();
        if dist <= INT_EPS {
            continue;
        }
        if best.map_or(true, |(_, d)| dist > d) {
            best = Some((j, dist));
        }
    }
    best.map(|(j, _)| j)
}

fn rounded(mut sol: LpSolution, cost: &[f64], integer: &[bool]) -> LpSolution {
    for (v, &int) in sol.x.iter_mut().zip(integer) {
        if int {
            *v = v.round();
        }
    }
    sol.objective = cost.iter().zip(&sol.x).map(|(c, v)| c * v).sum();
    sol.duals.iter_mut().for_each(|d| *d = 0.0);
    sol
}
