//! Bounded refinement loop: lift on the worst one-edge until the
//! family-gap reaches the target.

use crate::cfg::{GapCfg, RefineCfg};
use crate::error::GapError;
use crate::gap::family_gap;
use crate::mip::Solver;
use crate::model::{Edge, Vertex, Walk};

use super::lift::{extend_walk, lift_vertex};

/// How the loop ended. Exhaustion is an expected outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refinement {
    /// Target reached after this many lifts.
    Reached(usize),
    /// Iteration bound hit with the family-gap still above the target.
    Exhausted,
}

impl Refinement {
    /// Iteration count, or `-1` when the target was not reached.
    pub fn sentinel(&self) -> i64 {
        match self {
            Refinement::Reached(k) => *k as i64,
            Refinement::Exhausted => -1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RefineReport {
    /// gapII of the input vertex.
    pub gap: f64,
    /// Family-gap of the last vertex of the chain.
    pub family_gap: f64,
    pub outcome: Refinement,
    /// Edges lifted, in order (edge `k` lives on `n + k` nodes).
    pub lifts: Vec<Edge>,
    pub final_n: usize,
}

/// Refine the family-gap of `x0` on `n` nodes.
pub fn refine<S: Solver>(
    solver: &S,
    n: usize,
    x0: &Vertex,
    cfg: &GapCfg,
    rcfg: &RefineCfg,
) -> Result<RefineReport, GapError> {
    let mut report = family_gap(solver, n, x0, &[], cfg)?;
    let gap = report.gap;
    let threshold = rcfg.target + cfg.tol;

    let mut x = x0.clone();
    let mut nn = n;
    let mut lifts = Vec::new();
    while report.family_gap > threshold && lifts.len() < rcfg.max_iterations {
        let Some(e) = report.worst_one_edge else {
            break;
        };
        x = lift_vertex(nn, &x, e)?;
        let seeds: Vec<Walk> = report
            .certificate
            .iter()
            .flat_map(|(w, _)| extend_walk(nn, w, e))
            .collect();
        nn += 1;
        lifts.push(e);
        tracing::debug!(n = nn, edge = %e, seeds = seeds.len(), "lift");
        report = family_gap(solver, nn, &x, &seeds, cfg)?;
    }

    let outcome = if report.family_gap > threshold {
        Refinement::Exhausted
    } else {
        Refinement::Reached(lifts.len())
    };
    tracing::info!(
        n,
        gap,
        family_gap = report.family_gap,
        iterations = outcome.sentinel(),
        "refine"
    );
    Ok(RefineReport {
        gap,
        family_gap: report.family_gap,
        outcome,
        lifts,
        final_n: nn,
    })
}
