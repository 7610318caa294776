//! gapII and family-gapII of a single vertex.
//!
//! - `gap = 1 / optII`.
//! - For a one-edge `e` the factor is `Σ y_w · (w_e if w_e > 0 else 2)` over
//!   the certificate: a walk that skips `e` is charged the worst multiplicity.
//! - The worst one-edge has the strictly largest factor (first maximum wins,
//!   one-edges scanned in canonical order) and `family_gap = gap · factor`.
//!   Without one-edges, or when every factor is zero, there is no worst edge
//!   and the family-gap is `0`.

use std::time::Duration;

use crate::cfg::GapCfg;
use crate::covering::solve_covering;
use crate::error::GapError;
use crate::mip::Solver;
use crate::model::{Edge, Vertex, Walk};

#[derive(Clone, Debug)]
pub struct GapReport {
    pub opt: f64,
    pub gap: f64,
    pub family_gap: f64,
    pub certificate: Vec<(Walk, f64)>,
    pub worst_one_edge: Option<Edge>,
    pub worst_factor: f64,
    pub runtime: Duration,
}

/// Sensitivity of the certificate to the lifting move on `e`.
pub fn edge_factor(certificate: &[(Walk, f64)], e: Edge) -> f64 {
    certificate
        .iter()
        .map(|(w, y)| {
            let m = w.mult(e);
            y * if m > 0 { m as f64 } else { 2.0 }
        })
        .sum()
}

/// One-edge of `x` with the strictly largest factor, and that factor.
pub fn worst_one_edge(x: &Vertex, certificate: &[(Walk, f64)]) -> Option<(Edge, f64)> {
    let mut worst: Option<(Edge, f64)> = None;
    let mut worst_factor = 0.0;
    for e in x.one_edges() {
        let factor = edge_factor(certificate, e);
        if factor > worst_factor {
            worst = Some((e, factor));
            worst_factor = factor;
        }
    }
    worst
}

/// Gap engine: covering solve, then the worst one-edge of `x0`.
pub fn family_gap<S: Solver>(
    solver: &S,
    n: usize,
    x0: &Vertex,
    seeds: &[Walk],
    cfg: &GapCfg,
) -> Result<GapReport, GapError> {
    let cov = solve_covering(solver, n, x0, seeds, cfg)?;
    let gap = 1.0 / cov.opt;
    let (worst_one_edge, worst_factor) = match worst_one_edge(x0, &cov.certificate) {
        Some((e, f)) => (Some(e), f),
        None => (None, 0.0),
    };
    let family_gap = gap * worst_factor;
    tracing::debug!(
        n,
        gap,
        family_gap,
        walks = cov.certificate.len(),
        worst = ?worst_one_edge,
        "family gap"
    );
    Ok(GapReport {
        opt: cov.opt,
        gap,
        family_gap,
        certificate: cov.certificate,
        worst_one_edge,
        worst_factor,
        runtime: cov.runtime,
    })
}
