//! Family-gap and refinement of the prism vertex on 6 nodes.
//!
//! Usage:
//!   cargo run -p sepgap --example prism_family_gap
//!   cargo run -p sepgap --example prism_family_gap -- 3
//!
//! The optional argument bounds the number of lifts (default 12).

use sepgap::prelude::*;

const PRISM: &str = "1/2 1/2 1 0 0 1/2 0 1 0 0 0 1 1/2 1/2 1/2";

fn main() -> Result<(), GapError> {
    let max_iterations = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);
    let solver = DenseSolver::default();
    let cfg = GapCfg::default();
    let x = line_to_vertex(6, PRISM)?;

    let report = family_gap(&solver, 6, &x, &[], &cfg)?;
    println!(
        "optII = {:.6}  gap = {:.6}  family_gap = {:.6}  walks = {}",
        report.opt,
        report.gap,
        report.family_gap,
        report.certificate.len()
    );
    if let Some(e) = report.worst_one_edge {
        println!("worst one-edge {e} (factor {:.6})", report.worst_factor);
    }

    let rcfg = RefineCfg {
        max_iterations,
        ..RefineCfg::default()
    };
    let refined = refine(&solver, 6, &x, &cfg, &rcfg)?;
    let lifts: Vec<String> = refined.lifts.iter().map(|e| e.to_string()).collect();
    println!(
        "refined family_gap = {:.6} on n = {} after [{}]: {:?}",
        refined.family_gap,
        refined.final_n,
        lifts.join(" "),
        refined.outcome
    );
    Ok(())
}
