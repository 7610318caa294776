//! Tolerances and limits of the dense backend.
//!
//! Policy
//! - Tolerances are fixed constants; limits are configurable so that every
//!   solve terminates with either a solution or a `MipError`.

/// Smallest pivot magnitude accepted by the ratio test.
pub(crate) const PIVOT_EPS: f64 = 1e-9;
/// Reduced-cost threshold for an improving column.
pub(crate) const OPT_EPS: f64 = 1e-9;
/// Ratio ties within this band fall back to Bland's smallest-index rule.
pub(crate) const RATIO_EPS: f64 = 1e-12;
/// Phase-1 residual above which a model is declared infeasible (relative to the rhs scale).
pub(crate) const FEAS_EPS: f64 = 1e-7;
/// Distance from an integer below which a value counts as integral.
pub(crate) const INT_EPS: f64 = 1e-6;
/// Relative improvement a branch-and-bound node must promise over the incumbent.
pub(crate) const BOUND_EPS: f64 = 1e-9;

/// Engine limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MipCfg {
    /// Simplex pivots per LP solve.
    pub pivot_limit: usize,
    /// Branch-and-bound nodes per MILP solve.
    pub node_limit: usize,
}

impl Default for MipCfg {
    fn default() -> Self {
        Self {
            pivot_limit: 200_000,
            node_limit: 200_000,
        }
    }
}
