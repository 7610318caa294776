//! Configuration of the gap computations.
//!
//! Engine limits (pivots, branch-and-bound nodes) belong to the solver
//! session (`mip::MipCfg`); the bounds here cover the two generation loops.

/// Tolerance and loop bounds shared by the oracle, covering solver and gap engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GapCfg {
    /// Row generation stops once the cheapest walk costs at least `1 - tol`;
    /// duals above `tol` enter the certificate.
    pub tol: f64,
    /// Walks the covering solver may generate beyond its seeds.
    pub max_rows: usize,
    /// Subtour cuts the oracle may add per call.
    pub max_cuts: usize,
    /// Silence per-solve engine events.
    pub quiet: bool,
}

impl Default for GapCfg {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_rows: 10_000,
            max_cuts: 10_000,
            quiet: true,
        }
    }
}

/// Bounds of the lifting/refinement loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefineCfg {
    /// Family-gap the loop tries to reach (within `GapCfg::tol`).
    pub target: f64,
    pub max_iterations: usize,
}

impl Default for RefineCfg {
    fn default() -> Self {
        Self {
            target: 4.0 / 3.0,
            max_iterations: 12,
        }
    }
}
