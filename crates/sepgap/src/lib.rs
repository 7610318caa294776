//! Integrality-gap bounds for the subtour-elimination relaxation of the STSP.
//!
//! For a fractional vertex `x` of the subtour-elimination polytope the crate
//! computes `gapII(x) = 1 / optII(x)` (fractional covering of `x` by closed
//! walks), the family-gap of `x` with respect to its lifting on one-edges,
//! and refines the family-gap by repeated lifting.
//!
//! Layout
//! - `model`: nodes, canonical edges, vertices/costs/walks, vertex line I/O.
//! - `mip`: solver session/model contract and the built-in dense backend.
//! - `separation`: cheapest closed walk for a cost vector.
//! - `covering`: `optII` by row generation, with the dual certificate.
//! - `gap`: gapII, family-gap and the worst one-edge.
//! - `lifting`: the lifting move, certificate extension and refinement.
//! - `ancestor`: structural filter for refinement inputs.
//!
//! API Policy
//! - Project-internal crate. No stable public API; the CLI is the only consumer.

pub mod ancestor;
pub mod api;
pub mod cfg;
pub mod covering;
pub mod error;
pub mod gap;
pub mod lifting;
pub mod mip;
pub mod model;
pub mod separation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{GapCfg, RefineCfg};
pub use error::GapError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{GapCfg, RefineCfg};
    pub use crate::error::GapError;
    pub use crate::gap::{family_gap, GapReport};
    pub use crate::lifting::{refine, RefineReport, Refinement};
    pub use crate::mip::{DenseSolver, Solver};
    pub use crate::model::{line_to_vertex, vertex_to_line, Edge, Vertex, Walk};
}
