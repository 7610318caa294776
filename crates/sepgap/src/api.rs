//! Curated internal API for the batch drivers (UNSTABLE).
//!
//! Breaking changes are allowed; prefer these re-exports in callers so the
//! CLI does not depend on module layout.

// Model and vertex I/O
pub use crate::model::{
    components, is_connected_walk, line_to_vertex, nodes_and_edges, parse_rational,
    vertex_to_line, Cost, Edge, EdgeMap, Node, Vertex, Walk,
};
// Engine
pub use crate::mip::{DenseSolver, MipCfg, MipError, Model, Solver};
// Gap computations
pub use crate::ancestor::is_ancestor;
pub use crate::covering::{solve_covering, Covering};
pub use crate::gap::{edge_factor, family_gap, worst_one_edge, GapReport};
pub use crate::lifting::{extend_walk, lift_vertex, refine, RefineReport, Refinement};
pub use crate::separation::{solve_graphic_tsp, Separation};
pub use crate::{GapCfg, GapError, RefineCfg};
