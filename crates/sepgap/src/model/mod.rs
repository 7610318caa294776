//! Combinatorial model of the STSP on `n` nodes.
//!
//! Purpose
//! - Nodes are `0..n`, edges are canonical pairs `(i, j)` with `i < j`.
//! - Vertices, costs and walks are edge-keyed maps ordered by the canonical
//!   edge order (`combinations(0..n, 2)`), so every scan is deterministic.
//!
//! Code cross-refs: `separation` (walks), `covering` (vertices, costs),
//! `lifting` (new node `n`).

mod graph;
pub mod parse;
mod types;

pub use graph::{components, delta, is_connected_walk, nodes_and_edges};
pub use parse::{line_to_vertex, parse_rational, vertex_to_line, Ratio};
pub use types::{Cost, Edge, EdgeMap, Node, Vertex, Walk};

#[cfg(test)]
mod tests;
