//! Lifting move and the iterative refinement of the family-gap.
//!
//! Purpose
//! - `lift_vertex` splits a one-edge `(i, j)` of a vertex on `n` nodes through
//!   the new node `n`, producing a vertex on `n + 1` nodes.
//! - `extend_walk` maps a certificate walk through the same move so it stays a
//!   closed covering walk on `n + 1` nodes.
//! - `refine` repeats lift + re-solve on the worst one-edge, seeding every
//!   covering solve with the extended certificate, until the family-gap
//!   reaches the target or the iteration bound is hit.
//!
//! Code cross-refs: `gap::family_gap`, `model::{Vertex, Walk}`.

mod lift;
mod refine;

pub use lift::{extend_walk, lift_vertex};
pub use refine::{refine, RefineReport, Refinement};
