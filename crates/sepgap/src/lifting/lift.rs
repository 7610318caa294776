//! Single lifting step on vertices and walks.

use crate::error::GapError;
use crate::model::{Edge, Vertex, Walk};

/// Vertex on `n + 1` nodes obtained by splitting the one-edge `e` of `x0`
/// through the new node `n`.
///
/// Every edge `(v, n)` is present (zero unless it is `(i, n)` or `(j, n)`),
/// `x1[e] = 0`, and `x1[(i, n)] = x1[(j, n)] = 1`.
pub fn lift_vertex(n: usize, x0: &Vertex, e: Edge) -> Result<Vertex, GapError> {
    let weight = x0.weight(e);
    if weight != 1.0 {
        return Err(GapError::NotOneEdge { edge: e, weight });
    }
    let mut x1 = x0.clone();
    for v in 0..n {
        x1.insert(Edge(v, n), 0.0);
    }
    x1.insert(e, 0.0);
    x1.insert(Edge(e.0, n), 1.0);
    x1.insert(Edge(e.1, n), 1.0);
    Ok(x1)
}

/// Walks on `n + 1` nodes that `w` becomes after lifting on `e`.
///
/// A walk traversing `e` (once or twice) detours through `n` with the same
/// multiplicity on both new edges. A walk skipping `e` has to visit `n` from
/// one side: two branches, doubling `(i, n)` or `(j, n)`. The entry for `e`
/// is dropped in every branch.
pub fn extend_walk(n: usize, w: &Walk, e: Edge) -> Vec<Walk> {
    let (i, j) = (Edge(e.0, n), Edge(e.1, n));
    let mut base = w.clone();
    match base.remove(e).unwrap_or(0) {
        0 => {
            let mut left = base.clone();
            left.insert(i, 2);
            left.insert(j, 0);
            let mut right = base;
            right.insert(i, 0);
            right.insert(j, 2);
            vec![left, right]
        }
        mult => {
            base.insert(i, mult);
            base.insert(j, mult);
            vec![base]
        }
    }
}
