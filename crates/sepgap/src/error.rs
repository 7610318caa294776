//! Crate-wide error type.

use crate::mip::MipError;
use crate::model::Edge;

/// Failures of the gap computations. A failed solve aborts the computation
/// for the vertex at hand; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum GapError {
    /// Lifting was asked to split an edge whose weight is not exactly one.
    #[error("edge {edge} has weight {weight}, the lifting move needs a one-edge")]
    NotOneEdge { edge: Edge, weight: f64 },

    /// A vertex line had the wrong number of values.
    #[error("vertex line has {found} values, expected {expected} for n = {n}")]
    ValueCount {
        n: usize,
        expected: usize,
        found: usize,
    },

    /// A token of a vertex line is not a rational number.
    #[error("cannot parse {token:?} as a rational number")]
    BadNumber { token: String },

    /// Row generation did not certify optimality within the configured bound.
    #[error("row generation still finds violated walks after {rows} rows")]
    RowLimit { rows: usize },

    /// Cut generation did not connect the walk within the configured bound.
    #[error("walk still has {components} components after {cuts} subtour cuts")]
    CutLimit { cuts: usize, components: usize },

    /// The mathematical-programming engine failed.
    #[error(transparent)]
    Mip(#[from] MipError),
}
