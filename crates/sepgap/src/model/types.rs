//! Value types of the combinatorial model: nodes, canonical edges and
//! edge-keyed maps (vertices, walks, costs).
//!
//! Maps are ordered by the canonical edge order, so every iteration over a
//! `Vertex`, `Walk` or `Cost` is deterministic.

use std::collections::BTreeMap;
use std::fmt;

/// Node identifier in `[0, n)`.
pub type Node = usize;

/// Unordered pair of distinct nodes, stored with the smaller node first.
///
/// The derived `Ord` is the canonical edge order: lexicographic by `(i, j)`,
/// which is the order of `combinations(0..n, 2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    /// Canonical edge between `a` and `b` (endpoints may come in any order).
    #[inline]
    pub fn new(a: Node, b: Node) -> Self {
        debug_assert!(a != b, "loops are not edges");
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }

    #[inline]
    pub fn touches(&self, v: Node) -> bool {
        self.0 == v || self.1 == v
    }

    /// True iff exactly one endpoint lies in the node set described by `inside`.
    #[inline]
    pub fn crosses(&self, inside: &[bool]) -> bool {
        inside[self.0] != inside[self.1]
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

/// Map from canonical edges to values. Absent edges read as zero through the
/// typed accessors on [`Vertex`] and [`Walk`].
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeMap<T> {
    inner: BTreeMap<Edge, T>,
}

impl<T> Default for EdgeMap<T> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }
}

impl<T: Copy> EdgeMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, e: Edge) -> Option<T> {
        self.inner.get(&e).copied()
    }

    #[inline]
    pub fn insert(&mut self, e: Edge, value: T) -> Option<T> {
        self.inner.insert(e, value)
    }

    #[inline]
    pub fn remove(&mut self, e: Edge) -> Option<T> {
        self.inner.remove(&e)
    }

    #[inline]
    pub fn contains(&self, e: Edge) -> bool {
        self.inner.contains_key(&e)
    }

    /// Entries in canonical edge order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, T)> + '_ {
        self.inner.iter().map(|(e, v)| (*e, *v))
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.inner.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: Copy> FromIterator<(Edge, T)> for EdgeMap<T> {
    fn from_iter<I: IntoIterator<Item = (Edge, T)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

/// Fractional point of the relaxation: edge → weight in `[0, 1]`.
pub type Vertex = EdgeMap<f64>;
/// Linear objective coefficients over edges.
pub type Cost = EdgeMap<f64>;
/// Closed node-covering walk: edge → multiplicity in `{0, 1, 2}`.
pub type Walk = EdgeMap<u8>;

impl EdgeMap<f64> {
    /// Weight of `e`, zero when absent.
    #[inline]
    pub fn weight(&self, e: Edge) -> f64 {
        self.get(e).unwrap_or(0.0)
    }

    /// Edges with strictly positive weight, in canonical order.
    pub fn support_edges(&self) -> Vec<Edge> {
        self.iter().filter(|(_, w)| *w > 0.0).map(|(e, _)| e).collect()
    }

    /// Edges with weight exactly one, in canonical order.
    pub fn one_edges(&self) -> Vec<Edge> {
        self.iter().filter(|(_, w)| *w == 1.0).map(|(e, _)| e).collect()
    }

    /// Weighted degree of every node in `[0, n)`.
    pub fn degrees(&self, n: usize) -> Vec<f64> {
        let mut deg = vec![0.0; n];
        for (e, w) in self.iter() {
            deg[e.0] += w;
            deg[e.1] += w;
        }
        deg
    }
}

impl EdgeMap<u8> {
    /// Multiplicity of `e`, zero when absent.
    #[inline]
    pub fn mult(&self, e: Edge) -> u8 {
        self.get(e).unwrap_or(0)
    }

    /// `Σ w[e]·c[e]` over the edges of `cost`.
    pub fn value(&self, cost: &Cost) -> f64 {
        cost.iter().map(|(e, c)| self.mult(e) as f64 * c).sum()
    }

    /// Total multiplicity incident to `v`.
    pub fn degree(&self, v: Node) -> u32 {
        self.iter()
            .filter(|(e, _)| e.touches(v))
            .map(|(_, m)| m as u32)
            .sum()
    }

    /// Edges traversed at least once.
    pub fn support_edges(&self) -> Vec<Edge> {
        self.iter().filter(|(_, m)| *m > 0).map(|(e, _)| e).collect()
    }
}
