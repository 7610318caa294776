//! Node/edge enumeration and the small graph routines the oracle needs.

use super::types::{Edge, Node, Walk};

/// All nodes and edges of the complete graph on `n` nodes, edges in canonical order.
pub fn nodes_and_edges(n: usize) -> (Vec<Node>, Vec<Edge>) {
    let nodes: Vec<Node> = (0..n).collect();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(Edge(i, j));
        }
    }
    (nodes, edges)
}

/// Edges of `edges` with exactly one endpoint in `s` (the boundary δ(S)).
pub fn delta(s: &[Node], edges: &[Edge]) -> Vec<Edge> {
    let size = edges
        .iter()
        .map(|e| e.1 + 1)
        .chain(s.iter().map(|v| v + 1))
        .max()
        .unwrap_or(0);
    let mut inside = vec![false; size];
    for &v in s {
        inside[v] = true;
    }
    edges.iter().copied().filter(|e| e.crosses(&inside)).collect()
}

/// Connected components of the graph `([0, n), edges)`.
///
/// Every node appears in exactly one component (isolated nodes form
/// singletons). Members are sorted and components are ordered by their
/// smallest node.
pub fn components(n: usize, edges: &[Edge]) -> Vec<Vec<Node>> {
    let mut adj: Vec<Vec<Node>> = vec![Vec::new(); n];
    for e in edges {
        adj[e.0].push(e.1);
        adj[e.1].push(e.0);
    }
    let mut seen = vec![false; n];
    let mut out = Vec::new();
    for root in 0..n {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        let mut comp = vec![root];
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            for &w in &adj[u] {
                if !seen[w] {
                    seen[w] = true;
                    comp.push(w);
                    stack.push(w);
                }
            }
        }
        comp.sort_unstable();
        out.push(comp);
    }
    out
}

/// A walk covers `[0, n)` as a closed walk: even degree ≥ 2 everywhere and a
/// connected support.
pub fn is_connected_walk(n: usize, walk: &Walk) -> bool {
    let even_cover = (0..n).all(|v| {
        let d = walk.degree(v);
        d >= 2 && d % 2 == 0
    });
    even_cover && components(n, &walk.support_edges()).len() == 1
}
