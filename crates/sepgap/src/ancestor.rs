//! Ancestor classifier: structural filter used to pick refinement inputs.
//!
//! A vertex on `n` nodes is an ancestor of order `k` when its support graph
//! has exactly `n + k` edges and every node of that graph has degree at
//! least 3, with some node of degree exactly 3. Nodes outside the support
//! are not part of the graph.

use crate::model::Vertex;

/// True iff `x` is an ancestor of order `k`.
pub fn is_ancestor(n: usize, x: &Vertex, k: usize) -> bool {
    let support = x.support_edges();
    if support.len() != n + k {
        return false;
    }
    let mut degree = vec![0usize; n];
    for e in &support {
        if e.1 >= n {
            return false;
        }
        degree[e.0] += 1;
        degree[e.1] += 1;
    }
    degree.into_iter().filter(|&d| d > 0).min() == Some(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{line_to_vertex, Edge};

    #[test]
    fn prism_is_an_ancestor_of_order_three() {
        let x = line_to_vertex(6, "1/2 1/2 1 0 0 1/2 0 1 0 0 0 1 1/2 1/2 1/2").unwrap();
        assert!(is_ancestor(6, &x, 3));
        assert!(!is_ancestor(6, &x, 2));
        assert!(!is_ancestor(6, &x, 4));
    }

    #[test]
    fn degree_two_node_disqualifies() {
        // Nine edges on six nodes, node 5 has degree 2.
        let x: Vertex = [
            (0, 1), (0, 2), (1, 2), (0, 3), (1, 4), (2, 3),
            (3, 4), (2, 5), (4, 5),
        ]
        .into_iter()
        .map(|(i, j)| (Edge::new(i, j), 0.5))
        .collect();
        assert_eq!(x.support_edges().len(), 9);
        assert!(!is_ancestor(6, &x, 3));
    }

    #[test]
    fn complete_graph_has_minimum_degree_above_three() {
        let (_, edges) = crate::model::nodes_and_edges(5);
        let x: Vertex = edges.into_iter().map(|e| (e, 0.25)).collect();
        // K5 has 10 = 5 + 5 edges but every degree is 4.
        assert!(!is_ancestor(5, &x, 5));
    }

    #[test]
    fn empty_support_is_not_an_ancestor() {
        assert!(!is_ancestor(3, &Vertex::default(), 0));
    }
}
