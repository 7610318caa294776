use super::*;
use crate::GapError;
use proptest::prelude::*;

#[test]
fn edges_follow_combination_order() {
    let (nodes, edges) = nodes_and_edges(4);
    assert_eq!(nodes, vec![0, 1, 2, 3]);
    assert_eq!(
        edges,
        vec![
            Edge(0, 1),
            Edge(0, 2),
            Edge(0, 3),
            Edge(1, 2),
            Edge(1, 3),
            Edge(2, 3)
        ]
    );
    let mut sorted = edges.clone();
    sorted.sort();
    assert_eq!(sorted, edges);
}

#[test]
fn edge_new_is_canonical() {
    assert_eq!(Edge::new(5, 2), Edge(2, 5));
    assert_eq!(Edge::new(2, 5), Edge(2, 5));
    assert_eq!(Edge(1, 3).to_string(), "(1,3)");
}

#[test]
fn delta_keeps_edges_with_one_endpoint_inside() {
    let (_, edges) = nodes_and_edges(4);
    let cut = delta(&[0, 1], &edges);
    assert_eq!(cut, vec![Edge(0, 2), Edge(0, 3), Edge(1, 2), Edge(1, 3)]);
    let single = delta(&[2], &edges);
    assert_eq!(single, vec![Edge(0, 2), Edge(1, 2), Edge(2, 3)]);
    assert!(delta(&[0, 1, 2, 3], &edges).is_empty());
}

#[test]
fn components_cover_all_nodes() {
    let comps = components(6, &[Edge(0, 1), Edge(1, 2), Edge(3, 4)]);
    assert_eq!(comps, vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
}

#[test]
fn connected_walk_checks_parity_and_connectivity() {
    // Hamiltonian cycle 0-1-2-3-0.
    let cycle: Walk = [Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(0, 3)]
        .into_iter()
        .map(|e| (e, 1))
        .collect();
    assert!(is_connected_walk(4, &cycle));
    // Two doubled edges: even degrees but two components.
    let split: Walk = [(Edge(0, 1), 2), (Edge(2, 3), 2)].into_iter().collect();
    assert!(!is_connected_walk(4, &split));
    // Path: odd end degrees.
    let path: Walk = [(Edge(0, 1), 1), (Edge(1, 2), 1)].into_iter().collect();
    assert!(!is_connected_walk(3, &path));
}

#[test]
fn vertex_accessors() {
    let x = line_to_vertex(4, "1 0 1/2 1/2 1 0").unwrap();
    assert_eq!(x.len(), 6);
    assert_eq!(x.one_edges(), vec![Edge(0, 1), Edge(1, 3)]);
    assert_eq!(
        x.support_edges(),
        vec![Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(1, 3)]
    );
    assert_eq!(x.weight(Edge(0, 2)), 0.0);
    let deg = x.degrees(4);
    assert!((deg[1] - 2.5).abs() < 1e-12);
}

#[test]
fn walk_value_and_degree() {
    let w: Walk = [(Edge(0, 1), 2), (Edge(1, 2), 1), (Edge(0, 2), 1)]
        .into_iter()
        .collect();
    let c: Cost = [(Edge(0, 1), 0.5), (Edge(1, 2), 2.0), (Edge(2, 3), 7.0)]
        .into_iter()
        .collect();
    assert!((w.value(&c) - 3.0).abs() < 1e-12);
    assert_eq!(w.degree(0), 3);
    assert_eq!(w.degree(3), 0);
    assert_eq!(w.mult(Edge(2, 3)), 0);
}

#[test]
fn rational_tokens_parse_exactly() {
    assert_eq!(parse_rational("1/3").unwrap(), 1.0 / 3.0);
    assert_eq!(parse_rational("2/4").unwrap(), 0.5);
    assert_eq!(parse_rational("-3/4").unwrap(), -0.75);
    assert_eq!(parse_rational("0.25").unwrap(), 0.25);
    assert_eq!(parse_rational(".5").unwrap(), 0.5);
    assert_eq!(parse_rational("1e-3").unwrap(), 0.001);
    assert_eq!(parse_rational("7").unwrap(), 7.0);
    assert_eq!(
        Ratio::parse("6/-8"),
        Some(Ratio { num: -3, den: 4 })
    );
    assert_eq!(parse_rational("0.3333333333333333").unwrap(), 1.0 / 3.0);
}

#[test]
fn rational_tokens_reject_garbage() {
    for bad in ["", "abc", "1/0", "1/", "/2", "1.2.3", "--1", "1e", "."] {
        assert!(
            matches!(parse_rational(bad), Err(GapError::BadNumber { .. })),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn line_with_wrong_count_is_rejected() {
    let err = line_to_vertex(4, "1 1 1").unwrap_err();
    assert!(matches!(
        err,
        GapError::ValueCount {
            n: 4,
            expected: 6,
            found: 3
        }
    ));
}

#[test]
fn line_round_trip_keeps_text() {
    let line = "1/2 1/2 1 0 0 1/2 0 1 0 0 1/2 0 0 1 1/2";
    let x = line_to_vertex(6, line).unwrap();
    let out = vertex_to_line(6, &x);
    assert_eq!(out, "0.5 0.5 1 0 0 0.5 0 1 0 0 0.5 0 0 1 0.5");
    assert_eq!(line_to_vertex(6, &out).unwrap(), x);
}

proptest! {
    #[test]
    fn line_round_trip_reproduces_weights(
        n in 3usize..8,
        raw in proptest::collection::vec((0i64..=12, 1i64..=12), 28)
    ) {
        let m = n * (n - 1) / 2;
        let tokens: Vec<String> = raw[..m]
            .iter()
            .map(|&(p, q)| format!("{}/{}", p.min(q), q))
            .collect();
        let line = tokens.join(" ");
        let x = line_to_vertex(n, &line).unwrap();
        let again = line_to_vertex(n, &vertex_to_line(n, &x)).unwrap();
        prop_assert_eq!(again, x);
    }
}
