use std::collections::HashSet;

use crate::ztm::models::{EdgeKey, RawEdge, SimpleEdge};

/// Collapses the raw trip segments into one edge per (route, from, to)
/// triple, dropping the timing fields. First appearance decides the output
/// position, so the result is stable with respect to source order. Parallel
/// connections between the same pair of stops under different routes stay
/// distinct entries.
pub fn simplify(edges: &[RawEdge]) -> Vec<SimpleEdge> {
    let mut seen: HashSet<EdgeKey> = HashSet::with_capacity(edges.len());
    let mut simple = Vec::new();
    for edge in edges {
        if seen.insert(edge.key()) {
            simple.push(SimpleEdge::from(edge));
        }
    }
    simple
}

#[cfg(test)]
fn edge(route: &str, from: &str, to: &str, start: u32) -> RawEdge {
    RawEdge {
        route: route.into(),
        from: from.into(),
        to: to.into(),
        start_time: start,
        end_time: start + 2,
        time_between: 2,
        route_type: "NZ".into(),
    }
}

#[test]
fn empty_input() {
    assert!(simplify(&[]).is_empty());
}

#[test]
fn keeps_first_seen_order() {
    let edges = vec![
        edge("122", "100101", "100102", 300),
        edge("520", "200301", "100101", 305),
        edge("122", "100101", "100102", 315),
        edge("122", "100102", "100103", 317),
        edge("520", "200301", "100101", 320),
    ];
    let simple = simplify(&edges);
    assert_eq!(simple.len(), 3);
    assert_eq!(simple[0].route, "122");
    assert_eq!(simple[0].to, "100102");
    assert_eq!(simple[1].route, "520");
    assert_eq!(simple[2].from, "100102");
}

#[test]
fn routes_keep_parallel_edges_apart() {
    let edges = vec![
        edge("122", "100101", "100102", 300),
        edge("N42", "100101", "100102", 1500),
    ];
    assert_eq!(simplify(&edges).len(), 2);
}
