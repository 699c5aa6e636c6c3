#![allow(dead_code)]

use edge_match_score::{Edge, EdgeList, GraphPair, VertexId};

pub fn edge(a: VertexId, b: VertexId) -> Edge {
    Edge::new(a, b)
}

pub fn edge_list(num_vertices: usize, pairs: &[(VertexId, VertexId)]) -> EdgeList {
    EdgeList::from_pairs(num_vertices, pairs).unwrap()
}

pub fn graph_pair(
    num_vertices: usize,
    reference: &[(VertexId, VertexId)],
    target: &[(VertexId, VertexId)],
) -> GraphPair {
    GraphPair::new(
        edge_list(num_vertices, reference),
        edge_list(num_vertices, target),
    )
    .unwrap()
}

/// A: 1 - 2 - 3, B: the same path.
pub fn path3() -> GraphPair {
    graph_pair(3, &[(1, 2), (2, 3)], &[(1, 2), (2, 3)])
}

/// The 5-cycle 1..5 and its image under 1->3, 2->5, 3->1, 4->2, 5->4.
pub fn pentagon() -> GraphPair {
    graph_pair(
        5,
        &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)],
        &[(3, 5), (5, 1), (1, 2), (2, 4), (4, 3)],
    )
}
