use crate::graph::Edge;
use crate::graph_traits::Graph;
use ahash::AHashSet;
use std::iter::FromIterator;

/// Membership index over canonical edges. Duplicate edges collapse into one entry.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    keys: AHashSet<u64>,
}

impl EdgeSet {
    pub fn from_edges<I: IntoIterator<Item = Edge>>(edges: I) -> EdgeSet {
        let edges = edges.into_iter();
        let mut keys = AHashSet::with_capacity(edges.size_hint().0);
        for edge in edges {
            keys.insert(edge.key());
        }
        EdgeSet { keys }
    }

    pub fn from_graph<G: Graph>(graph: &G) -> EdgeSet {
        EdgeSet::from_edges(graph.edges())
    }

    #[inline]
    pub fn contains(&self, edge: Edge) -> bool {
        self.keys.contains(&edge.key())
    }

    /// The number of distinct edges.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> EdgeSet {
        EdgeSet::from_edges(iter)
    }
}
