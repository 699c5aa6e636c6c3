//! Traits that represent an abstract graph upon which the matcher operates.

use crate::graph::{Edge, VertexId};
use petgraph::graph::{NodeIndex, UnGraph};

/// Abstract representation of an undirected graph with vertices `1..=num_vertices()`.
pub trait Graph {
    fn num_vertices(&self) -> usize;

    /// The number of edges, duplicates included.
    fn num_edges(&self) -> usize;

    /// Returns the nth edge in input order.
    fn nth_edge(&self, n: usize) -> Option<Edge>;

    fn edges(&self) -> EdgeIter<'_, Self> {
        EdgeIter {
            graph: self,
            pos: 0,
        }
    }

    /// Node `i` of the result carries vertex id `i + 1` as its weight.
    fn to_petgraph(&self) -> UnGraph<VertexId, ()> {
        let mut graph = UnGraph::with_capacity(self.num_vertices(), self.num_edges());
        for v in 1..=self.num_vertices() {
            let idx = graph.add_node(v as VertexId);
            assert!(idx.index() + 1 == v);
        }
        for edge in self.edges() {
            graph.add_edge(
                NodeIndex::new(edge.lo() as usize - 1),
                NodeIndex::new(edge.hi() as usize - 1),
                (),
            );
        }
        graph
    }
}

/// Iterates the edges of a [`Graph`] in input order.
pub struct EdgeIter<'a, G: ?Sized> {
    graph: &'a G,
    pos: usize,
}

impl<'a, G: Graph + ?Sized> Iterator for EdgeIter<'a, G> {
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Edge> {
        let edge = self.graph.nth_edge(self.pos)?;
        self.pos += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.graph.num_edges().saturating_sub(self.pos);
        (rest, Some(rest))
    }
}
