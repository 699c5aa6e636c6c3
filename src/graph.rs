use crate::error::{Result, ScoreError};
use crate::graph_traits::Graph;
use petgraph::graph::UnGraph;

/// Vertex ids are 1-based. Our graphs never exceed 4 billion vertices.
pub type VertexId = u32;

/// An undirected edge, stored with its smaller endpoint first so that `(a, b)` and
/// `(b, a)` compare equal. A self-loop keeps `lo == hi`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    lo: VertexId,
    hi: VertexId,
}

impl Edge {
    #[inline]
    pub fn new(a: VertexId, b: VertexId) -> Edge {
        if a <= b {
            Edge { lo: a, hi: b }
        } else {
            Edge { lo: b, hi: a }
        }
    }

    #[inline]
    pub fn lo(&self) -> VertexId {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> VertexId {
        self.hi
    }

    pub fn is_self_loop(&self) -> bool {
        self.lo == self.hi
    }

    /// Packs both endpoints into one integer, `lo` in the upper half.
    #[inline]
    pub fn key(&self) -> u64 {
        (u64::from(self.lo) << 32) | u64::from(self.hi)
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((a, b): (VertexId, VertexId)) -> Edge {
        Edge::new(a, b)
    }
}

/// The edges of one graph in input order. Every endpoint lies in `[1, num_vertices]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    num_vertices: usize,
    edges: Vec<Edge>,
}

impl EdgeList {
    pub fn new(num_vertices: usize, edges: Vec<Edge>) -> Result<EdgeList> {
        if num_vertices > VertexId::max_value() as usize {
            return Err(ScoreError::invalid_input(format!(
                "{} vertices exceed the supported maximum of {}",
                num_vertices,
                VertexId::max_value()
            )));
        }
        if let Some((n, edge)) = edges
            .iter()
            .enumerate()
            .find(|(_, e)| e.lo() == 0 || e.hi() as usize > num_vertices)
        {
            return Err(ScoreError::invalid_input(format!(
                "edge {} ({}, {}) has an endpoint outside [1, {}]",
                n + 1,
                edge.lo(),
                edge.hi(),
                num_vertices
            )));
        }
        Ok(EdgeList {
            num_vertices,
            edges,
        })
    }

    pub fn from_pairs(num_vertices: usize, pairs: &[(VertexId, VertexId)]) -> Result<EdgeList> {
        EdgeList::new(num_vertices, pairs.iter().map(|&p| Edge::from(p)).collect())
    }

    /// Node `i` of `pg` becomes vertex `i + 1`. Node and edge weights are ignored.
    pub fn from_petgraph<N, E>(pg: &UnGraph<N, E>) -> EdgeList {
        assert!(pg.node_count() <= VertexId::max_value() as usize);
        EdgeList {
            num_vertices: pg.node_count(),
            edges: pg
                .raw_edges()
                .iter()
                .map(|e| {
                    Edge::new(
                        (e.source().index() + 1) as VertexId,
                        (e.target().index() + 1) as VertexId,
                    )
                })
                .collect(),
        }
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }
}

impl Graph for EdgeList {
    #[inline]
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline]
    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn nth_edge(&self, n: usize) -> Option<Edge> {
        self.edges.get(n).copied()
    }
}

/// The reference graph A and the target graph B. Both share the vertex range and
/// the declared edge count M.
#[derive(Debug, Clone)]
pub struct GraphPair {
    reference: EdgeList,
    target: EdgeList,
}

impl GraphPair {
    pub fn new(reference: EdgeList, target: EdgeList) -> Result<GraphPair> {
        if reference.num_vertices() != target.num_vertices() {
            return Err(ScoreError::invalid_input(format!(
                "graphs have {} and {} vertices",
                reference.num_vertices(),
                target.num_vertices()
            )));
        }
        if reference.num_edges() != target.num_edges() {
            return Err(ScoreError::invalid_input(format!(
                "graphs have {} and {} edges",
                reference.num_edges(),
                target.num_edges()
            )));
        }
        Ok(GraphPair { reference, target })
    }

    pub fn num_vertices(&self) -> usize {
        self.reference.num_vertices()
    }

    /// M, the edge count of each graph.
    pub fn num_edges(&self) -> usize {
        self.reference.num_edges()
    }

    pub fn reference(&self) -> &EdgeList {
        &self.reference
    }

    pub fn target(&self) -> &EdgeList {
        &self.target
    }
}
