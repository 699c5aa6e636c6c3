//! Scores a proposed vertex correspondence between two graphs of equal size.
//!
//! The edges of the reference graph A are indexed. Every edge of the target graph B
//! is mapped back through the inverse of the proposed permutation and looked up in
//! that index. With H hits out of M edges the score is
//! `5.333·x³ − 4·x² + 2.667·x` for `x = H / M`, so a perfect correspondence scores
//! about 4.
//!
//! This is not an isomorphism solver. The permutation is supplied by the caller and
//! only its quality is measured.

pub mod error;
pub mod graph;
mod edge_set;
mod graph_traits;
pub mod io;
mod matcher;
mod permutation;
mod score;

pub use error::{Result, ScoreError};
pub use graph::{Edge, EdgeList, GraphPair, VertexId};
pub use {edge_set::*, graph_traits::*, matcher::*, permutation::*, score::*};

use log::{debug, info};
use std::fmt;

/// The outcome of scoring one permutation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Evaluation {
    /// Target edges that matched a reference edge.
    pub hits: usize,
    /// M, the edge count of each graph.
    pub total: usize,
    pub score: Score,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "you match {} edges out of {} edges", self.hits, self.total)?;
        write!(f, "your score is {}", self.score)
    }
}

/// Scores `permutation` against `pair`. The permutation must cover exactly the
/// vertices of the pair, and the graphs must have at least one edge.
pub fn evaluate(pair: &GraphPair, permutation: &Permutation) -> Result<Evaluation> {
    if permutation.len() != pair.num_vertices() {
        return Err(ScoreError::invalid_permutation(format!(
            "permutation covers {} vertices, graphs have {}",
            permutation.len(),
            pair.num_vertices()
        )));
    }
    let total = pair.num_edges();
    if total == 0 {
        return Err(ScoreError::invalid_input(
            "cannot score against a graph without edges",
        ));
    }

    let reference = EdgeSet::from_graph(pair.reference());
    debug!(
        "Indexed {} distinct reference edges out of {}",
        reference.len(),
        total
    );

    let hits = count_matches(&reference, permutation, pair.target().edges());
    let score = score(hits, total)?;
    info!("Matched {} of {} edges, score {}", hits, total, score);

    Ok(Evaluation { hits, total, score })
}
