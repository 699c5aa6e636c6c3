//! Loaders for the two input files: the graph pair and the proposed permutation.
//!
//! Both are whitespace-separated integers. The graph file holds `N M`, then M
//! edge pairs of graph A, then M edge pairs of graph B. Graph B's block may repeat
//! the `N M` header. The permutation file holds the N images `π(1) … π(N)`.

use crate::error::{Result, ScoreError};
use crate::graph::{Edge, EdgeList, GraphPair, VertexId};
use crate::permutation::Permutation;
use log::debug;
use std::fs;
use std::path::Path;

pub fn read_graph_pair<P: AsRef<Path>>(path: P) -> Result<GraphPair> {
    parse_graph_pair(&read_source(path.as_ref())?)
}

pub fn read_permutation<P: AsRef<Path>>(path: P, num_vertices: usize) -> Result<Permutation> {
    parse_permutation(&read_source(path.as_ref())?, num_vertices)
}

fn read_source(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| ScoreError::source_unavailable(path, e))?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

pub fn parse_graph_pair(text: &str) -> Result<GraphPair> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(ScoreError::invalid_input(
            "missing vertex and edge counts",
        ));
    }
    let num_vertices = parse_count(tokens[0], "vertex count")?;
    let num_edges = parse_count(tokens[1], "edge count")?;

    let block = num_edges
        .checked_mul(2)
        .ok_or_else(|| ScoreError::invalid_input(format!("edge count {} is too large", num_edges)))?;
    let rest = &tokens[2..];
    if rest.len() < block {
        return Err(ScoreError::invalid_input(format!(
            "first graph declares {} edges but only {} values follow",
            num_edges,
            rest.len()
        )));
    }
    let (first, mut second) = rest.split_at(block);

    if second.len() == block + 2
        && second[0].parse::<usize>().ok() == Some(num_vertices)
        && second[1].parse::<usize>().ok() == Some(num_edges)
    {
        debug!("Skipping repeated header before the second graph");
        second = &second[2..];
    }
    if second.len() != block {
        return Err(ScoreError::invalid_input(format!(
            "second graph needs {} values for {} edges, found {}",
            block,
            num_edges,
            second.len()
        )));
    }

    let reference = parse_edges(num_vertices, first, "first")?;
    let target = parse_edges(num_vertices, second, "second")?;
    debug!(
        "Loaded graph pair with {} vertices and {} edges each",
        num_vertices, num_edges
    );
    GraphPair::new(reference, target)
}

pub fn parse_permutation(text: &str, num_vertices: usize) -> Result<Permutation> {
    let images = text
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<VertexId>().map_err(|_| {
                ScoreError::invalid_permutation(format!(
                    "entry {} ({:?}) is not a vertex id",
                    i + 1,
                    token
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if images.len() != num_vertices {
        return Err(ScoreError::invalid_permutation(format!(
            "expected {} entries, found {}",
            num_vertices,
            images.len()
        )));
    }
    Permutation::new(images)
}

fn parse_count(token: &str, what: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|_| ScoreError::invalid_input(format!("{} {:?} is not a count", what, token)))
}

fn parse_edges(num_vertices: usize, tokens: &[&str], which: &str) -> Result<EdgeList> {
    let edges = tokens
        .chunks_exact(2)
        .map(|pair| -> Result<Edge> {
            Ok(Edge::new(
                parse_vertex(pair[0], which)?,
                parse_vertex(pair[1], which)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    EdgeList::new(num_vertices, edges).map_err(|e| match e {
        ScoreError::InvalidInput(msg) => {
            ScoreError::invalid_input(format!("{} graph: {}", which, msg))
        }
        other => other,
    })
}

fn parse_vertex(token: &str, which: &str) -> Result<VertexId> {
    token.parse().map_err(|_| {
        ScoreError::invalid_input(format!(
            "{} graph: {:?} is not a vertex id",
            which, token
        ))
    })
}
