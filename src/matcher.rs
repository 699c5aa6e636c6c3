use crate::edge_set::EdgeSet;
use crate::graph::Edge;
use crate::permutation::Permutation;

/// Maps both endpoints of a target edge back through the inverse permutation.
#[inline]
pub fn relabel(edge: Edge, permutation: &Permutation) -> Edge {
    Edge::new(
        permutation.preimage(edge.lo()),
        permutation.preimage(edge.hi()),
    )
}

/// Counts the target edges that land on a reference edge after relabeling.
///
/// Endpoints must lie in `[1, permutation.len()]`; the loaders guarantee this.
pub fn count_matches<I>(reference: &EdgeSet, permutation: &Permutation, target: I) -> usize
where
    I: IntoIterator<Item = Edge>,
{
    target
        .into_iter()
        .filter(|&edge| reference.contains(relabel(edge, permutation)))
        .count()
}
