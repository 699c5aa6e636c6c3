use crate::error::{Result, ScoreError};
use crate::graph::VertexId;

/// A bijection on the vertex ids `[1, N]`, kept together with its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    /// `forward[i - 1]` is the image of vertex `i`.
    forward: Vec<VertexId>,
    /// `inverse[j - 1]` is the vertex whose image is `j`.
    inverse: Vec<VertexId>,
}

impl Permutation {
    /// Builds the permutation mapping vertex `i` to `images[i - 1]`.
    ///
    /// Fails with `InvalidPermutation` if an image lies outside `[1, images.len()]`
    /// or appears twice.
    pub fn new(images: Vec<VertexId>) -> Result<Permutation> {
        let n = images.len();
        let mut inverse: Vec<VertexId> = vec![0; n];
        for (i, &image) in images.iter().enumerate() {
            let slot = match (image as usize).checked_sub(1) {
                Some(slot) if slot < n => slot,
                _ => {
                    return Err(ScoreError::invalid_permutation(format!(
                        "vertex {} maps to {}, outside [1, {}]",
                        i + 1,
                        image,
                        n
                    )));
                }
            };
            if inverse[slot] != 0 {
                return Err(ScoreError::invalid_permutation(format!(
                    "vertices {} and {} both map to {}",
                    inverse[slot],
                    i + 1,
                    image
                )));
            }
            inverse[slot] = (i + 1) as VertexId;
        }
        Ok(Permutation {
            forward: images,
            inverse,
        })
    }

    pub fn identity(n: usize) -> Permutation {
        let ids: Vec<VertexId> = (1..=n).map(|v| v as VertexId).collect();
        Permutation {
            forward: ids.clone(),
            inverse: ids,
        }
    }

    /// N, the number of vertices permuted.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Panics if `v` is outside `[1, N]`.
    #[inline]
    pub fn image(&self, v: VertexId) -> VertexId {
        self.forward[v as usize - 1]
    }

    /// The vertex mapped onto `v`. Panics if `v` is outside `[1, N]`.
    #[inline]
    pub fn preimage(&self, v: VertexId) -> VertexId {
        self.inverse[v as usize - 1]
    }

    pub fn images(&self) -> &[VertexId] {
        &self.forward
    }
}
