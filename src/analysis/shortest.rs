use crate::core::basis::LatticeVector;
use crate::math::vector_ops::norm;

/// The shortest non-zero vector found in a basis.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestVector {
    /// Position in the scanned basis.
    pub index: usize,
    pub vector: LatticeVector,
    /// Whole-vector Euclidean norm.
    pub norm: f64,
}

/// Picks the basis vector of minimal positive norm.
///
/// This only ranks the vectors already in the basis; it does not enumerate
/// lattice points.
pub struct ShortestVectorSelector;

impl ShortestVectorSelector {
    /// Returns `None` when no vector has a positive norm.
    /// Ties go to the earliest vector.
    pub fn select(vectors: &[LatticeVector]) -> Option<ShortestVector> {
        let mut best: Option<(usize, f64)> = None;

        for (index, v) in vectors.iter().enumerate() {
            let n = norm(v);
            let better = match best {
                Some((_, min)) => n < min,
                None => true,
            };
            // NaN fails both comparisons, so it is never picked.
            if n > 0.0 && better {
                best = Some((index, n));
            }
        }

        best.map(|(index, min_norm)| ShortestVector {
            index,
            vector: vectors[index].clone(),
            norm: min_norm,
        })
    }
}
