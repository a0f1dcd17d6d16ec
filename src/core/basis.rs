use crate::core::error::LatticeError;
use nalgebra::DVector;
use std::ops::Index;

// ============================================================================
// TYPES
// ============================================================================

/// A single lattice vector. Components are real-valued; integer lattices are
/// carried as exact small floats.
pub type LatticeVector = DVector<f64>;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// An ordered, validated lattice basis.
///
/// `dim` is the vector count. Every vector holds the same number of components,
/// and that number is at least `dim`. Reduction only ever touches the first `dim`
/// components; anything past that rides along unchanged but still counts towards
/// the whole-vector norm.
#[derive(Debug, Clone, PartialEq)]
pub struct Basis {
    vectors: Vec<LatticeVector>,
    dim: usize,
}

impl Basis {
    pub fn new(vectors: Vec<LatticeVector>) -> Result<Self, LatticeError> {
        let first = vectors.first().ok_or(LatticeError::EmptyBasis)?;
        let components = first.len();

        for (index, v) in vectors.iter().enumerate() {
            if v.len() != components {
                return Err(LatticeError::DimensionMismatch {
                    index,
                    expected: components,
                    found: v.len(),
                });
            }
            if v.iter().any(|c| !c.is_finite()) {
                return Err(LatticeError::NonFiniteComponent { index });
            }
        }

        let dim = vectors.len();
        if components < dim {
            return Err(LatticeError::NonSquareBasis { vectors: dim, components });
        }

        Ok(Self { vectors, dim })
    }

    /// Convenience constructor from plain rows, mostly for tests and demos.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LatticeError> {
        Self::new(rows.iter().map(|r| LatticeVector::from_row_slice(r)).collect())
    }

    /// Reduction dimension (number of vectors).
    pub fn dim(&self) -> usize { self.dim }

    /// Components per vector. Equal to `dim` for a square basis.
    pub fn components(&self) -> usize { self.vectors[0].len() }

    pub fn vectors(&self) -> &[LatticeVector] { &self.vectors }

    pub fn into_vectors(self) -> Vec<LatticeVector> { self.vectors }

    /// `basis[target] -= coeff * basis[source]` over the first `dim` components.
    pub fn subtract_scaled(&mut self, target: usize, source: usize, coeff: f64) {
        self.axpy(target, source, -coeff);
    }

    /// `basis[target] += coeff * basis[source]` over the first `dim` components.
    /// Used to undo a rejected `subtract_scaled` with the same coefficient.
    pub fn add_scaled(&mut self, target: usize, source: usize, coeff: f64) {
        self.axpy(target, source, coeff);
    }

    fn axpy(&mut self, target: usize, source: usize, factor: f64) {
        let dim = self.dim;
        let (t, s) = self.pair_mut(target, source);
        t.rows_mut(0, dim).axpy(factor, &s.rows(0, dim), 1.0);
    }

    /// Mutable access to one vector alongside shared access to another.
    fn pair_mut(&mut self, target: usize, source: usize) -> (&mut LatticeVector, &LatticeVector) {
        assert_ne!(target, source, "a vector cannot be reduced against itself");
        if target < source {
            let (lo, hi) = self.vectors.split_at_mut(source);
            (&mut lo[target], &hi[0])
        } else {
            let (lo, hi) = self.vectors.split_at_mut(target);
            (&mut hi[0], &lo[source])
        }
    }
}

impl Index<usize> for Basis {
    type Output = LatticeVector;

    fn index(&self, i: usize) -> &LatticeVector { &self.vectors[i] }
}
