use thiserror::Error;

/// Failures of the numeric reduction core.
///
/// Every variant describes a basis the reducers cannot work with. The core never
/// lets NaN or infinite components leak into a basis; it stops with one of these instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    #[error("basis contains no vectors")]
    EmptyBasis,

    #[error("vector {index} has {found} components, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Fewer components per vector than there are vectors.
    #[error("basis of {vectors} vectors needs at least {vectors} components per vector, got {components}")]
    NonSquareBasis { vectors: usize, components: usize },

    #[error("vector {index} has a NaN or infinite component")]
    NonFiniteComponent { index: usize },

    /// Projection onto a zero vector (division by a zero squared length).
    #[error("degenerate basis: vector {index} is the zero vector and cannot be projected onto")]
    DegenerateBasis { index: usize },

    #[error("projection of vector {target} onto vector {onto} is not finite")]
    NonFiniteCoefficient { target: usize, onto: usize },

    #[error("no vector with positive norm in the reduced basis")]
    NoShortestVector,
}
