use crate::core::basis::Basis;
use crate::core::error::LatticeError;
use crate::math::gram_schmidt::GramSchmidtReducer;
use crate::math::vector_ops::projection_coefficient;
use log::debug;

/// Repeated LLL-style size reduction (floating point).
///
/// There is no Lovász condition and no swap step: each iteration is a
/// reverse-order size-reduction sweep followed by one Gram-Schmidt pass, and
/// exactly `max_iterations` iterations always run.
#[derive(Debug, Clone, Copy)]
pub struct LllReducer {
    max_iterations: usize,
}

impl Default for LllReducer {
    fn default() -> Self {
        Self::new(crate::DEFAULT_LLL_ITERATIONS)
    }
}

impl LllReducer {
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    pub fn max_iterations(&self) -> usize { self.max_iterations }

    pub fn reduce(&self, basis: &mut Basis) -> Result<(), LatticeError> {
        let n = basis.dim();

        for _ in 0..self.max_iterations {
            // Descending j, unlike the ascending Gram-Schmidt pass below.
            for i in 0..n {
                for j in (0..i).rev() {
                    let coeff = projection_coefficient(basis, i, j)?;
                    if coeff != 0.0 {
                        basis.subtract_scaled(i, j, coeff);
                    }
                }
            }

            GramSchmidtReducer::reduce(basis)?;
        }

        debug!("LLL loop finished: {} iterations, dim {}", self.max_iterations, n);
        Ok(())
    }
}
