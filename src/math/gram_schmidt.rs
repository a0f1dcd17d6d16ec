use crate::core::basis::Basis;
use crate::core::error::LatticeError;
use crate::math::vector_ops::projection_coefficient;

/// Integer-rounded size reduction in lower-triangular order.
///
/// Despite the name this is not an orthogonalization: each vector only has
/// whole multiples of the earlier basis vectors removed, so the result stays in
/// the same lattice.
pub struct GramSchmidtReducer;

impl GramSchmidtReducer {
    /// One pass: for every `i`, reduce `basis[i]` against `basis[0..i]` in ascending order.
    ///
    /// Stops at the first zero divisor with `DegenerateBasis`; the basis is then
    /// left partially reduced.
    pub fn reduce(basis: &mut Basis) -> Result<(), LatticeError> {
        let n = basis.dim();
        for i in 0..n {
            for j in 0..i {
                let coeff = projection_coefficient(basis, i, j)?;
                if coeff != 0.0 {
                    basis.subtract_scaled(i, j, coeff);
                }
            }
        }
        Ok(())
    }
}
