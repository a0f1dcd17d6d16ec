use crate::core::basis::{Basis, LatticeVector};
use crate::core::error::LatticeError;

/// Dot product over the first `dim` components.
///
/// Both vectors must have at least `dim` components; the view panics otherwise.
pub fn dot(u: &LatticeVector, v: &LatticeVector, dim: usize) -> f64 {
    u.rows(0, dim).dot(&v.rows(0, dim))
}

/// Euclidean norm over every component of `v`.
pub fn norm(v: &LatticeVector) -> f64 {
    v.norm()
}

/// Euclidean length over the first `dim` components only.
///
/// Not interchangeable with [`norm`]: the greedy pass measures progress with this,
/// final reporting uses [`norm`].
pub fn length(v: &LatticeVector, dim: usize) -> f64 {
    v.rows(0, dim).norm()
}

/// Nearest-integer projection ratio of `basis[target]` onto `basis[source]`,
/// measured over the basis dimension.
///
/// Rounds half away from zero (`f64::round`), so a ratio of exactly 0.5 gives 1.
pub fn projection_coefficient(basis: &Basis, target: usize, source: usize) -> Result<f64, LatticeError> {
    let dim = basis.dim();
    let denom = dot(&basis[source], &basis[source], dim);
    if denom == 0.0 {
        return Err(LatticeError::DegenerateBasis { index: source });
    }
    let ratio = dot(&basis[target], &basis[source], dim) / denom;
    if !ratio.is_finite() {
        return Err(LatticeError::NonFiniteCoefficient { target, onto: source });
    }
    Ok(ratio.round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn v(c: &[f64]) -> LatticeVector { LatticeVector::from_row_slice(c) }

    #[test]
    fn dot_respects_dimension_prefix() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, 5.0, 6.0]);
        assert_eq!(dot(&a, &b, 3), 32.0);
        assert_eq!(dot(&a, &b, 2), 14.0);
        assert_eq!(dot(&a, &b, 0), 0.0);
    }

    #[test]
    fn norm_and_length_differ_on_wide_vectors() {
        let a = v(&[3.0, 4.0, 12.0]);
        assert_abs_diff_eq!(norm(&a), 13.0, epsilon = 1e-12);
        assert_abs_diff_eq!(length(&a, 2), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(length(&a, 3), norm(&a), epsilon = 1e-12);
    }

    fn coeff(rows: &[Vec<f64>]) -> Result<f64, LatticeError> {
        let basis = Basis::from_rows(rows).unwrap();
        projection_coefficient(&basis, 1, 0)
    }

    #[test]
    fn coefficient_rounds_to_nearest() {
        // 8 / 10 = 0.8
        assert_eq!(coeff(&[vec![3.0, 1.0], vec![4.0, 2.0]]), Ok(1.0));
        // 24 / 10 = 2.4
        assert_eq!(coeff(&[vec![3.0, 1.0], vec![7.0, 3.0]]), Ok(2.0));
        // -3 / 10 = -0.3
        assert_eq!(coeff(&[vec![3.0, 1.0], vec![-1.0, 0.0]]), Ok(0.0));
    }

    #[test]
    fn coefficient_ties_round_away_from_zero() {
        // 2 / 4 = 0.5 and -2 / 4 = -0.5
        assert_eq!(coeff(&[vec![2.0, 0.0], vec![1.0, 1.0]]), Ok(1.0));
        assert_eq!(coeff(&[vec![2.0, 0.0], vec![-1.0, 1.0]]), Ok(-1.0));
    }

    #[test]
    fn coefficient_ignores_trailing_components() {
        // Leading components give 2 / 4 = 0.5; the full vectors would give -98 / 104.
        assert_eq!(coeff(&[vec![2.0, 0.0, 10.0], vec![1.0, 1.0, -10.0]]), Ok(1.0));
    }

    #[test]
    fn coefficient_onto_zero_vector_is_degenerate() {
        let err = coeff(&[vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap_err();
        assert_eq!(err, LatticeError::DegenerateBasis { index: 0 });
    }

    #[test]
    fn coefficient_overflow_is_reported() {
        let err = coeff(&[vec![1e-160, 0.0], vec![1e300, 1e300]]).unwrap_err();
        assert_eq!(err, LatticeError::NonFiniteCoefficient { target: 1, onto: 0 });
    }
}
