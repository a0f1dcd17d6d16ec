use crate::core::basis::Basis;
use crate::core::error::LatticeError;
use crate::math::vector_ops::{length, projection_coefficient};
use log::{debug, warn};

/// Counters from a greedy post-processing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostProcessStats {
    /// Outer iterations (full N x N sweeps) executed, including the final idle one.
    pub sweeps: usize,
    /// Reduction steps kept because they strictly shortened their target.
    pub commits: usize,
    /// False when the iteration cap stopped the pass while it was still improving.
    pub converged: bool,
}

/// Best-effort pairwise reduction that only keeps strictly shortening steps.
///
/// Every ordered pair `(i, j)`, `i != j`, is tried with `i` outer and `j` inner.
/// A step `basis[i] -= c * basis[j]` is committed if the dimension-scoped length of
/// `basis[i]` drops, and otherwise undone by adding `c * basis[j]` back.
/// No vector's length ever increases.
#[derive(Debug, Clone, Copy)]
pub struct GreedyPostProcessor {
    max_iterations: usize,
}

impl Default for GreedyPostProcessor {
    fn default() -> Self {
        Self::new(crate::DEFAULT_GREEDY_ITERATIONS)
    }
}

impl GreedyPostProcessor {
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    pub fn max_iterations(&self) -> usize { self.max_iterations }

    pub fn process(&self, basis: &mut Basis) -> Result<PostProcessStats, LatticeError> {
        let n = basis.dim();
        let mut stats = PostProcessStats::default();

        for _ in 0..self.max_iterations {
            stats.sweeps += 1;
            let mut made_progress = false;

            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let coeff = projection_coefficient(basis, i, j)?;
                    if coeff == 0.0 {
                        continue;
                    }

                    let before = length(&basis[i], n);
                    basis.subtract_scaled(i, j, coeff);
                    let after = length(&basis[i], n);

                    if after < before {
                        made_progress = true;
                        stats.commits += 1;
                    } else {
                        basis.add_scaled(i, j, coeff);
                    }
                }
            }

            if !made_progress {
                stats.converged = true;
                break;
            }
        }

        if stats.converged {
            debug!("Greedy pass converged after {} sweeps ({} commits)", stats.sweeps, stats.commits);
        } else if self.max_iterations > 0 {
            warn!(
                "Greedy pass stopped at the {}-sweep cap while still improving ({} commits)",
                self.max_iterations, stats.commits
            );
        }
        Ok(stats)
    }
}
