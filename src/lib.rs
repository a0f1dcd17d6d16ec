// ============================================================================
// MODULE DECLARATIONS
// ============================================================================
pub mod core;
pub mod io;
pub mod math;
pub mod analysis;

// ============================================================================
// RE-EXPORTS (Public API)
// ============================================================================
pub use crate::core::basis::{Basis, LatticeVector};
pub use crate::core::error::LatticeError;
pub use crate::io::{parser, writer};

pub use crate::math::gram_schmidt::GramSchmidtReducer;
pub use crate::math::lll::LllReducer;
pub use crate::math::postprocess::{GreedyPostProcessor, PostProcessStats};
pub use crate::analysis::shortest::{ShortestVector, ShortestVectorSelector};

use anyhow::{Context, Result};
use log::debug;

/// Iterations of the LLL-style loop when nothing else is configured.
pub const DEFAULT_LLL_ITERATIONS: usize = 100;
/// Sweep cap of the greedy post-processing pass.
pub const DEFAULT_GREEDY_ITERATIONS: usize = 100;

// ============================================================================
// HIGH-LEVEL INTERFACE
// ============================================================================

/// Configuration for the reduction pipeline.
#[derive(Debug, Clone)]
pub struct ReductionConfig {
    pub lll_iterations: usize,
    pub greedy_iterations: usize,
    /// Run the greedy pass before the LLL loop.
    pub postprocess: bool,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            lll_iterations: DEFAULT_LLL_ITERATIONS,
            greedy_iterations: DEFAULT_GREEDY_ITERATIONS,
            postprocess: true,
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct ReductionOutcome {
    /// The basis as parsed.
    pub original: Basis,
    pub reduced: Basis,
    pub shortest: ShortestVector,
    /// `None` when the greedy pass was disabled.
    pub postprocess: Option<PostProcessStats>,
    pub report: String,
}

/// The master pipeline: validate, greedy pass, LLL loop, shortest-vector pick.
///
/// Errors carry a [`LatticeError`] underneath the context, reachable with
/// `downcast_ref`.
pub fn reduce_lattice(vectors: Vec<LatticeVector>, config: &ReductionConfig) -> Result<ReductionOutcome> {
    // 1. VALIDATION
    let original = Basis::new(vectors).context("Invalid lattice basis")?;
    let mut basis = original.clone();
    debug!("Basis accepted: {} vectors, {} components", basis.dim(), basis.components());

    // 2. GREEDY PHASE
    let postprocess = if config.postprocess {
        let stats = GreedyPostProcessor::new(config.greedy_iterations)
            .process(&mut basis)
            .context("Greedy post-processing failed")?;
        Some(stats)
    } else {
        None
    };

    // 3. LLL PHASE
    LllReducer::new(config.lll_iterations)
        .reduce(&mut basis)
        .context("LLL reduction failed")?;

    // 4. SELECTION
    let shortest = ShortestVectorSelector::select(basis.vectors())
        .ok_or(LatticeError::NoShortestVector)?;

    // 5. REPORT GENERATION
    let greedy_line = match &postprocess {
        Some(s) if s.converged => format!("{} sweeps, {} commits", s.sweeps, s.commits),
        Some(s) => format!("{} sweeps, {} commits (cap reached)", s.sweeps, s.commits),
        None => "skipped".to_string(),
    };
    let report = format!(
        "--- Reduction Report ---\n\
         • Dimension:       {} vectors x {} components\n\
         • Greedy pass:     {}\n\
         • LLL iterations:  {}\n\
         • Shortest vector: #{} (norm {:.6})",
        basis.dim(), basis.components(),
        greedy_line,
        config.lll_iterations,
        shortest.index, shortest.norm
    );

    Ok(ReductionOutcome {
        original,
        reduced: basis,
        shortest,
        postprocess,
        report,
    })
}
