use crate::core::basis::LatticeVector;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Space-separated components, e.g. `1 -1 0`.
pub fn format_components(v: &LatticeVector) -> String {
    v.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

/// Braced form used when echoing parsed input, e.g. `{1 -1 0}`.
pub fn format_braced(v: &LatticeVector) -> String {
    format!("{{{}}}", format_components(v))
}

/// Writes the shortest-vector norm as a bare number, replacing any previous file.
pub fn write_result(path: &Path, norm: f64) -> Result<()> {
    fs::write(path, norm.to_string()).with_context(|| format!("Could not write result file: {:?}", path))
}
