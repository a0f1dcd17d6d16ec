use crate::core::basis::LatticeVector;
use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;

/// Parses one numeric token, rejecting NaN and infinities.
fn parse_component(s: &str) -> Result<f64> {
    let value = s.parse::<f64>().with_context(|| format!("Failed to parse '{}' as a number", s))?;
    if !value.is_finite() {
        bail!("Component '{}' is not a finite number", s);
    }
    Ok(value)
}

/// Moves a pending token (if any) into the open vector.
fn flush_token(token: &mut String, components: &mut Vec<f64>) -> Result<()> {
    if !token.is_empty() {
        components.push(parse_component(token)?);
        token.clear();
    }
    Ok(())
}

/// Parses bracketed vectors such as `[1 0 0] [0 1 0] [0 0 1]`.
///
/// Components are separated by whitespace and/or commas. Anything outside a
/// bracket pair other than separators is an error, as are nested or unbalanced
/// brackets and empty groups. Vector lengths are not checked here; that is the
/// basis' job.
pub fn parse_vectors(input: &str) -> Result<Vec<LatticeVector>> {
    let mut vectors = Vec::new();
    let mut open: Option<Vec<f64>> = None;
    let mut token = String::new();

    for (pos, ch) in input.char_indices() {
        match ch {
            '[' => {
                if open.is_some() {
                    bail!("Nested '[' at position {}", pos);
                }
                open = Some(Vec::new());
            }
            ']' => {
                let mut components = open.take().ok_or_else(|| anyhow!("Unmatched ']' at position {}", pos))?;
                flush_token(&mut token, &mut components)?;
                if components.is_empty() {
                    bail!("Empty vector ending at position {}", pos);
                }
                vectors.push(LatticeVector::from_vec(components));
            }
            c if c.is_whitespace() || c == ',' => {
                if let Some(components) = open.as_mut() {
                    flush_token(&mut token, components)?;
                }
            }
            c => {
                if open.is_none() {
                    bail!("Invalid vector format: unexpected '{}' at position {} outside brackets", c, pos);
                }
                token.push(c);
            }
        }
    }

    if open.is_some() {
        bail!("Invalid vector format: unclosed '['");
    }
    if vectors.is_empty() {
        bail!("No vectors found in input");
    }
    Ok(vectors)
}

/// Parses vectors split across command-line arguments (`[1` `0]` `[0` `1]`).
pub fn from_args(args: &[String]) -> Result<Vec<LatticeVector>> {
    parse_vectors(&args.join(" "))
}

/// Reads a basis file; same grammar as [`parse_vectors`], newlines are separators.
pub fn from_file(path: &Path) -> Result<Vec<LatticeVector>> {
    let contents = fs::read_to_string(path).with_context(|| format!("Could not read basis file: {:?}", path))?;
    parse_vectors(&contents).with_context(|| format!("Invalid basis file: {:?}", path))
}
