use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use glob::glob;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

use lattice_reducer::{parser, reduce_lattice, writer, LatticeVector, ReductionConfig};

#[derive(Parser)]
#[command(name = "lattice-reduce", author, version, about = "Lattice basis reduction and shortest-vector search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct ReductionArgs {
    /// Iterations of the LLL-style reduction loop.
    #[arg(long, default_value_t = lattice_reducer::DEFAULT_LLL_ITERATIONS)]
    lll_iterations: usize,

    /// Sweep cap for the greedy post-processing pass.
    #[arg(long, default_value_t = lattice_reducer::DEFAULT_GREEDY_ITERATIONS)]
    greedy_iterations: usize,

    /// Skip the greedy post-processing pass.
    #[arg(long)]
    no_postprocess: bool,
}

impl ReductionArgs {
    fn config(&self) -> ReductionConfig {
        ReductionConfig {
            lll_iterations: self.lll_iterations,
            greedy_iterations: self.greedy_iterations,
            postprocess: !self.no_postprocess,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Reduces one basis given as bracketed vectors, e.g. `[1 0 0] [0 1 0] [0 0 1]`.
    Reduce {
        /// Vectors on the command line.
        #[arg(allow_hyphen_values = true)]
        vectors: Vec<String>,

        /// Read the vectors from a file instead.
        #[arg(short, long, conflicts_with = "vectors")]
        input: Option<PathBuf>,

        /// Where the shortest-vector norm is written.
        #[arg(short, long, default_value = "result.txt")]
        output: PathBuf,

        #[command(flatten)]
        reduction: ReductionArgs,
    },
    /// Reduces every basis file matching a glob pattern.
    Batch {
        /// Glob pattern, e.g. `bases/*.txt`.
        pattern: String,

        #[command(flatten)]
        reduction: ReductionArgs,
    },
}

fn main() {
    // Usage errors exit with 1 like every other failure; help/version still exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        std::process::exit(code);
    });

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let start_time = Instant::now();

    match cli.command {
        Commands::Reduce { vectors, input, output, reduction } => {
            let parsed = match input {
                Some(path) => parser::from_file(&path)?,
                None if vectors.is_empty() => {
                    bail!("Usage: lattice-reduce reduce [a b c] [d e f] [g h i] ... (or --input FILE)")
                }
                None => parser::from_args(&vectors)?,
            };

            println!("Parsed Vectors:");
            for v in &parsed {
                println!("{}", writer::format_braced(v));
            }

            let outcome = reduce_lattice(parsed, &reduction.config())?;

            println!("\nBasis Vectors after LLL reduction:");
            for v in outcome.reduced.vectors() {
                println!("{}", writer::format_components(v));
            }

            println!("\nShortest Vector after LLL reduction:");
            println!("{}", writer::format_components(&outcome.shortest.vector));
            println!("Euclidean Norm:\n{}", outcome.shortest.norm);

            writer::write_result(&output, outcome.shortest.norm)?;

            println!("\n{}", outcome.report);
            info!("Norm written to {:?} in {:.2?}", output, start_time.elapsed());
        }
        Commands::Batch { pattern, reduction } => {
            let config = reduction.config();
            let paths = glob(&pattern)
                .with_context(|| format!("Invalid glob pattern: {}", pattern))?
                .collect::<Result<Vec<_>, _>>()
                .context("Could not read a path matching the pattern")?;
            if paths.is_empty() {
                bail!("No files match {}", pattern);
            }

            let mut failures = 0;
            for path in &paths {
                match reduce_file(path, &config) {
                    Ok((norm, shortest)) => {
                        println!("{}: norm {} via {}", path.display(), norm, writer::format_braced(&shortest));
                    }
                    Err(e) => {
                        error!("{}: {:#}", path.display(), e);
                        failures += 1;
                    }
                }
            }

            info!("Reduced {} of {} bases in {:.2?}", paths.len() - failures, paths.len(), start_time.elapsed());
            if failures > 0 {
                bail!("{} of {} bases failed", failures, paths.len());
            }
        }
    }

    Ok(())
}

/// Reduces a single basis file and writes `<file>.result.txt` beside it.
fn reduce_file(path: &Path, config: &ReductionConfig) -> Result<(f64, LatticeVector)> {
    let vectors = parser::from_file(path)?;
    let outcome = reduce_lattice(vectors, config)?;

    let mut result_name = path.as_os_str().to_owned();
    result_name.push(".result.txt");
    writer::write_result(Path::new(&result_name), outcome.shortest.norm)?;

    Ok((outcome.shortest.norm, outcome.shortest.vector))
}
