//! Command-line interface for batch solving and probability lookups

use crate::io::configuration::{
    DEFAULT_MEAN, DEFAULT_PROBABILITY, DEFAULT_SEED, DEFAULT_ST_DEV, DEFAULT_THRESHOLD,
    RESIDUAL_WARN_THRESHOLD, SYSTEM_FILE_EXTENSION,
};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::io::input::load_systems;
use crate::io::progress::ProgressManager;
use crate::math::{gaussian, student};
use crate::solver::dispatch::{DenseSolver, Solution};
use crate::solver::matrix::{residual_norm, split_augmented};
use clap::{Args, Parser, Subcommand};
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Command-line arguments for the dense solver tool
#[derive(Parser)]
#[command(name = "densolve")]
#[command(
    author,
    version,
    about = "Solve dense linear systems with automatic method selection"
)]
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed by the tool
#[derive(Subcommand)]
pub enum Command {
    /// Solve augmented systems from a file or directory of system files
    Solve(SolveArgs),
    /// Gaussian probability for a given threshold
    Probability(ProbabilityArgs),
    /// Invert a Gaussian probability back to its threshold
    Critical(CriticalArgs),
    /// Student-t cumulative distribution value
    TCdf(TCdfArgs),
}

/// Arguments for the `solve` subcommand
#[derive(Args)]
pub struct SolveArgs {
    /// Input system file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible classification
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `probability` subcommand
#[derive(Args)]
pub struct ProbabilityArgs {
    /// Population mean
    #[arg(long, default_value_t = DEFAULT_MEAN)]
    pub mean: f64,

    /// Population standard deviation
    #[arg(long, default_value_t = DEFAULT_ST_DEV)]
    pub st_dev: f64,

    /// Threshold value c
    #[arg(short = 'c', long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Compute the probability of exceeding the threshold
    #[arg(short, long)]
    pub greater_than: bool,

    /// Use the symmetric two-sided band around the mean
    #[arg(short, long)]
    pub two_sided: bool,
}

/// Arguments for the `critical` subcommand
#[derive(Args)]
pub struct CriticalArgs {
    /// Population mean
    #[arg(long, default_value_t = DEFAULT_MEAN)]
    pub mean: f64,

    /// Population standard deviation
    #[arg(long, default_value_t = DEFAULT_ST_DEV)]
    pub st_dev: f64,

    /// Target probability to invert
    #[arg(short, long, default_value_t = DEFAULT_PROBABILITY)]
    pub probability: f64,

    /// Invert the probability of exceeding the threshold
    #[arg(short, long)]
    pub greater_than: bool,

    /// Use the symmetric two-sided band around the mean
    #[arg(short, long)]
    pub two_sided: bool,
}

/// Arguments for the `t-cdf` subcommand
#[derive(Args)]
pub struct TCdfArgs {
    /// Degrees of freedom
    #[arg(short = 'm', long)]
    pub degrees_of_freedom: f64,

    /// Evaluation point z
    #[arg(short, long, allow_hyphen_values = true)]
    pub z: f64,
}

/// Execute the parsed command
///
/// # Errors
///
/// Propagates any solver, parse, or file system error raised by the
/// selected subcommand.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Solve(args) => SolveRunner::new(args).process(),
        Command::Probability(args) => run_probability(&args),
        Command::Critical(args) => run_critical(&args),
        Command::TCdf(args) => run_t_cdf(&args),
    }
}

/// Orchestrates batch solving of system files with progress tracking
pub struct SolveRunner {
    args: SolveArgs,
    progress: Option<ProgressManager>,
}

impl SolveRunner {
    /// Create a runner for the given solve arguments
    pub const fn new(args: SolveArgs) -> Self {
        Self {
            args,
            progress: None,
        }
    }

    /// Solve every system in the target file or directory
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid, a system file cannot
    /// be read or parsed, or any contained system fails to solve.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        if !self.args.quiet {
            self.progress = Some(ProgressManager::new(files.len()));
        }

        // One classifier stream across the whole batch keeps runs
        // reproducible for a given seed and file order
        let mut solver = DenseSolver::new(self.args.seed);

        for file in &files {
            if let Some(pm) = &self.progress {
                pm.start_file(file);
            }
            Self::process_file(&mut solver, file)?;
            if let Some(pm) = &self.progress {
                pm.advance();
            }
        }

        if let Some(pm) = &self.progress {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;

        if target.is_file() {
            return Ok(vec![target.clone()]);
        }

        if target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(target).map_err(|source| SolverError::FileSystem {
                    path: target.clone(),
                    operation: "read directory",
                    source,
                })?;
            for entry in entries {
                let path = entry
                    .map_err(|source| SolverError::FileSystem {
                        path: target.clone(),
                        operation: "read directory entry",
                        source,
                    })?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some(SYSTEM_FILE_EXTENSION) {
                    files.push(path);
                }
            }
            files.sort();
            return Ok(files);
        }

        Err(invalid_parameter(
            "target",
            &target.display(),
            &"must be an existing file or directory",
        ))
    }

    fn process_file(solver: &mut DenseSolver, path: &Path) -> Result<()> {
        let systems = load_systems(path)?;
        for (index, aug) in systems.iter().enumerate() {
            let solution = solver.solve(aug)?;
            report_solution(index + 1, aug, &solution)?;
        }
        Ok(())
    }
}

// Allow print for user-facing results
#[allow(clippy::print_stdout)]
fn report_solution(index: usize, aug: &Array2<f64>, solution: &Solution) -> Result<()> {
    let (coefficients, rhs) = split_augmented(aug)?;
    let residual = residual_norm(&coefficients, &solution.x, &rhs);
    let n = coefficients.nrows();

    let entries: Vec<String> = solution.x.iter().map(|v| format!("{v:.6}")).collect();
    let joined = entries.join(", ");
    let flag = if residual > RESIDUAL_WARN_THRESHOLD {
        " [large residual]"
    } else {
        ""
    };

    println!(
        "System {index} ({n}x{n}) via {}: x = [{joined}] (residual {residual:.3e}{flag})",
        solution.method.name()
    );

    Ok(())
}

// Allow print for user-facing results
#[allow(clippy::print_stdout)]
fn run_probability(args: &ProbabilityArgs) -> Result<()> {
    let mean = args.mean;
    let st_dev = args.st_dev;
    let c = args.threshold;

    if args.two_sided {
        let inside = gaussian::two_sided_inside(mean, st_dev, c)?;
        let low_edge = 2.0_f64.mul_add(mean, -c);
        if args.greater_than {
            println!(
                "P(x outside [{low_edge:.2}, {c:.2}] | mean={mean:.2}, st-dev={st_dev:.2}) = {:.4}",
                1.0 - inside
            );
        } else {
            println!(
                "P({low_edge:.2} < x < {c:.2} | mean={mean:.2}, st-dev={st_dev:.2}) = {inside:.4}"
            );
        }
    } else {
        let p = gaussian::probability(mean, st_dev, c, args.greater_than)?;
        let relation = if args.greater_than { '>' } else { '<' };
        println!("P(x {relation} {c:.2} | mean={mean:.2}, st-dev={st_dev:.2}) = {p:.4}");
    }

    Ok(())
}

// Allow print for user-facing results
#[allow(clippy::print_stdout)]
fn run_critical(args: &CriticalArgs) -> Result<()> {
    let c = gaussian::critical_value(
        args.mean,
        args.st_dev,
        args.probability,
        args.greater_than,
        args.two_sided,
    )?;

    let achieved = if args.two_sided {
        let inside = gaussian::two_sided_inside(args.mean, args.st_dev, c)?;
        if args.greater_than { 1.0 - inside } else { inside }
    } else {
        gaussian::probability(args.mean, args.st_dev, c, args.greater_than)?
    };

    println!("c = {c:.4} with probability {achieved:.4}");

    Ok(())
}

// Allow print for user-facing results
#[allow(clippy::print_stdout)]
fn run_t_cdf(args: &TCdfArgs) -> Result<()> {
    let value = student::cdf(args.z, args.degrees_of_freedom)?;
    println!(
        "F(z) = {value:.6} for df = {}, z = {}",
        args.degrees_of_freedom, args.z
    );
    Ok(())
}
