//! CLI entry point for the dense linear system solver

use clap::Parser;
use densolve::io::cli::{Cli, run};

fn main() -> densolve::Result<()> {
    run(Cli::parse())
}
