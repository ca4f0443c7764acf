//! Dense linear system solving with automatic method selection
//!
//! Each augmented input `[A|b]` is screened for symmetric
//! positive-definiteness and routed to Cholesky factorization when the
//! screen passes or to Doolittle LU decomposition otherwise. Companion
//! modules provide the Gaussian and Student-t probability utilities the
//! command-line tool exposes alongside the solver.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Numerical utilities for probability computation
pub mod math;
/// Factorization, classification, and solve dispatch
pub mod solver;

pub use io::error::{Result, SolverError};
pub use solver::dispatch::{DenseSolver, Solution, SolveMethod};
