//! Method selection and top-level solve orchestration
//!
//! One call moves through split, classify, and a single factorization
//! path. A failure inside the Cholesky path is fatal for that call:
//! there is no silent retry through the general path, so the caller
//! always learns that the classifier and the factorization disagreed.

use crate::io::error::Result;
use crate::solver::classify::SpdClassifier;
use crate::solver::matrix::split_augmented;
use crate::solver::triangular::{backward_substitute, forward_substitute};
use crate::solver::{cholesky, doolittle};
use ndarray::{Array1, Array2};

/// Decomposition strategy chosen for a solve call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMethod {
    /// Cholesky factorization, valid for symmetric positive-definite
    /// coefficient blocks
    Cholesky,
    /// Doolittle LU decomposition, the general fallback
    Doolittle,
}

impl SolveMethod {
    /// Human-readable method name for reporting
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cholesky => "Cholesky",
            Self::Doolittle => "Doolittle",
        }
    }
}

/// Solution vector together with the method that produced it
///
/// Owned by the caller; the solver keeps no per-call state behind.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Solution vector `x` with `A·x = b`
    pub x: Array1<f64>,
    /// Decomposition strategy that produced `x`
    pub method: SolveMethod,
}

/// Dense solver that routes each system to the applicable factorization
///
/// Holds only the seeded classifier; every solve call allocates fresh
/// factors and intermediates, so independent calls on separate inputs
/// are safe from separate threads.
#[derive(Debug, Clone)]
pub struct DenseSolver {
    classifier: SpdClassifier,
}

impl DenseSolver {
    /// Create a solver whose classifier draws from the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            classifier: SpdClassifier::new(seed),
        }
    }

    /// Solve the augmented system `[A|b]`
    ///
    /// Splits the input, screens the coefficient block, then either
    /// factors `A = L·Lᵗ` and substitutes through both triangles, or
    /// delegates the full augmented matrix to the Doolittle path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::DimensionMismatch`] for a malformed
    /// augmented matrix, [`crate::SolverError::NotPositiveDefinite`] when
    /// the Cholesky radicand goes negative despite classifier approval,
    /// and [`crate::SolverError::SingularSystem`] on zero pivots in
    /// either path.
    pub fn solve(&mut self, aug: &Array2<f64>) -> Result<Solution> {
        let (coefficients, rhs) = split_augmented(aug)?;

        if self.classifier.is_symmetric_positive_definite(&coefficients) {
            let x = solve_cholesky(&coefficients, &rhs)?;
            Ok(Solution {
                x,
                method: SolveMethod::Cholesky,
            })
        } else {
            let x = doolittle::solve(aug)?;
            Ok(Solution {
                x,
                method: SolveMethod::Doolittle,
            })
        }
    }
}

fn solve_cholesky(coefficients: &Array2<f64>, rhs: &Array1<f64>) -> Result<Array1<f64>> {
    let lower = cholesky::factor(coefficients)?;
    let upper = lower.t().to_owned();
    let intermediate = forward_substitute(&lower, rhs)?;
    backward_substitute(&upper, &intermediate)
}
