//! Cholesky factorization for symmetric positive-definite matrices
//!
//! Builds the lower-triangular factor `L` with `A = L·Lᵗ` using the
//! Cholesky–Banachiewicz ordering: rows top to bottom, each row reading
//! only rows already completed.

use crate::io::error::{Result, SolverError};
use ndarray::Array2;

/// Factor a symmetric positive-definite matrix into its lower-triangular
/// Cholesky factor
///
/// The diagonal entries are `L[i][i] = sqrt(A[i][i] − Σ_{k<i} L[i][k]²)`
/// and the off-diagonal entries for `j < i` are
/// `L[i][j] = (A[i][j] − Σ_{k<j} L[i][k]·L[j][k]) / L[j][j]`.
///
/// A negative radicand is reported rather than coerced: taking the
/// absolute value would fabricate a factor for a matrix that has none.
///
/// # Errors
///
/// Returns [`SolverError::DimensionMismatch`] for a non-square input,
/// [`SolverError::NotPositiveDefinite`] when a diagonal radicand goes
/// negative, and [`SolverError::SingularSystem`] when a computed
/// diagonal divisor is exactly zero.
// Exact float comparison: a zero divisor is the singularity signal itself
#[allow(clippy::float_cmp)]
pub fn factor(a: &Array2<f64>) -> Result<Array2<f64>> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(SolverError::DimensionMismatch {
            rows,
            cols,
            reason: "Cholesky factorization requires a square matrix",
        });
    }

    let n = rows;
    let mut lower = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in 0..=i {
            let a_ij = a.get([i, j]).copied().unwrap_or(0.0);

            if i == j {
                let sum_of_squares = (0..j).fold(0.0_f64, |acc, k| {
                    let l_ik = lower.get([i, k]).copied().unwrap_or(0.0);
                    l_ik.mul_add(l_ik, acc)
                });
                let radicand = a_ij - sum_of_squares;
                if radicand < 0.0 {
                    return Err(SolverError::NotPositiveDefinite { row: i });
                }
                if let Some(slot) = lower.get_mut([i, j]) {
                    *slot = radicand.sqrt();
                }
            } else {
                let cross_sum = (0..j).fold(0.0_f64, |acc, k| {
                    let l_ik = lower.get([i, k]).copied().unwrap_or(0.0);
                    let l_jk = lower.get([j, k]).copied().unwrap_or(0.0);
                    l_ik.mul_add(l_jk, acc)
                });
                let divisor = lower.get([j, j]).copied().unwrap_or(0.0);
                if divisor == 0.0 {
                    return Err(SolverError::SingularSystem { index: j });
                }
                if let Some(slot) = lower.get_mut([i, j]) {
                    *slot = (a_ij - cross_sum) / divisor;
                }
            }
        }
    }

    Ok(lower)
}
