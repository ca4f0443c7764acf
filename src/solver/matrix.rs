//! Dense matrix helpers shared by the factorization and dispatch stages
//!
//! The augmented representation `[A|b]` is the external input format: the
//! coefficient block occupies all columns but the last, and the final
//! column is the right-hand side of `A·x = b`.

use crate::io::error::{Result, SolverError};
use ndarray::{Array1, Array2};

/// Split an augmented matrix `[A|b]` into its coefficient block and
/// right-hand-side vector
///
/// The coefficient block must be square, which for an augmented input
/// means width = height + 1. Shape violations are reported, never
/// silently truncated.
///
/// # Errors
///
/// Returns [`SolverError::DimensionMismatch`] if the input is empty,
/// narrower than two columns, or not exactly one column wider than it
/// is tall.
pub fn split_augmented(aug: &Array2<f64>) -> Result<(Array2<f64>, Array1<f64>)> {
    let (rows, cols) = aug.dim();

    if rows == 0 || cols < 2 {
        return Err(SolverError::DimensionMismatch {
            rows,
            cols,
            reason: "augmented matrix needs at least one row and two columns",
        });
    }
    if cols != rows + 1 {
        return Err(SolverError::DimensionMismatch {
            rows,
            cols,
            reason: "augmented matrix must have width = height + 1",
        });
    }

    let mut coefficients = Array2::<f64>::zeros((rows, rows));
    for i in 0..rows {
        for j in 0..rows {
            if let Some(slot) = coefficients.get_mut([i, j]) {
                *slot = aug.get([i, j]).copied().unwrap_or(0.0);
            }
        }
    }

    let rhs: Array1<f64> = (0..rows)
        .map(|i| aug.get([i, cols - 1]).copied().unwrap_or(0.0))
        .collect();

    Ok((coefficients, rhs))
}

/// Check whether a matrix equals its transpose
///
/// The comparison is exact element equality with no tolerance: a matrix
/// that is symmetric up to rounding noise does not qualify.
pub fn is_symmetric(a: &Array2<f64>) -> bool {
    a.nrows() == a.ncols() && *a == a.t()
}

/// Evaluate the quadratic form `vᵗAv`
///
/// The sign of this value for a random probe vector is the
/// positive-definiteness heuristic used by the classifier.
pub fn quadratic_form(a: &Array2<f64>, v: &Array1<f64>) -> f64 {
    let n = v.len();
    (0..n).fold(0.0_f64, |outer, i| {
        let row_dot = (0..n).fold(0.0_f64, |inner, j| {
            let a_ij = a.get([i, j]).copied().unwrap_or(0.0);
            let v_j = v.get(j).copied().unwrap_or(0.0);
            a_ij.mul_add(v_j, inner)
        });
        let v_i = v.get(i).copied().unwrap_or(0.0);
        v_i.mul_add(row_dot, outer)
    })
}

/// Maximum absolute component of the residual `A·x − b`
///
/// Used to report solution quality without committing to any particular
/// acceptance threshold.
pub fn residual_norm(a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>) -> f64 {
    let product = a.dot(x);
    product
        .iter()
        .zip(b.iter())
        .fold(0.0_f64, |max, (ax_i, b_i)| (ax_i - b_i).abs().max(max))
}
