//! Forward and backward substitution for triangular systems
//!
//! Both routines are generic over the float type so the same kernels
//! serve `f64` production solves and reduced-precision experiments.

use crate::io::error::{Result, SolverError};
use ndarray::{Array1, Array2};
use num_traits::Float;

/// Solve `L·y = b` for lower-triangular `L` by forward substitution
///
/// Entries are computed in increasing index order; each `y[i]` depends
/// only on previously computed entries.
///
/// # Errors
///
/// Returns [`SolverError::DimensionMismatch`] if `L` is not square or
/// `b` has a different length, and [`SolverError::SingularSystem`] on a
/// zero diagonal entry.
pub fn forward_substitute<F: Float>(lower: &Array2<F>, rhs: &Array1<F>) -> Result<Array1<F>> {
    let n = check_triangular_shape(lower, rhs)?;

    let mut solution: Vec<F> = Vec::with_capacity(n);
    for i in 0..n {
        let accumulated = (0..i).fold(F::zero(), |acc, j| {
            let l_ij = lower.get([i, j]).copied().unwrap_or_else(F::zero);
            let y_j = solution.get(j).copied().unwrap_or_else(F::zero);
            l_ij.mul_add(y_j, acc)
        });

        let diagonal = lower.get([i, i]).copied().unwrap_or_else(F::zero);
        if diagonal == F::zero() {
            return Err(SolverError::SingularSystem { index: i });
        }

        let b_i = rhs.get(i).copied().unwrap_or_else(F::zero);
        solution.push((b_i - accumulated) / diagonal);
    }

    Ok(Array1::from_vec(solution))
}

/// Solve `U·x = y` for upper-triangular `U` by backward substitution
///
/// Entries are computed in decreasing index order, mirroring
/// [`forward_substitute`].
///
/// # Errors
///
/// Returns [`SolverError::DimensionMismatch`] if `U` is not square or
/// `y` has a different length, and [`SolverError::SingularSystem`] on a
/// zero diagonal entry.
pub fn backward_substitute<F: Float>(upper: &Array2<F>, rhs: &Array1<F>) -> Result<Array1<F>> {
    let n = check_triangular_shape(upper, rhs)?;

    let mut solution: Vec<F> = vec![F::zero(); n];
    for i in (0..n).rev() {
        let accumulated = (i + 1..n).fold(F::zero(), |acc, j| {
            let u_ij = upper.get([i, j]).copied().unwrap_or_else(F::zero);
            let x_j = solution.get(j).copied().unwrap_or_else(F::zero);
            u_ij.mul_add(x_j, acc)
        });

        let diagonal = upper.get([i, i]).copied().unwrap_or_else(F::zero);
        if diagonal == F::zero() {
            return Err(SolverError::SingularSystem { index: i });
        }

        let y_i = rhs.get(i).copied().unwrap_or_else(F::zero);
        if let Some(slot) = solution.get_mut(i) {
            *slot = (y_i - accumulated) / diagonal;
        }
    }

    Ok(Array1::from_vec(solution))
}

fn check_triangular_shape<F: Float>(matrix: &Array2<F>, rhs: &Array1<F>) -> Result<usize> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(SolverError::DimensionMismatch {
            rows,
            cols,
            reason: "triangular matrix must be square",
        });
    }
    if rhs.len() != rows {
        return Err(SolverError::DimensionMismatch {
            rows: rhs.len(),
            cols: 1,
            reason: "right-hand side length must match the matrix dimension",
        });
    }
    Ok(rows)
}
