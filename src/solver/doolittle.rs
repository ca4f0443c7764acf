//! Doolittle LU decomposition, the general fallback path
//!
//! Factors `A = L·U` with a unit diagonal on `L` and no pivoting, then
//! solves via the shared triangular substitution kernels. Matrices whose
//! leading pivots vanish are reported as singular; row exchanges for
//! ill-conditioned systems are deliberately out of scope.

use crate::io::error::{Result, SolverError};
use crate::solver::matrix::split_augmented;
use crate::solver::triangular::{backward_substitute, forward_substitute};
use ndarray::{Array1, Array2};

/// Factor a square matrix into unit-lower-triangular `L` and
/// upper-triangular `U` with `A = L·U`
///
/// # Errors
///
/// Returns [`SolverError::DimensionMismatch`] for a non-square input
/// and [`SolverError::SingularSystem`] when a pivot `U[k][k]` is exactly
/// zero.
// Exact float comparison: a zero pivot is the singularity signal itself
#[allow(clippy::float_cmp)]
pub fn factor(a: &Array2<f64>) -> Result<(Array2<f64>, Array2<f64>)> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(SolverError::DimensionMismatch {
            rows,
            cols,
            reason: "LU decomposition requires a square matrix",
        });
    }

    let n = rows;
    let mut lower = Array2::<f64>::zeros((n, n));
    let mut upper = Array2::<f64>::zeros((n, n));

    for k in 0..n {
        // Row k of U from the already-eliminated rows above
        for j in k..n {
            let carried = (0..k).fold(0.0_f64, |acc, s| {
                let l_ks = lower.get([k, s]).copied().unwrap_or(0.0);
                let u_sj = upper.get([s, j]).copied().unwrap_or(0.0);
                l_ks.mul_add(u_sj, acc)
            });
            let a_kj = a.get([k, j]).copied().unwrap_or(0.0);
            if let Some(slot) = upper.get_mut([k, j]) {
                *slot = a_kj - carried;
            }
        }

        let pivot = upper.get([k, k]).copied().unwrap_or(0.0);
        if pivot == 0.0 {
            return Err(SolverError::SingularSystem { index: k });
        }

        if let Some(slot) = lower.get_mut([k, k]) {
            *slot = 1.0;
        }

        // Column k of L, scaled by the pivot
        for i in k + 1..n {
            let carried = (0..k).fold(0.0_f64, |acc, s| {
                let l_is = lower.get([i, s]).copied().unwrap_or(0.0);
                let u_sk = upper.get([s, k]).copied().unwrap_or(0.0);
                l_is.mul_add(u_sk, acc)
            });
            let a_ik = a.get([i, k]).copied().unwrap_or(0.0);
            if let Some(slot) = lower.get_mut([i, k]) {
                *slot = (a_ik - carried) / pivot;
            }
        }
    }

    Ok((lower, upper))
}

/// Solve an augmented system `[A|b]` by Doolittle decomposition
///
/// # Errors
///
/// Returns [`SolverError::DimensionMismatch`] for a malformed augmented
/// matrix and [`SolverError::SingularSystem`] when factorization or
/// substitution meets a zero pivot.
pub fn solve(aug: &Array2<f64>) -> Result<Array1<f64>> {
    let (coefficients, rhs) = split_augmented(aug)?;
    let (lower, upper) = factor(&coefficients)?;
    let intermediate = forward_substitute(&lower, &rhs)?;
    backward_substitute(&upper, &intermediate)
}
