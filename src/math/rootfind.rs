//! Bisection root-finding over fallible objective functions
//!
//! Used to invert probability integrals: the objective evaluates a
//! quadrature, so it returns a `Result` and errors propagate out of the
//! search unchanged.

use crate::io::error::Result;

/// Iteration cap for the bisection search
pub const BISECTION_MAX_ITERATIONS: usize = 50;

/// Interval width below which the bisection search stops early
pub const BISECTION_TOLERANCE: f64 = 1e-7;

/// Locate a root of `f` inside `[left, right]` by bisection
///
/// Keeps whichever half-interval shows a sign change against the left
/// endpoint and returns the final midpoint. The bracket is not
/// validated: with no sign change in the initial interval the search
/// walks to an endpoint, matching the behavior callers tuned their
/// intervals for.
///
/// # Errors
///
/// Propagates any error returned by the objective function.
pub fn bisect<F>(
    f: F,
    left: f64,
    right: f64,
    max_iterations: usize,
    tolerance: f64,
) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    let mut lo = left;
    let mut hi = right;

    for _ in 0..max_iterations {
        let mid = lo.midpoint(hi);
        if f(lo)? * f(mid)? < 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
        if (hi - lo).abs() < tolerance {
            break;
        }
    }

    Ok(lo.midpoint(hi))
}
