//! Simpson 1/3 numerical integration
//!
//! The workhorse behind the Gaussian and Student-t probability
//! integrals. Accuracy is fourth order in the step size, which is ample
//! for the smooth density functions integrated here.

use crate::io::error::{Result, invalid_parameter};

/// Integrate `f` over `[lower, upper]` with Simpson's 1/3 rule
///
/// The rule needs an even panel count; an odd `subintervals` is bumped
/// up by one rather than rejected.
///
/// # Errors
///
/// Returns [`crate::SolverError::InvalidParameter`] when `subintervals`
/// is zero.
pub fn simpson<F>(f: F, lower: f64, upper: f64, subintervals: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if subintervals == 0 {
        return Err(invalid_parameter(
            "subintervals",
            &subintervals,
            &"Simpson's rule needs at least one subinterval",
        ));
    }

    let panels = if subintervals % 2 == 0 {
        subintervals
    } else {
        subintervals + 1
    };

    let step = (upper - lower) / panels as f64;
    let mut odd_sum = 0.0_f64;
    let mut even_sum = 0.0_f64;

    for i in 1..panels {
        let x = (i as f64).mul_add(step, lower);
        if i % 2 == 1 {
            odd_sum += f(x);
        } else {
            even_sum += f(x);
        }
    }

    let endpoints = f(lower) + f(upper);
    let total = 4.0_f64.mul_add(odd_sum, 2.0_f64.mul_add(even_sum, endpoints));

    Ok(step / 3.0 * total)
}
