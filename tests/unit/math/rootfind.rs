//! Tests for the bisection root-finder

#[cfg(test)]
mod tests {
    use densolve::SolverError;
    use densolve::io::error::invalid_parameter;
    use densolve::math::rootfind::{BISECTION_MAX_ITERATIONS, BISECTION_TOLERANCE, bisect};

    #[test]
    fn test_bisect_finds_square_root_of_two() {
        let Ok(root) = bisect(
            |x| Ok(x.mul_add(x, -2.0)),
            0.0,
            2.0,
            BISECTION_MAX_ITERATIONS,
            BISECTION_TOLERANCE,
        ) else {
            panic!("bisection should succeed");
        };
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_bisect_finds_cosine_root() {
        let Ok(root) = bisect(
            |x| Ok(x.cos()),
            0.0,
            3.0,
            BISECTION_MAX_ITERATIONS,
            BISECTION_TOLERANCE,
        ) else {
            panic!("bisection should succeed");
        };
        assert!((root - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_bisect_without_sign_change_walks_to_an_endpoint() {
        // No root in the interval: the search degenerates to the right
        // endpoint rather than reporting an error
        let Ok(result) = bisect(
            |x| Ok(x.mul_add(x, 1.0)),
            0.0,
            1.0,
            BISECTION_MAX_ITERATIONS,
            BISECTION_TOLERANCE,
        ) else {
            panic!("bisection should succeed");
        };
        assert!((result - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bisect_propagates_objective_errors() {
        let result = bisect(
            |_| {
                Err(invalid_parameter(
                    "objective",
                    &"none",
                    &"always fails in this test",
                ))
            },
            0.0,
            1.0,
            BISECTION_MAX_ITERATIONS,
            BISECTION_TOLERANCE,
        );
        assert!(matches!(result, Err(SolverError::InvalidParameter { .. })));
    }
}
