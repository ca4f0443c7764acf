//! Tests for the Cholesky factorizer

#[cfg(test)]
mod tests {
    use densolve::SolverError;
    use densolve::solver::cholesky::factor;
    use ndarray::{Array2, array};

    fn assert_close(actual: &Array2<f64>, expected: &Array2<f64>, tolerance: f64) {
        assert_eq!(actual.dim(), expected.dim());
        for ((i, j), value) in actual.indexed_iter() {
            let want = expected.get([i, j]).copied().unwrap_or(f64::NAN);
            assert!(
                (value - want).abs() < tolerance,
                "entry ({i}, {j}): got {value}, want {want}"
            );
        }
    }

    #[test]
    fn test_factor_two_by_two() {
        let a = array![[4.0, 2.0], [2.0, 3.0]];

        let Ok(l) = factor(&a) else {
            panic!("factorization of an SPD matrix should succeed");
        };

        let expected = array![[2.0, 0.0], [1.0, 2.0_f64.sqrt()]];
        assert_close(&l, &expected, 1e-12);
    }

    #[test]
    fn test_factor_with_integer_valued_factor() {
        let a = array![[25.0, 15.0, -5.0], [15.0, 18.0, 0.0], [-5.0, 0.0, 11.0]];

        let Ok(l) = factor(&a) else {
            panic!("factorization of an SPD matrix should succeed");
        };

        let expected = array![[5.0, 0.0, 0.0], [3.0, 3.0, 0.0], [-1.0, 1.0, 3.0]];
        assert_close(&l, &expected, 1e-9);
    }

    #[test]
    fn test_factor_reconstructs_input() {
        let a = array![
            [4.0, 12.0, -16.0],
            [12.0, 37.0, -43.0],
            [-16.0, -43.0, 98.0]
        ];

        let Ok(l) = factor(&a) else {
            panic!("factorization of an SPD matrix should succeed");
        };

        let reconstructed = l.dot(&l.t());
        assert_close(&reconstructed, &a, 1e-9);
    }

    #[test]
    fn test_factor_is_strictly_lower_triangular() {
        let a = array![[25.0, 15.0, -5.0], [15.0, 18.0, 0.0], [-5.0, 0.0, 11.0]];

        let Ok(l) = factor(&a) else {
            panic!("factorization of an SPD matrix should succeed");
        };

        for ((i, j), value) in l.indexed_iter() {
            if j > i {
                assert!(value.abs() < f64::EPSILON, "entry ({i}, {j}) above diagonal");
            }
        }
    }

    #[test]
    fn test_negative_radicand_reports_row() {
        // Symmetric but indefinite: the second diagonal radicand is 1 - 4
        let a = array![[1.0, 2.0], [2.0, 1.0]];
        match factor(&a) {
            Err(SolverError::NotPositiveDefinite { row }) => assert_eq!(row, 1),
            _ => unreachable!("Expected NotPositiveDefinite error type"),
        }
    }

    #[test]
    fn test_zero_diagonal_divisor_reports_singularity() {
        // First pivot factors to exactly zero, later rows divide by it
        let a = array![[0.0, 0.0], [0.0, 1.0]];
        match factor(&a) {
            Err(SolverError::SingularSystem { index }) => assert_eq!(index, 0),
            _ => unreachable!("Expected SingularSystem error type"),
        }
    }

    #[test]
    fn test_rejects_rectangular_input() {
        let a = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            factor(&a),
            Err(SolverError::DimensionMismatch { .. })
        ));
    }
}
