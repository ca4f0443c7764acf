//! Tests for Gaussian density and probability

#[cfg(test)]
mod tests {
    use densolve::SolverError;
    use densolve::math::gaussian::{
        critical_value, pdf, probability, two_sided_inside,
    };

    #[test]
    fn test_pdf_peak_of_standard_normal() {
        let peak = pdf(0.0, 0.0, 1.0);
        assert!((peak - 0.398_942_280_401).abs() < 1e-9);
    }

    #[test]
    fn test_pdf_respects_location_and_scale() {
        // Shifting and scaling must map onto the standard density
        let shifted = pdf(3.0, 3.0, 2.0);
        assert!((shifted - 0.398_942_280_401 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_probability_below_matches_normal_table() {
        let Ok(p) = probability(0.0, 1.0, 0.5, false) else {
            panic!("probability should succeed");
        };
        assert!((p - 0.691_462).abs() < 1e-4);
    }

    #[test]
    fn test_probability_complements_sum_to_one() {
        let Ok(below) = probability(0.0, 1.0, 1.25, false) else {
            panic!("probability should succeed");
        };
        let Ok(above) = probability(0.0, 1.0, 1.25, true) else {
            panic!("probability should succeed");
        };
        assert!((below + above - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_probability_at_the_mean_is_one_half() {
        let Ok(p) = probability(10.0, 2.0, 10.0, false) else {
            panic!("probability should succeed");
        };
        assert!((p - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_two_sided_band_matches_normal_table() {
        let Ok(inside) = two_sided_inside(0.0, 1.0, 1.0) else {
            panic!("probability should succeed");
        };
        assert!((inside - 0.682_689).abs() < 1e-4);
    }

    #[test]
    fn test_critical_value_round_trips_one_sided() {
        let Ok(c) = critical_value(0.0, 1.0, 0.45, false, false) else {
            panic!("inversion should succeed");
        };
        assert!((c - (-0.125_661)).abs() < 1e-3);

        let Ok(achieved) = probability(0.0, 1.0, c, false) else {
            panic!("probability should succeed");
        };
        assert!((achieved - 0.45).abs() < 1e-4);
    }

    #[test]
    fn test_critical_value_round_trips_two_sided() {
        let Ok(c) = critical_value(0.0, 1.0, 0.5, false, true) else {
            panic!("inversion should succeed");
        };
        // Inside mass 0.5 puts the band edge at the 75th percentile
        assert!((c - 0.674_490).abs() < 1e-3);
    }

    #[test]
    fn test_nonpositive_standard_deviation_is_rejected() {
        assert!(matches!(
            probability(0.0, 0.0, 1.0, false),
            Err(SolverError::InvalidParameter { .. })
        ));
        assert!(matches!(
            critical_value(0.0, -1.0, 0.5, false, false),
            Err(SolverError::InvalidParameter { .. })
        ));
    }
}
