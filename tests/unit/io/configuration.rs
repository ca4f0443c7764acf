//! Tests for runtime configuration defaults

#[cfg(test)]
mod tests {
    use densolve::io::configuration::{
        COMMENT_PREFIX, DEFAULT_MEAN, DEFAULT_PROBABILITY, DEFAULT_SEED, DEFAULT_ST_DEV,
        DEFAULT_THRESHOLD, RESIDUAL_WARN_THRESHOLD, SYSTEM_FILE_EXTENSION,
    };

    #[test]
    fn test_defaults_match_the_original_tool() {
        assert_eq!(DEFAULT_SEED, 42);
        assert!(DEFAULT_MEAN.abs() < f64::EPSILON);
        assert!((DEFAULT_ST_DEV - 1.0).abs() < f64::EPSILON);
        assert!((DEFAULT_THRESHOLD - 0.5).abs() < f64::EPSILON);
        assert!((DEFAULT_PROBABILITY - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn test_input_conventions_are_consistent() {
        assert_eq!(SYSTEM_FILE_EXTENSION, "lin");
        assert!(!SYSTEM_FILE_EXTENSION.starts_with('.'));
        assert_eq!(COMMENT_PREFIX, '#');
    }

    #[test]
    fn test_residual_threshold_is_a_small_positive_number() {
        assert!(RESIDUAL_WARN_THRESHOLD > 0.0);
        assert!(RESIDUAL_WARN_THRESHOLD < 1e-3);
    }
}
