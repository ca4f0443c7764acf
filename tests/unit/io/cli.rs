//! Tests for command-line argument parsing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use densolve::io::cli::{Cli, Command};
    use std::path::PathBuf;

    #[test]
    fn test_solve_arguments_parse() {
        let Ok(cli) = Cli::try_parse_from([
            "densolve", "solve", "systems.lin", "--seed", "7", "--quiet",
        ]) else {
            panic!("valid solve arguments should parse");
        };

        match cli.command {
            Command::Solve(args) => {
                assert_eq!(args.target, PathBuf::from("systems.lin"));
                assert_eq!(args.seed, 7);
                assert!(args.quiet);
            }
            _ => unreachable!("Expected the solve subcommand"),
        }
    }

    #[test]
    fn test_solve_defaults() {
        let Ok(cli) = Cli::try_parse_from(["densolve", "solve", "systems.lin"]) else {
            panic!("valid solve arguments should parse");
        };

        match cli.command {
            Command::Solve(args) => {
                assert_eq!(args.seed, 42);
                assert!(!args.quiet);
            }
            _ => unreachable!("Expected the solve subcommand"),
        }
    }

    #[test]
    fn test_probability_defaults_match_the_original_tool() {
        let Ok(cli) = Cli::try_parse_from(["densolve", "probability"]) else {
            panic!("probability without arguments should parse");
        };

        match cli.command {
            Command::Probability(args) => {
                assert!(args.mean.abs() < f64::EPSILON);
                assert!((args.st_dev - 1.0).abs() < f64::EPSILON);
                assert!((args.threshold - 0.5).abs() < f64::EPSILON);
                assert!(!args.greater_than);
                assert!(!args.two_sided);
            }
            _ => unreachable!("Expected the probability subcommand"),
        }
    }

    #[test]
    fn test_critical_accepts_target_probability() {
        let Ok(cli) = Cli::try_parse_from([
            "densolve", "critical", "-p", "0.9", "--greater-than", "--two-sided",
        ]) else {
            panic!("valid critical arguments should parse");
        };

        match cli.command {
            Command::Critical(args) => {
                assert!((args.probability - 0.9).abs() < f64::EPSILON);
                assert!(args.greater_than);
                assert!(args.two_sided);
            }
            _ => unreachable!("Expected the critical subcommand"),
        }
    }

    #[test]
    fn test_t_cdf_accepts_negative_evaluation_points() {
        let Ok(cli) = Cli::try_parse_from(["densolve", "t-cdf", "-m", "5", "-z", "-2.5"]) else {
            panic!("valid t-cdf arguments should parse");
        };

        match cli.command {
            Command::TCdf(args) => {
                assert!((args.degrees_of_freedom - 5.0).abs() < f64::EPSILON);
                assert!((args.z - (-2.5)).abs() < f64::EPSILON);
            }
            _ => unreachable!("Expected the t-cdf subcommand"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["densolve"]).is_err());
    }
}
