//! Runtime configuration defaults for the command-line interface

// Default values for configurable parameters
/// Fixed seed for reproducible classification
pub const DEFAULT_SEED: u64 = 42;

/// Default population mean for probability commands
pub const DEFAULT_MEAN: f64 = 0.0;

/// Default standard deviation for probability commands
pub const DEFAULT_ST_DEV: f64 = 1.0;

/// Default threshold `c` when computing a probability
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Default target probability when inverting for a threshold
pub const DEFAULT_PROBABILITY: f64 = 0.45;

// Input settings
/// File extension recognized when scanning a directory for systems
pub const SYSTEM_FILE_EXTENSION: &str = "lin";

/// Line prefix marking a comment in a system file
pub const COMMENT_PREFIX: char = '#';

// Output settings
/// Residual magnitude above which a solution is flagged in the report
pub const RESIDUAL_WARN_THRESHOLD: f64 = 1e-6;
