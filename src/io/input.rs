//! Plain-text loading of augmented linear systems
//!
//! A system file holds one or more systems. Each row of a system is a
//! line of whitespace-separated numbers, blank lines separate systems,
//! and `#` starts a comment line. Every system must be rectangular and
//! exactly one column wider than it is tall.

use crate::io::configuration::COMMENT_PREFIX;
use crate::io::error::{Result, SolverError};
use ndarray::Array2;
use std::path::Path;

/// Load every augmented system from a file
///
/// # Errors
///
/// Returns [`SolverError::FileSystem`] when the file cannot be read,
/// [`SolverError::MatrixParse`] for unparseable entries or ragged rows,
/// and [`SolverError::DimensionMismatch`] for systems whose coefficient
/// block is not square.
pub fn load_systems(path: &Path) -> Result<Vec<Array2<f64>>> {
    let text = std::fs::read_to_string(path).map_err(|source| SolverError::FileSystem {
        path: path.to_path_buf(),
        operation: "read system file",
        source,
    })?;

    parse_systems(&text, path)
}

/// Parse augmented systems out of file text
///
/// # Errors
///
/// Returns [`SolverError::MatrixParse`] for unparseable entries, ragged
/// rows, or a file with no systems at all, and
/// [`SolverError::DimensionMismatch`] for systems whose width is not
/// height + 1.
pub fn parse_systems(text: &str, path: &Path) -> Result<Vec<Array2<f64>>> {
    let mut systems = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut first_line_of_system = 0;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();

        if trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }

        if trimmed.is_empty() {
            if !rows.is_empty() {
                systems.push(build_system(&rows, path, first_line_of_system)?);
                rows.clear();
            }
            continue;
        }

        if rows.is_empty() {
            first_line_of_system = line_number;
        }

        let mut row = Vec::new();
        for token in trimmed.split_whitespace() {
            let value = token.parse::<f64>().map_err(|e| SolverError::MatrixParse {
                path: path.to_path_buf(),
                line: line_number,
                reason: format!("cannot parse '{token}' as a number: {e}"),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    if !rows.is_empty() {
        systems.push(build_system(&rows, path, first_line_of_system)?);
    }

    if systems.is_empty() {
        return Err(SolverError::MatrixParse {
            path: path.to_path_buf(),
            line: 1,
            reason: "file contains no systems".to_string(),
        });
    }

    Ok(systems)
}

fn build_system(rows: &[Vec<f64>], path: &Path, first_line: usize) -> Result<Array2<f64>> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);

    for row in rows {
        if row.len() != width {
            return Err(SolverError::MatrixParse {
                path: path.to_path_buf(),
                line: first_line,
                reason: format!(
                    "ragged system: expected {width} entries per row, found {}",
                    row.len()
                ),
            });
        }
    }

    if width != height + 1 {
        return Err(SolverError::DimensionMismatch {
            rows: height,
            cols: width,
            reason: "augmented matrix must have width = height + 1",
        });
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((height, width), flat).map_err(|e| SolverError::MatrixParse {
        path: path.to_path_buf(),
        line: first_line,
        reason: e.to_string(),
    })
}
