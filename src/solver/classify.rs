//! Symmetric positive-definiteness classification
//!
//! The check is a two-step screen: exact symmetry against the transpose,
//! then the sign of `vᵗAv` for a single random probe vector. The second
//! step is a probabilistic heuristic, not a proof; an indefinite matrix
//! can pass on a lucky draw and a positive-definite one can fail on an
//! unlucky one. The dispatcher tolerates this because the general path
//! handles any matrix the screen rejects, and a wrong approval surfaces
//! as a factorization error rather than a wrong answer.

use crate::solver::matrix::{is_symmetric, quadratic_form};
use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded classifier for symmetric positive-definite matrices
///
/// Owns its random source so classification outcomes are reproducible:
/// two classifiers built from the same seed draw identical probe
/// vectors.
#[derive(Debug, Clone)]
pub struct SpdClassifier {
    rng: StdRng,
}

impl SpdClassifier {
    /// Create a classifier with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Screen a matrix for symmetric positive-definiteness
    ///
    /// Asymmetric matrices are rejected before any random draw is
    /// consumed, so the probe sequence stays aligned across calls that
    /// mix symmetric and asymmetric inputs.
    pub fn is_symmetric_positive_definite(&mut self, a: &Array2<f64>) -> bool {
        if !is_symmetric(a) {
            return false;
        }

        let probe: Array1<f64> = (0..a.nrows())
            .map(|_| self.rng.random::<f64>().mul_add(2.0, -1.0))
            .collect();

        quadratic_form(a, &probe) > 0.0
    }
}
