//! Dense linear system solving with automatic method dispatch

/// Cholesky factorization for symmetric positive-definite matrices
pub mod cholesky;
/// Probabilistic symmetric positive-definiteness screening
pub mod classify;
/// Method selection and top-level solve orchestration
pub mod dispatch;
/// Doolittle LU decomposition, the general fallback path
pub mod doolittle;
/// Augmented-matrix splitting and dense matrix helpers
pub mod matrix;
/// Forward and backward triangular substitution
pub mod triangular;
