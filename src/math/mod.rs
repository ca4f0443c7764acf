//! Numerical utilities for probability computation

/// Gaussian density and cumulative probability
pub mod gaussian;
/// Simpson 1/3 numerical integration
pub mod quadrature;
/// Bisection root-finding over fallible objectives
pub mod rootfind;
/// Student-t density and cumulative distribution
pub mod student;
