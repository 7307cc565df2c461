//! # Errors
//!
//! $$
//! \rho_{XY}\ \text{undefined when}\ \sigma_X\sigma_Y = 0
//! $$
//!
//! Error taxonomy for the numeric core. Every failure is synchronous and
//! fatal to the calculation; nothing is recoverable internally.

use thiserror::Error;

/// Errors surfaced by series construction, statistics and frontier generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrontierError {
  /// A series is empty/too short, a pair of series differs in length, or a
  /// sweep resolution has no sweep semantics.
  #[error("invalid input length for {context}: expected {expected}, got {actual}")]
  InvalidInputLength {
    context: &'static str,
    expected: usize,
    actual: usize,
  },

  /// A series has zero variance, making correlation undefined.
  #[error("series '{label}' has zero variance, correlation is undefined")]
  DegenerateVariance { label: String },

  /// Inputs are numerically inconsistent, e.g. |corr| > 1 or a risk radicand
  /// negative beyond floating tolerance.
  #[error("numeric instability: {detail}")]
  NumericInstability { detail: String },

  /// A series entry is NaN or infinite.
  #[error("series '{label}' contains a non-finite value at index {index}")]
  NonFiniteValue { label: String, index: usize },
}
