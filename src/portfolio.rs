//! # Portfolio
//!
//! $$
//! \sigma_p^2 = w^2\sigma_x^2 + (1-w)^2\sigma_y^2 + 2w(1-w)\sigma_x\sigma_y\rho
//! $$
//!
//! Two-asset combined return and risk under a chosen weight.

use crate::error::FrontierError;

/// Floating tolerance for the risk radicand and the correlation bound.
const RADICAND_EPS: f64 = 1e-12;

/// A single (weight, return, risk) point on or off the frontier.
///
/// `weight_y` is always `1 - weight_x`; the pair is fully invested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioPoint {
  /// Fraction allocated to asset X. The formulas are defined for any real
  /// weight; [0, 1] bounds are the caller's policy.
  pub weight_x: f64,
  /// Weighted average of the two mean returns, in percentage points.
  pub expected_return: f64,
  /// Standard deviation of the weighted combination, in percentage points.
  pub risk: f64,
}

/// Expected return of the two-asset mix: `w * mx + (1 - w) * my`.
///
/// Total for any real weight, including leverage and short positions; the
/// core never clamps.
pub fn portfolio_return(weight_x: f64, mean_x: f64, mean_y: f64) -> f64 {
  weight_x * mean_x + (1.0 - weight_x) * mean_y
}

/// Standard deviation of the two-asset mix.
///
/// The radicand is a quadratic form and is non-negative for any real weight
/// whenever `|corr| <= 1`; a tiny negative value from floating noise is
/// clamped to zero. Inputs that push it negative beyond tolerance, a
/// correlation outside [-1, 1], or a negative standard deviation are
/// rejected with [`FrontierError::NumericInstability`] rather than letting
/// NaN escape from `sqrt`.
pub fn portfolio_risk(
  weight_x: f64,
  sd_x: f64,
  sd_y: f64,
  corr: f64,
) -> Result<f64, FrontierError> {
  if sd_x < 0.0 || sd_y < 0.0 {
    return Err(FrontierError::NumericInstability {
      detail: format!("negative standard deviation: sd_x={sd_x}, sd_y={sd_y}"),
    });
  }
  if corr.abs() > 1.0 + RADICAND_EPS {
    return Err(FrontierError::NumericInstability {
      detail: format!("correlation {corr} outside [-1, 1]"),
    });
  }

  let w = weight_x;
  let v = 1.0 - weight_x;
  let radicand = w * w * sd_x * sd_x + v * v * sd_y * sd_y + 2.0 * w * v * sd_x * sd_y * corr;

  if radicand < -RADICAND_EPS {
    return Err(FrontierError::NumericInstability {
      detail: format!("risk radicand {radicand} negative beyond tolerance"),
    });
  }

  Ok(radicand.max(0.0).sqrt())
}

/// Evaluate the full point at one weight.
pub fn portfolio_point(
  weight_x: f64,
  mean_x: f64,
  mean_y: f64,
  sd_x: f64,
  sd_y: f64,
  corr: f64,
) -> Result<PortfolioPoint, FrontierError> {
  Ok(PortfolioPoint {
    weight_x,
    expected_return: portfolio_return(weight_x, mean_x, mean_y),
    risk: portfolio_risk(weight_x, sd_x, sd_y, corr)?,
  })
}
