//! # Frontier
//!
//! $$
//! \mathcal{F}=\{(\sigma_p(w),\mu_p(w)) : w \in [0,1]\}
//! $$
//!
//! Weight sweep over [0, 1] producing the parametric risk/return curve and
//! its minimum-risk point.

use ndarray::Array1;
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::error::FrontierError;
use crate::portfolio::PortfolioPoint;
use crate::portfolio::portfolio_point;

/// Denominator guard for the closed-form minimum-variance weight.
const DENOM_EPS: f64 = 1e-15;

/// Sweep resolution for frontier generation.
#[derive(Clone, Copy, Debug)]
pub struct FrontierConfig {
  /// Number of equally spaced weights in [0, 1], endpoints included.
  pub num_points: usize,
}

impl Default for FrontierConfig {
  fn default() -> Self {
    Self { num_points: 100 }
  }
}

/// Ordered sweep of portfolio points with the sampled minimum-risk point.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontier {
  points: Vec<PortfolioPoint>,
  min_risk_index: usize,
}

impl Frontier {
  /// All sampled points, weight monotonically increasing from 0 to 1.
  pub fn points(&self) -> &[PortfolioPoint] {
    &self.points
  }

  /// Index of the minimum-risk point within [`Self::points`].
  pub fn min_risk_index(&self) -> usize {
    self.min_risk_index
  }

  /// The sampled global minimum-variance portfolio. Ties resolve to the
  /// first occurrence in sweep order.
  pub fn min_risk(&self) -> &PortfolioPoint {
    &self.points[self.min_risk_index]
  }
}

/// Sweep `weight_x` over `config.num_points` equally spaced values in [0, 1]
/// and evaluate each point.
///
/// Deterministic for identical inputs. Fewer than two points has no sweep
/// semantics and is rejected.
pub fn generate_frontier(
  mean_x: f64,
  mean_y: f64,
  sd_x: f64,
  sd_y: f64,
  corr: f64,
  config: &FrontierConfig,
) -> Result<Frontier, FrontierError> {
  if config.num_points < 2 {
    return Err(FrontierError::InvalidInputLength {
      context: "frontier sweep",
      expected: 2,
      actual: config.num_points,
    });
  }

  let weights = Array1::linspace(0.0, 1.0, config.num_points);
  let mut points: Vec<PortfolioPoint> = Vec::with_capacity(config.num_points);
  let mut min_risk_index = 0;

  for &w in weights.iter() {
    let point = portfolio_point(w, mean_x, mean_y, sd_x, sd_y, corr)?;
    if points.is_empty() || OrderedFloat(point.risk) < OrderedFloat(points[min_risk_index].risk) {
      min_risk_index = points.len();
    }
    points.push(point);
  }

  debug!(
    num_points = config.num_points,
    min_risk_weight = points[min_risk_index].weight_x,
    min_risk = points[min_risk_index].risk,
    "generated frontier"
  );

  Ok(Frontier {
    points,
    min_risk_index,
  })
}

/// Closed-form two-asset minimum-variance weight,
/// `(sd_y^2 - sd_x sd_y corr) / (sd_x^2 + sd_y^2 - 2 sd_x sd_y corr)`.
///
/// Companion precision result to the sampled minimum. Returns `None` when
/// the denominator vanishes (portfolio variance constant in the weight, no
/// unique minimizer).
pub fn min_variance_weight(sd_x: f64, sd_y: f64, corr: f64) -> Option<f64> {
  let cov = sd_x * sd_y * corr;
  let denom = sd_x * sd_x + sd_y * sd_y - 2.0 * cov;

  if denom.abs() < DENOM_EPS {
    return None;
  }

  Some((sd_y * sd_y - cov) / denom)
}

#[cfg(test)]
mod tests {
  use super::*;

  const MX: f64 = 5.96;
  const MY: f64 = 9.10;
  const SX: f64 = 8.161764515103336;
  const SY: f64 = 13.393281898026338;
  const R: f64 = -0.38915840565618026;

  #[test]
  fn sweep_covers_unit_interval_inclusively() {
    let f = generate_frontier(MX, MY, SX, SY, R, &FrontierConfig { num_points: 101 }).unwrap();
    let pts = f.points();

    assert_eq!(pts.len(), 101);
    assert_eq!(pts[0].weight_x, 0.0);
    assert!((pts.last().unwrap().weight_x - 1.0).abs() < 1e-12);
    for pair in pts.windows(2) {
      assert!(pair[1].weight_x > pair[0].weight_x);
    }
  }

  #[test]
  fn endpoints_recover_single_asset_points() {
    let f = generate_frontier(MX, MY, SX, SY, R, &FrontierConfig::default()).unwrap();
    let first = &f.points()[0];
    let last = f.points().last().unwrap();

    assert!((first.expected_return - MY).abs() < 1e-12);
    assert!((first.risk - SY).abs() < 1e-12);
    assert!((last.expected_return - MX).abs() < 1e-12);
    assert!((last.risk - SX).abs() < 1e-12);
  }

  #[test]
  fn min_risk_point_dominates_every_sample() {
    let f = generate_frontier(MX, MY, SX, SY, R, &FrontierConfig { num_points: 101 }).unwrap();
    let min = f.min_risk();

    for p in f.points() {
      assert!(min.risk <= p.risk);
    }
    assert!((min.weight_x - 0.67).abs() < 1e-12);
    assert!((min.risk - 5.534121263579252).abs() < 1e-9);
  }

  #[test]
  fn ties_resolve_to_first_occurrence() {
    // Constant risk across the sweep: sd_x == sd_y, corr == 1. Weights 0,
    // 0.5 and 1 are exactly representable, so every sampled risk is exactly
    // 10.0 and the scan must keep the first point.
    let f = generate_frontier(4.0, 8.0, 10.0, 10.0, 1.0, &FrontierConfig { num_points: 3 }).unwrap();
    assert_eq!(f.min_risk_index(), 0);
    assert_eq!(f.min_risk().weight_x, 0.0);
  }

  #[test]
  fn generation_is_deterministic() {
    let cfg = FrontierConfig { num_points: 50 };
    let a = generate_frontier(MX, MY, SX, SY, R, &cfg).unwrap();
    let b = generate_frontier(MX, MY, SX, SY, R, &cfg).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn single_point_sweep_is_rejected() {
    let err = generate_frontier(MX, MY, SX, SY, R, &FrontierConfig { num_points: 1 }).unwrap_err();
    assert!(matches!(
      err,
      FrontierError::InvalidInputLength {
        context: "frontier sweep",
        actual: 1,
        ..
      }
    ));
    assert!(generate_frontier(MX, MY, SX, SY, R, &FrontierConfig { num_points: 0 }).is_err());
  }

  #[test]
  fn inconsistent_correlation_aborts_the_sweep() {
    let err = generate_frontier(MX, MY, SX, SY, 1.2, &FrontierConfig::default()).unwrap_err();
    assert!(matches!(err, FrontierError::NumericInstability { .. }));
  }

  #[test]
  fn closed_form_weight_matches_sampled_minimum() {
    let w = min_variance_weight(SX, SY, R).unwrap();
    assert!((w - 0.6703025060228154).abs() < 1e-12);

    let f = generate_frontier(MX, MY, SX, SY, R, &FrontierConfig { num_points: 101 }).unwrap();
    assert!((f.min_risk().weight_x - w).abs() < 0.005);
  }

  #[test]
  fn closed_form_weight_is_none_for_constant_variance() {
    assert!(min_variance_weight(10.0, 10.0, 1.0).is_none());
  }

  #[test]
  fn perfect_hedge_minimum_sits_at_half_weight() {
    let f = generate_frontier(4.0, 8.0, 10.0, 10.0, -1.0, &FrontierConfig { num_points: 101 }).unwrap();
    let min = f.min_risk();

    assert!((min.weight_x - 0.5).abs() < 1e-12);
    assert!(min.risk.abs() < 1e-9);
    assert!((min_variance_weight(10.0, 10.0, -1.0).unwrap() - 0.5).abs() < 1e-12);
  }
}
