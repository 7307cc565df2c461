//! # Engine
//!
//! $$
//! (X, Y, w) \mapsto (\hat\mu,\hat\sigma,\rho,\ \mu_p,\sigma_p,\ \mathcal{F})
//! $$
//!
//! Single entry point consumed by presentation adapters: two return series
//! and a weight in, statistics, the chosen portfolio point and the frontier
//! out. Every call is request-scoped and recomputed from scratch.

use tracing::debug;

use crate::error::FrontierError;
use crate::frontier::Frontier;
use crate::frontier::FrontierConfig;
use crate::frontier::generate_frontier;
use crate::portfolio::PortfolioPoint;
use crate::portfolio::portfolio_point;
use crate::series::ReturnSeries;
use crate::stats::DofMode;
use crate::stats::PairStats;
use crate::stats::pair_stats;

/// Runtime configuration for [`DiversificationEngine`].
#[derive(Clone, Copy, Debug)]
pub struct AnalysisConfig {
  /// Divisor mode used for standard deviations.
  pub dof: DofMode,
  /// Frontier sweep resolution.
  pub num_points: usize,
}

impl Default for AnalysisConfig {
  fn default() -> Self {
    Self {
      dof: DofMode::Population,
      num_points: 100,
    }
  }
}

/// Full result of one analysis call.
#[derive(Debug, Clone, PartialEq)]
pub struct DiversificationReport {
  /// Per-asset statistics and pairwise correlation.
  pub pair: PairStats,
  /// The portfolio point at the requested weight.
  pub portfolio: PortfolioPoint,
  /// The sampled frontier with its minimum-risk point.
  pub frontier: Frontier,
}

/// Stateless analysis engine for two-asset diversification.
#[derive(Clone, Debug, Default)]
pub struct DiversificationEngine {
  config: AnalysisConfig,
}

impl DiversificationEngine {
  /// Construct a new engine with explicit configuration.
  pub fn new(config: AnalysisConfig) -> Self {
    Self { config }
  }

  /// Borrow engine configuration.
  pub fn config(&self) -> &AnalysisConfig {
    &self.config
  }

  /// Run the full pipeline for one series pair and weight.
  pub fn analyze(
    &self,
    x: &ReturnSeries,
    y: &ReturnSeries,
    weight_x: f64,
  ) -> Result<DiversificationReport, FrontierError> {
    let pair = pair_stats(x, y, self.config.dof)?;

    let portfolio = portfolio_point(
      weight_x,
      pair.x.mean,
      pair.y.mean,
      pair.x.std_dev,
      pair.y.std_dev,
      pair.correlation,
    )?;

    let frontier = generate_frontier(
      pair.x.mean,
      pair.y.mean,
      pair.x.std_dev,
      pair.y.std_dev,
      pair.correlation,
      &FrontierConfig {
        num_points: self.config.num_points,
      },
    )?;

    debug!(
      x = x.label(),
      y = y.label(),
      weight_x,
      correlation = pair.correlation,
      portfolio_risk = portfolio.risk,
      "analyzed series pair"
    );

    Ok(DiversificationReport {
      pair,
      portfolio,
      frontier,
    })
  }
}
