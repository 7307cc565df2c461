//! # Stats
//!
//! $$
//! \rho_{XY}=\frac{\operatorname{Cov}(X,Y)}{\sigma_X\sigma_Y}
//! $$
//!
//! Per-asset mean and standard deviation with a configurable
//! degrees-of-freedom mode, plus Pearson correlation for a series pair.

use crate::error::FrontierError;
use crate::series::ReturnSeries;

/// Variance divisor guard for degenerate series detection.
const VARIANCE_EPS: f64 = 1e-15;

/// Divisor choice for variance and standard deviation.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DofMode {
  /// Divide the sum of squared deviations by N.
  #[default]
  Population,
  /// Divide the sum of squared deviations by N - 1.
  Sample,
}

impl DofMode {
  fn divisor(&self, n: usize) -> f64 {
    match self {
      DofMode::Population => n as f64,
      DofMode::Sample => (n - 1) as f64,
    }
  }
}

/// Immutable snapshot of single-asset return statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetStats {
  /// Arithmetic mean of the raw observations, in percentage points.
  pub mean: f64,
  /// Standard deviation under the chosen [`DofMode`], in percentage points.
  pub std_dev: f64,
  /// Number of observations the snapshot was derived from.
  pub sample_size: usize,
}

/// Combined snapshot for a series pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairStats {
  pub x: AssetStats,
  pub y: AssetStats,
  /// Pearson correlation coefficient in [-1, 1].
  pub correlation: f64,
}

fn mean(xs: &[f64]) -> f64 {
  xs.iter().sum::<f64>() / xs.len() as f64
}

fn squared_deviations(xs: &[f64], m: f64) -> f64 {
  let mut acc = 0.0;
  for &x in xs {
    let d = x - m;
    acc += d * d;
  }
  acc
}

/// Compute mean and standard deviation for a single series.
///
/// Requires at least two observations; a single point makes the standard
/// deviation degenerate for either divisor.
pub fn asset_stats(series: &ReturnSeries, dof: DofMode) -> Result<AssetStats, FrontierError> {
  let xs = series.values();
  if xs.len() < 2 {
    return Err(FrontierError::InvalidInputLength {
      context: "asset statistics",
      expected: 2,
      actual: xs.len(),
    });
  }

  let m = mean(xs);
  let variance = squared_deviations(xs, m) / dof.divisor(xs.len());

  Ok(AssetStats {
    mean: m,
    std_dev: variance.sqrt(),
    sample_size: xs.len(),
  })
}

/// Pearson correlation coefficient of two equal-length series.
///
/// Errors with [`FrontierError::DegenerateVariance`] when either series has
/// zero variance, since the coefficient is undefined there. The result is
/// clamped to [-1, 1] against floating noise.
pub fn correlation(x: &ReturnSeries, y: &ReturnSeries) -> Result<f64, FrontierError> {
  x.check_paired(y)?;

  let xs = x.values();
  let ys = y.values();
  if xs.len() < 2 {
    return Err(FrontierError::InvalidInputLength {
      context: "correlation",
      expected: 2,
      actual: xs.len(),
    });
  }

  let mx = mean(xs);
  let my = mean(ys);

  let mut cov = 0.0;
  let mut sx = 0.0;
  let mut sy = 0.0;

  for i in 0..xs.len() {
    let dx = xs[i] - mx;
    let dy = ys[i] - my;
    cov += dx * dy;
    sx += dx * dx;
    sy += dy * dy;
  }

  if sx < VARIANCE_EPS {
    return Err(FrontierError::DegenerateVariance {
      label: x.label().to_string(),
    });
  }
  if sy < VARIANCE_EPS {
    return Err(FrontierError::DegenerateVariance {
      label: y.label().to_string(),
    });
  }

  Ok((cov / (sx * sy).sqrt()).clamp(-1.0, 1.0))
}

/// Compute both asset snapshots and the pairwise correlation in one call.
pub fn pair_stats(
  x: &ReturnSeries,
  y: &ReturnSeries,
  dof: DofMode,
) -> Result<PairStats, FrontierError> {
  x.check_paired(y)?;

  Ok(PairStats {
    x: asset_stats(x, dof)?,
    y: asset_stats(y, dof)?,
    correlation: correlation(x, y)?,
  })
}
