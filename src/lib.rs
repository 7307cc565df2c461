//! # frontier-rs
//!
//! $$
//! \sigma_p^2 = w^2\sigma_x^2 + (1-w)^2\sigma_y^2 + 2w(1-w)\sigma_x\sigma_y\rho
//! $$
//!
//! Two-asset portfolio statistics and efficient frontier generation.
//!
//! The crate exposes a stateless numeric core: per-asset return statistics
//! with a configurable degrees-of-freedom mode, Pearson correlation, the
//! two-asset return/risk model, and the weight sweep producing the frontier
//! curve with its minimum-risk point. Inputs are percentage points and all
//! internal math stays in percentage-point units.

pub mod engine;
pub mod error;
pub mod frontier;
pub mod portfolio;
pub mod series;
pub mod stats;

pub use engine::AnalysisConfig;
pub use engine::DiversificationEngine;
pub use engine::DiversificationReport;
pub use error::FrontierError;
pub use frontier::Frontier;
pub use frontier::FrontierConfig;
pub use frontier::generate_frontier;
pub use frontier::min_variance_weight;
pub use portfolio::PortfolioPoint;
pub use portfolio::portfolio_point;
pub use portfolio::portfolio_return;
pub use portfolio::portfolio_risk;
pub use series::ReturnSeries;
pub use stats::AssetStats;
pub use stats::DofMode;
pub use stats::PairStats;
pub use stats::asset_stats;
pub use stats::correlation;
pub use stats::pair_stats;
