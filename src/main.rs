use anyhow::Result;
use prettytable::Table;
use prettytable::row;

use frontier_rs::AnalysisConfig;
use frontier_rs::DiversificationEngine;
use frontier_rs::DofMode;
use frontier_rs::ReturnSeries;
use frontier_rs::min_variance_weight;

fn main() -> Result<()> {
  // Watson & Head reference dataset, percentage points.
  let x = ReturnSeries::new("X", vec![6.6, 5.6, -9.0, 12.6, 14.0])?;
  let y = ReturnSeries::new("Y", vec![24.5, -5.9, 19.9, -7.8, 14.8])?;
  let weight_x = 0.5;

  let engine = DiversificationEngine::new(AnalysisConfig {
    dof: DofMode::Population,
    num_points: 101,
  });
  let report = engine.analyze(&x, &y, weight_x)?;

  let mut table = Table::new();
  table.add_row(row!["", "mean (%)", "std dev (%)"]);
  table.add_row(row![
    x.label(),
    format!("{:.2}", report.pair.x.mean),
    format!("{:.3}", report.pair.x.std_dev)
  ]);
  table.add_row(row![
    y.label(),
    format!("{:.2}", report.pair.y.mean),
    format!("{:.3}", report.pair.y.std_dev)
  ]);
  table.printstd();

  println!("correlation: {:.4}", report.pair.correlation);
  println!(
    "portfolio at w={weight_x}: return {:.2}%, risk {:.3}%",
    report.portfolio.expected_return, report.portfolio.risk
  );

  let min = report.frontier.min_risk();
  println!(
    "sampled minimum risk: {:.3}% at w={:.2}",
    min.risk, min.weight_x
  );
  if let Some(w) = min_variance_weight(
    report.pair.x.std_dev,
    report.pair.y.std_dev,
    report.pair.correlation,
  ) {
    println!("closed-form minimum-variance weight: {w:.4}");
  }

  Ok(())
}
