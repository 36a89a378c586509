//! Plots average revocation time against the number of delegations, with a
//! least-squares trendline, and saves the chart as a PNG.

pub mod backend;
pub mod chart;
pub mod config;
pub mod error;
pub mod records;
pub mod series;
pub mod stats;
pub mod utils;
pub mod viewer;

use std::path::PathBuf;

pub use config::Config;
pub use error::{PlotError, Result};
pub use records::Record;
pub use series::Series;
pub use stats::Trend;

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Summary {
    pub count: usize,
    pub trend: Trend,
    pub r_squared: f64,
    pub mean: f64,
    pub low: f64,
    pub high: f64,
    pub output: PathBuf,
}

impl Summary {
    fn new(series: &Series, trend: Trend, output: PathBuf) -> Self {
        let xs = series.xs();
        Summary {
            count: series.len(),
            r_squared: trend.r_squared(&xs, &series.avg_time_ms),
            mean: stats::average(&series.avg_time_ms),
            low: stats::min(&series.avg_time_ms),
            high: stats::max(&series.avg_time_ms),
            trend,
            output,
        }
    }
}

/// Fits the trendline for a record sequence.
pub fn fit(records: &[Record]) -> Result<(Series, Trend)> {
    let series = Series::from_records(records);
    let trend = stats::linear_fit(&series.xs(), &series.avg_time_ms)?;
    tracing::debug!(
        slope = trend.slope,
        intercept = trend.intercept,
        points = series.len(),
        "fitted trendline"
    );
    Ok((series, trend))
}

/// Load, fit, render, save. Nothing is written unless the fit succeeds.
pub fn run(config: &Config) -> Result<Summary> {
    tracing::info!(input = %config.input.display(), "reading records");
    let records = records::load_records(&config.input)?;
    let (series, trend) = fit(&records)?;

    let bar = utils::spinner("Rendering chart");
    let rendered = chart::render_png(
        &config.output,
        &series,
        &trend,
        (config.width, config.height),
    );
    bar.finish_and_clear();
    rendered?;

    if config.show {
        viewer::show(&config.output);
    }

    Ok(Summary::new(&series, trend, config.output.clone()))
}
