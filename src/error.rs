use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Input file missing, unreadable, not JSON, not an array, or a record
    /// without a numeric `avg_time`.
    #[error("invalid data in {}: {reason}", path.display())]
    DataFormat { path: PathBuf, reason: String },

    #[error("need at least 2 records to fit a trendline, got {count}")]
    InsufficientData { count: usize },

    #[error("all {count} points share the same x value, no unique trendline")]
    DegenerateFit { count: usize },

    /// Values whose fit or axis range overflows `f64`.
    #[error("values out of plottable range: {reason}")]
    OutOfRange { reason: String },

    #[error("failed to render chart to {}: {reason}", path.display())]
    Render { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, PlotError>;
