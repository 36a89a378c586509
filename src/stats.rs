use crate::error::{PlotError, Result};

pub fn average(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Degree-1 polynomial `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub slope: f64,
    pub intercept: f64,
}

impl Trend {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn sum_squared_residuals(&self, xs: &[f64], ys: &[f64]) -> f64 {
        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| (y - self.at(x)).powi(2))
            .sum()
    }

    /// Coefficient of determination. A flat series that the line matches
    /// exactly scores 1.0.
    pub fn r_squared(&self, xs: &[f64], ys: &[f64]) -> f64 {
        let mean_y = average(ys);
        let ss_tot: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();
        let ss_res = self.sum_squared_residuals(xs, ys);
        if ss_tot == 0.0 {
            if ss_res == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        }
    }
}

/// Ordinary least squares over `(xs, ys)`.
///
/// Needs at least two points with distinct `x`; anything less has no unique
/// line through it. `xs` and `ys` must have the same length.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Result<Trend> {
    debug_assert_eq!(xs.len(), ys.len(), "xs and ys differ in length");
    let count = xs.len();
    if count < 2 {
        return Err(PlotError::InsufficientData { count });
    }

    let mean_x = average(xs);
    let mean_y = average(ys);

    let (sxx, sxy) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(sxx, sxy), (&x, &y)| {
            let dx = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });
    if sxx == 0.0 {
        return Err(PlotError::DegenerateFit { count });
    }

    let slope = sxy / sxx;
    let trend = Trend {
        slope,
        intercept: mean_y - slope * mean_x,
    };
    if !(trend.slope.is_finite() && trend.intercept.is_finite()) {
        return Err(PlotError::OutOfRange {
            reason: format!("trendline y = {}x + {}", trend.slope, trend.intercept),
        });
    }
    Ok(trend)
}
