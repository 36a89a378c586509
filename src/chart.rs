use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::backend::FontSafeBackend;
use crate::error::{PlotError, Result};
use crate::series::Series;
use crate::stats::{self, Trend};

pub const TITLE: &str = "Average Time vs Number of Delegations";
pub const X_DESC: &str = "Number of delegations";
pub const Y_DESC: &str = "Average Revocation Time (ms)";

const FONT_FAMILY: &str = "sans-serif";
const DATA_COLOR: RGBColor = RGBColor(31, 119, 180);
const TREND_COLOR: RGBColor = RED;

/// Y range covering both the measurements and the trendline, padded by 5%.
/// Fails when the padded range does not fit in an `f64`.
pub fn value_range(series: &Series, trend: &Trend) -> Result<Range<f64>> {
    let fitted: Vec<f64> = series.xs().iter().map(|&x| trend.at(x)).collect();
    let low = stats::min(&series.avg_time_ms).min(stats::min(&fitted));
    let high = stats::max(&series.avg_time_ms).max(stats::max(&fitted));
    let pad = if high > low { (high - low) * 0.05 } else { 1.0 };
    let range = (low - pad)..(high + pad);

    if !(range.start.is_finite() && range.end.is_finite() && (range.end - range.start).is_finite())
    {
        return Err(PlotError::OutOfRange {
            reason: format!("y axis spans {} to {}", low, high),
        });
    }
    Ok(range)
}

/// Decimal places that keep neighbouring y labels distinct over `span`.
pub fn label_precision(span: f64) -> usize {
    if !(span.is_finite() && span > 0.0) {
        return 1;
    }
    let step = span / 10.0;
    (-step.log10().floor()).clamp(1.0, 12.0) as usize
}

pub fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &Series,
    trend: &Trend,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    // One unit of padding on either side; the padding ticks stay unlabelled.
    let edge = series.len() as u32 + 1;
    let y_range = value_range(series, trend).unwrap_or(0.0..1.0);
    let precision = label_precision(y_range.end - y_range.start);
    let x_fmt = |x: &u32| {
        if *x == 0 || *x >= edge {
            String::new()
        } else {
            x.to_string()
        }
    };
    let y_fmt = |y: &f64| format!("{:.*}", precision, y);

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (FONT_FAMILY, 20))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0u32..edge, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(edge as usize + 1)
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .axis_desc_style((FONT_FAMILY, 14))
        .draw()?;

    chart
        .draw_series(LineSeries::new(series.indexed(), DATA_COLOR.stroke_width(2)).point_size(4))?
        .label("Data")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DATA_COLOR.stroke_width(2)));

    let fitted: Vec<(u32, f64)> = series
        .indexed()
        .map(|(x, _)| (x, trend.at(x as f64)))
        .collect();
    chart
        .draw_series(DashedLineSeries::new(fitted, 8, 5, TREND_COLOR.stroke_width(2)))?
        .label("Trendline")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], TREND_COLOR.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT_FAMILY, 14))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Renders the chart as a PNG at `path`.
///
/// The image is drawn into a temporary file next to `path` and renamed over
/// it only once complete, so a failed render leaves any previous chart intact.
pub fn render_png(path: &Path, series: &Series, trend: &Trend, size: (u32, u32)) -> Result<()> {
    value_range(series, trend)?;

    let render_error = |reason: String| PlotError::Render {
        path: path.to_path_buf(),
        reason,
    };
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let partial = tempfile::Builder::new()
        .prefix(".revoc-plot-")
        .suffix(".png")
        .tempfile_in(dir)
        .map_err(|e| render_error(e.to_string()))?;

    let drawn = {
        let root = FontSafeBackend::new(BitMapBackend::new(partial.path(), size)).into_drawing_area();
        draw_chart(&root, series, trend).map_err(|e| e.to_string())
    };

    if let Err(reason) = drawn {
        let partial_path = partial.path().to_path_buf();
        if let Err(e) = partial.close() {
            tracing::warn!(path = %partial_path.display(), error = %e, "could not remove partial chart");
        }
        return Err(render_error(reason));
    }

    partial
        .persist(path)
        .map_err(|e| render_error(e.error.to_string()))?;

    tracing::info!(path = %path.display(), width = size.0, height = size.1, "chart saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Record;

    fn series_of(times: &[f64]) -> Series {
        let records: Vec<Record> = times.iter().map(|&avg_time| Record { avg_time }).collect();
        Series::from_records(&records)
    }

    fn svg_of(series: &Series, trend: &Trend) -> String {
        let mut svg = String::new();
        {
            let root = FontSafeBackend::new(SVGBackend::with_string(&mut svg, (640, 480)))
                .into_drawing_area();
            draw_chart(&root, series, trend).unwrap();
        }
        svg
    }

    fn text_elements(svg: &str) -> Vec<&str> {
        svg.split("</text>")
            .filter_map(|chunk| chunk.rsplit_once('>').map(|(_, text)| text.trim()))
            .collect()
    }

    #[test]
    fn test_value_range_covers_data_and_trend() {
        let series = series_of(&[10.0, 30.0, 20.0]);
        let trend = Trend {
            slope: 5.0,
            intercept: 8.0,
        };
        let range = value_range(&series, &trend).unwrap();
        // data spans 10..30, trend spans 13..23
        assert!((range.start - 9.0).abs() < 1e-9);
        assert!((range.end - 31.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_range_flat_series_is_padded() {
        let series = series_of(&[4.0, 4.0]);
        let trend = Trend {
            slope: 0.0,
            intercept: 4.0,
        };
        assert_eq!(value_range(&series, &trend).unwrap(), 3.0..5.0);
    }

    #[test]
    fn test_value_range_rejects_overflow() {
        let series = series_of(&[-1e308, 1e308]);
        let trend = Trend {
            slope: 0.0,
            intercept: 0.0,
        };
        assert!(matches!(
            value_range(&series, &trend),
            Err(PlotError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_label_precision_follows_span() {
        assert_eq!(label_precision(21.0), 1);
        assert_eq!(label_precision(0.0105), 3);
        assert_eq!(label_precision(0.0), 1);
        assert_eq!(label_precision(f64::INFINITY), 1);
        let labels: Vec<String> = [0.010, 0.011, 0.012]
            .iter()
            .map(|y| format!("{:.*}", label_precision(0.0105), y))
            .collect();
        assert_eq!(labels, vec!["0.010", "0.011", "0.012"]);
    }

    #[test]
    fn test_chart_text_and_ticks() {
        let series = series_of(&[10.0, 20.0, 30.0, 35.0]);
        let trend = stats::linear_fit(&series.xs(), &series.avg_time_ms).unwrap();
        let svg = svg_of(&series, &trend);
        let texts = text_elements(&svg);

        for expected in [TITLE, X_DESC, Y_DESC, "Data", "Trendline"] {
            assert!(texts.contains(&expected), "missing text {expected:?}");
        }

        let x_ticks: Vec<&str> = texts
            .iter()
            .copied()
            .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
            .collect();
        assert_eq!(x_ticks, vec!["1", "2", "3", "4"]);
        for half in ["0.5", "1.5", "2.5", "3.5", "4.5"] {
            assert!(!texts.contains(&half), "unexpected tick {half}");
        }
        assert!(!texts.contains(&"0") && !texts.contains(&"5"));
    }

    #[test]
    fn test_trendline_is_dashed() {
        let series = series_of(&[10.0, 20.0, 30.0]);
        let trend = Trend {
            slope: 10.0,
            intercept: 0.0,
        };
        let svg = svg_of(&series, &trend).to_lowercase();

        // legend sample plus several dash segments
        assert!(svg.matches("#ff0000").count() > 3);
        assert!(svg.contains("#1f77b4"));
    }

    #[test]
    fn test_failed_render_keeps_previous_chart() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("chart.png");
        std::fs::write(&output, b"previous").unwrap();

        let series = series_of(&[-1e308, 1e308]);
        let trend = Trend {
            slope: 0.0,
            intercept: 0.0,
        };
        assert!(render_png(&output, &series, &trend, (640, 480)).is_err());

        assert_eq!(std::fs::read(&output).unwrap(), b"previous");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_render_writes_png_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("chart.png");
        let series = series_of(&[1.0, 3.0]);
        let trend = stats::linear_fit(&series.xs(), &series.avg_time_ms).unwrap();

        render_png(&output, &series, &trend, (640, 480)).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
