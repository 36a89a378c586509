use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::Summary;

pub fn log_info(label: &str, value: &str) {
    println!("{:>20}: {}", label.bold(), value);
}

pub fn spinner(label: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{msg} {spinner:.green}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(format!("{:>20}: {}", label.bold(), "...".dimmed()));
    bar.tick();
    bar
}

pub fn format_trend(summary: &Summary) -> String {
    let sign = if summary.trend.intercept < 0.0 { '-' } else { '+' };
    format!(
        "y = {:.4}x {} {:.4}",
        summary.trend.slope,
        sign,
        summary.trend.intercept.abs()
    )
}

pub fn log_summary(summary: &Summary) {
    log_info("Records", &summary.count.to_string().magenta().to_string());
    log_info(
        "Avg time",
        &format!(
            "{} ms (low: {}ms, high: {}ms)",
            format!("{:.2}", summary.mean).magenta(),
            format!("{:.2}", summary.low).magenta(),
            format!("{:.2}", summary.high).magenta(),
        ),
    );
    log_info(
        "Trendline",
        &format!(
            "{} (r²: {})",
            format_trend(summary).magenta(),
            format!("{:.4}", summary.r_squared).magenta()
        ),
    );
    log_info("Chart", &summary.output.display().to_string());
}
