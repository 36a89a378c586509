use anyhow::{Context, Result};
use revoc_plot::utils::log_summary;
use revoc_plot::Config;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = Config::default();
    let summary = revoc_plot::run(&config).with_context(|| {
        format!(
            "could not plot {} to {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    log_summary(&summary);
    Ok(())
}
