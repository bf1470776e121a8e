use anyhow::{Context, Result};
use redfin_etl::{logging, stages, Config};
use tracing::info;

fn main() -> Result<()> {
    logging::init();

    let cfg = Config::from_env().context("loading configuration")?;
    info!("loading {}", cfg.raw_path.display());

    let summary = stages::transform_stage(&cfg)
        .with_context(|| format!("cleaning {}", cfg.raw_path.display()))?;

    match summary.max_period_end {
        Some(period) => info!(
            "✔ {} counties for period ending {} → {}",
            summary.kept,
            period,
            cfg.clean_path.display()
        ),
        None => info!("raw file had no rows; wrote header only"),
    }
    Ok(())
}
