use anyhow::{Context, Result};
use redfin_etl::{logging, stages, Config};
use tracing::info;

/// Both stages back to back: fetch the raw file, then clean it.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();
    info!("startup");

    let cfg = Config::from_env().context("loading configuration")?;

    let fetched = stages::fetch_stage(&cfg)
        .await
        .with_context(|| format!("downloading {}", cfg.url))?;
    info!(bytes = fetched.bytes, elapsed = ?fetched.elapsed, "fetch done");

    let summary = stages::transform_stage(&cfg)
        .with_context(|| format!("cleaning {}", cfg.raw_path.display()))?;
    info!(counties = summary.kept, "transform done");

    info!("all done");
    Ok(())
}
