use anyhow::{Context, Result};
use redfin_etl::{logging, stages, Config};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();

    let cfg = Config::from_env().context("loading configuration")?;
    info!("downloading {}", cfg.url);

    let summary = stages::fetch_stage(&cfg)
        .await
        .with_context(|| format!("downloading {}", cfg.url))?;

    info!(
        "✔ wrote {} bytes from {} to {} in {:?}",
        summary.bytes,
        summary.url,
        summary.path.display(),
        summary.elapsed
    );
    Ok(())
}
